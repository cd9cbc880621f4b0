//! Stage definitions
//!
//! A stage is a brick grid plus an obstacle layout. The grid is the same
//! for every stage; the layout is generated from the arena size so the
//! obstacles stay where they belong on any canvas.

use super::state::{Arena, Obstacle};
use crate::consts::*;

/// One level configuration
#[derive(Debug, Clone, Copy)]
pub struct StageDef {
    /// 1-based stage number
    pub number: u32,
    /// Obstacle layout generator
    pub layout: fn(&Arena) -> Vec<Obstacle>,
}

impl StageDef {
    pub fn obstacles(&self, arena: &Arena) -> Vec<Obstacle> {
        (self.layout)(arena)
    }

    /// Per-axis ball speed when this stage is reached by advancing
    pub fn advance_speed(&self) -> f32 {
        BALL_START_SPEED + self.number.saturating_sub(1) as f32
    }
}

/// Open field
pub fn open_layout(_arena: &Arena) -> Vec<Obstacle> {
    Vec::new()
}

/// A center bar below the bricks flanked by two side ledges
pub fn crossbar_layout(arena: &Arena) -> Vec<Obstacle> {
    let mid_y = arena.height / 2.0;
    vec![
        Obstacle::new(
            arena.width / 2.0 - OBSTACLE_WIDTH / 2.0,
            mid_y + 50.0,
            OBSTACLE_WIDTH,
            OBSTACLE_HEIGHT,
        ),
        Obstacle::new(50.0, mid_y, SIDE_OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        Obstacle::new(
            arena.width - 150.0,
            mid_y,
            SIDE_OBSTACLE_WIDTH,
            OBSTACLE_HEIGHT,
        ),
    ]
}

/// Ordered stage list; the last entry is the final stage
#[derive(Debug, Clone)]
pub struct StageTable {
    stages: Vec<StageDef>,
}

impl Default for StageTable {
    fn default() -> Self {
        Self {
            stages: vec![
                StageDef {
                    number: 1,
                    layout: open_layout,
                },
                StageDef {
                    number: 2,
                    layout: crossbar_layout,
                },
            ],
        }
    }
}

impl StageTable {
    /// Build a table from layouts; stage numbers are assigned 1..=n in order
    pub fn from_layouts(layouts: &[fn(&Arena) -> Vec<Obstacle>]) -> Self {
        let stages = layouts
            .iter()
            .zip(1u32..)
            .map(|(&layout, number)| StageDef { number, layout })
            .collect();
        Self { stages }
    }

    pub fn get(&self, number: u32) -> Option<&StageDef> {
        self.stages.iter().find(|s| s.number == number)
    }

    /// Number of the last stage (0 for an empty table)
    pub fn final_stage(&self) -> u32 {
        self.stages.last().map(|s| s.number).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_two_stages() {
        let table = StageTable::default();
        assert_eq!(table.len(), 2);
        assert_eq!(table.final_stage(), 2);
        assert!(table.get(3).is_none());
    }

    #[test]
    fn test_stage_one_is_open() {
        let table = StageTable::default();
        let arena = Arena::default();
        assert!(table.get(1).unwrap().obstacles(&arena).is_empty());
    }

    #[test]
    fn test_stage_two_crossbar_positions() {
        let arena = Arena::default();
        let obstacles = StageTable::default().get(2).unwrap().obstacles(&arena);
        assert_eq!(obstacles.len(), 3);
        assert_eq!(obstacles[0], Obstacle::new(325.0, 350.0, 150.0, 25.0));
        assert_eq!(obstacles[1], Obstacle::new(50.0, 300.0, 100.0, 25.0));
        assert_eq!(obstacles[2], Obstacle::new(650.0, 300.0, 100.0, 25.0));
    }

    #[test]
    fn test_advance_speed_grows_per_stage() {
        let table = StageTable::from_layouts(&[open_layout, open_layout, open_layout]);
        assert_eq!(table.get(1).unwrap().advance_speed(), 5.0);
        assert_eq!(table.get(2).unwrap().advance_speed(), 6.0);
        assert_eq!(table.get(3).unwrap().advance_speed(), 7.0);
    }
}
