//! DOM affordance model
//!
//! Which panels and buttons are visible, and what they say, is a pure
//! function of the current screen and score. The host applies a `UiView`
//! to the page after every interaction and every frame that changed it.

use crate::session::Screen;

pub const RESTART_LABEL: &str = "Play again";
pub const GAME_OVER_MESSAGE: &str = "Game over!";

pub fn stage_one_clear_message() -> String {
    "Stage 1 clear! Continue to the next stage?".to_string()
}

pub fn auto_advance_message(stage: u32) -> String {
    format!("Stage {stage} clear! Next stage...")
}

pub fn all_clear_message(stages: u32) -> String {
    format!("All {stages} stages clear! Congratulations!")
}

/// Snapshot of everything the page shows outside the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiView {
    pub menu_visible: bool,
    pub game_visible: bool,
    /// Status panel (message + buttons)
    pub status_visible: bool,
    pub status_message: String,
    pub restart_visible: bool,
    pub restart_label: &'static str,
    pub next_visible: bool,
    pub menu_button_visible: bool,
    pub score_text: String,
}

impl UiView {
    pub fn for_screen(screen: Screen, score: u32) -> Self {
        let mut view = Self {
            menu_visible: false,
            game_visible: true,
            status_visible: screen.is_paused(),
            status_message: String::new(),
            restart_visible: true,
            restart_label: RESTART_LABEL,
            next_visible: false,
            menu_button_visible: false,
            score_text: score.to_string(),
        };

        match screen {
            Screen::Menu => {
                view.menu_visible = true;
                view.game_visible = false;
            }
            Screen::Playing { .. } => {}
            Screen::OfferNextOrRestart { .. } => {
                view.status_message = stage_one_clear_message();
                view.next_visible = true;
                view.menu_button_visible = true;
            }
            Screen::StageCleared { stage } => {
                view.status_message = auto_advance_message(stage);
                view.restart_visible = false;
            }
            Screen::AllStagesCleared { stages } => {
                view.status_message = all_clear_message(stages);
                view.menu_button_visible = true;
            }
            Screen::GameOver { .. } => {
                view.status_message = GAME_OVER_MESSAGE.to_string();
                view.menu_button_visible = true;
            }
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_hides_game() {
        let view = UiView::for_screen(Screen::Menu, 0);
        assert!(view.menu_visible);
        assert!(!view.game_visible);
        assert!(!view.status_visible);
        assert!(!view.next_visible);
        assert!(!view.menu_button_visible);
        assert_eq!(view.score_text, "0");
    }

    #[test]
    fn test_playing_shows_only_score() {
        let view = UiView::for_screen(Screen::Playing { stage: 2 }, 17);
        assert!(view.game_visible);
        assert!(!view.status_visible);
        assert_eq!(view.score_text, "17");
    }

    #[test]
    fn test_stage_cleared_hides_every_button() {
        let view = UiView::for_screen(Screen::StageCleared { stage: 2 }, 80);
        assert!(view.status_visible);
        assert_eq!(view.status_message, "Stage 2 clear! Next stage...");
        assert!(!view.restart_visible);
        assert!(!view.next_visible);
        assert!(!view.menu_button_visible);
    }

    #[test]
    fn test_all_clear_has_no_advance() {
        let view = UiView::for_screen(Screen::AllStagesCleared { stages: 2 }, 80);
        assert_eq!(view.status_message, "All 2 stages clear! Congratulations!");
        assert!(!view.next_visible);
        assert!(view.menu_button_visible);
        assert!(view.restart_visible);
        assert_eq!(view.restart_label, RESTART_LABEL);
    }
}
