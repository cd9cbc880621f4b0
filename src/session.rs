//! Stage flow state machine
//!
//! A `Session` owns the game state and decides what each frame's events
//! mean: brick clears lead to stage transitions, a lost ball ends the run.
//! The frame ticker runs exactly while the screen is `Playing`.

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_START_SPEED, STAGE_ADVANCE_DELAY_MS};
use crate::renderer::{Surface, draw_frame};
use crate::scheduler::{FrameTicker, OneShotTimer, PendingTimer, TimerToken};
use crate::sim::{Arena, GameEvent, GameState, StageTable, TickInput, tick};
use crate::ui::UiView;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Stage selection; nothing runs
    Menu,
    /// Frame loop active
    Playing { stage: u32 },
    /// Cleared a middle stage; the next one starts after a short delay
    StageCleared { stage: u32 },
    /// Cleared the first stage; player picks advance, restart or menu
    OfferNextOrRestart { stage: u32 },
    /// Cleared the final stage
    AllStagesCleared { stages: u32 },
    /// Ball fell past the paddle
    GameOver { stage: u32 },
}

impl Screen {
    pub fn is_paused(&self) -> bool {
        !matches!(self, Screen::Menu | Screen::Playing { .. })
    }
}

pub struct Session {
    state: GameState,
    screen: Screen,
    stages: StageTable,
    ticker: FrameTicker,
    advance_timer: OneShotTimer,
}

impl Session {
    pub fn new(arena: Arena) -> Self {
        Self::with_stages(arena, StageTable::default())
    }

    pub fn with_stages(arena: Arena, stages: StageTable) -> Self {
        Self {
            state: GameState::new(arena),
            screen: Screen::Menu,
            stages,
            ticker: FrameTicker::default(),
            advance_timer: OneShotTimer::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn view(&self) -> UiView {
        UiView::for_screen(self.screen, self.state.score)
    }

    /// Whether the host should keep requesting animation frames
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// A stage has been cleared and no new run has started since
    pub fn has_won(&self) -> bool {
        matches!(
            self.screen,
            Screen::StageCleared { .. }
                | Screen::OfferNextOrRestart { .. }
                | Screen::AllStagesCleared { .. }
        )
    }

    /// The stage-advance timer, if one is waiting to fire
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.advance_timer.pending()
    }

    /// Start a fresh run on `number`: score 0, full grid, base ball speed
    pub fn start_stage(&mut self, number: u32) -> bool {
        let Some(stage) = self.stages.get(number).copied() else {
            log::warn!("No stage {number}, staying on {:?}", self.screen);
            return false;
        };

        self.advance_timer.cancel();
        self.state = GameState::new(self.state.arena);
        self.state.load_stage(&stage, BALL_START_SPEED);
        self.enter_playing(number);
        true
    }

    /// Replay the current stage from scratch
    pub fn restart(&mut self) -> bool {
        match self.screen {
            Screen::OfferNextOrRestart { .. }
            | Screen::AllStagesCleared { .. }
            | Screen::GameOver { .. } => self.start_stage(self.state.stage),
            screen => {
                log::debug!("Restart ignored on {screen:?}");
                false
            }
        }
    }

    /// Move on from the first-stage offer to the following stage
    pub fn advance(&mut self) -> bool {
        let Screen::OfferNextOrRestart { stage } = self.screen else {
            log::debug!("Advance ignored on {:?}", self.screen);
            return false;
        };
        self.load_next_stage(stage)
    }

    /// Drop everything and go back to stage selection
    pub fn back_to_menu(&mut self) {
        if self.advance_timer.cancel() {
            log::info!("Pending stage advance canceled");
        }
        self.ticker.stop();
        self.state = GameState::new(self.state.arena);
        self.screen = Screen::Menu;
        log::info!("Back to menu");
    }

    /// Deliver a fired timer; stale tokens are ignored
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.advance_timer.fire(token) {
            log::debug!("Stale timer {token:?} ignored");
            return false;
        }
        match self.screen {
            Screen::StageCleared { stage } => self.load_next_stage(stage),
            screen => {
                log::warn!("Stage advance fired on {screen:?}");
                false
            }
        }
    }

    /// Run one animation frame; a no-op unless the loop is running
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        input: &TickInput,
        surface: &mut S,
    ) -> Vec<GameEvent> {
        let Screen::Playing { stage } = self.screen else {
            return Vec::new();
        };
        if !self.ticker.is_running() {
            return Vec::new();
        }

        draw_frame(surface, &self.state);
        let events = tick(&mut self.state, input);

        for event in &events {
            if let GameEvent::BrickDestroyed { column, row } = event {
                log::debug!(
                    "Brick ({column}, {row}) destroyed, score {}",
                    self.state.score
                );
            }
        }

        // A clear in the same frame as a miss still counts as a clear
        if events.contains(&GameEvent::BoardCleared) {
            self.on_board_cleared(stage);
        } else if events.contains(&GameEvent::BallLost) {
            self.on_ball_lost(stage);
        }

        events
    }

    fn enter_playing(&mut self, stage: u32) {
        self.screen = Screen::Playing { stage };
        self.ticker.start();
        log::info!("Stage {stage} started (score {})", self.state.score);
    }

    fn load_next_stage(&mut self, stage: u32) -> bool {
        let Some(next) = self.stages.get(stage + 1).copied() else {
            log::warn!("Stage {stage} has no successor");
            return false;
        };
        self.state.load_stage(&next, next.advance_speed());
        self.enter_playing(next.number);
        true
    }

    fn on_board_cleared(&mut self, stage: u32) {
        self.ticker.stop();
        let final_stage = self.stages.final_stage();

        self.screen = if stage >= final_stage {
            log::info!("All {final_stage} stages cleared, score {}", self.state.score);
            Screen::AllStagesCleared {
                stages: final_stage,
            }
        } else if stage == 1 {
            log::info!("Stage 1 cleared, waiting for player");
            Screen::OfferNextOrRestart { stage }
        } else {
            log::info!("Stage {stage} cleared, advancing in {STAGE_ADVANCE_DELAY_MS} ms");
            self.advance_timer.arm(STAGE_ADVANCE_DELAY_MS);
            Screen::StageCleared { stage }
        };
    }

    fn on_ball_lost(&mut self, stage: u32) {
        self.ticker.stop();
        self.screen = Screen::GameOver { stage };
        log::info!("Game over on stage {stage}, score {}", self.state.score);
    }
}
