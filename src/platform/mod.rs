//! Platform abstraction layer
//!
//! Browser-facing pieces that do not need `web-sys` to be tested:
//! - Keyboard mapping to held-direction flags
//! - Element ids the host page must provide

pub mod input;

pub use input::{Direction, InputState};

/// DOM element ids the page provides
pub mod dom_ids {
    pub const CANVAS: &str = "gameCanvas";
    pub const SCORE: &str = "scoreDisplay";
    pub const MAIN_MENU: &str = "mainMenu";
    pub const GAME_SCREEN: &str = "gameScreen";
    pub const START_STAGE_1: &str = "startButtonStage1";
    pub const START_STAGE_2: &str = "startButtonStage2";
    pub const STATUS: &str = "gameStatus";
    pub const STATUS_MESSAGE: &str = "statusMessage";
    pub const RESTART: &str = "restartButton";
    pub const NEXT_STAGE: &str = "nextStageButton";
    pub const BACK_TO_MENU: &str = "backToMenuButton";

    /// Class toggled to hide an element
    pub const HIDDEN_CLASS: &str = "hidden";
    /// Canvas attribute carrying JSON settings
    pub const SETTINGS_ATTR: &str = "data-settings";
}
