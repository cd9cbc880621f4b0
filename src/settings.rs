//! Game settings
//!
//! Supplied by the host page as JSON in the canvas `data-settings`
//! attribute. Read once at startup; never written back.

use serde::{Deserialize, Serialize};

/// Runtime preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Silence all sound effects
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Log at debug level (per-brick hits, ignored transitions)
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    pub fn log_level(&self) -> log::Level {
        if self.debug_logging {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// Read settings from the canvas attribute (WASM only)
    ///
    /// Logging is not up yet when this runs, so the parse error is returned
    /// alongside the fallback for the caller to report.
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> (Self, Option<serde_json::Error>) {
        use crate::platform::dom_ids::SETTINGS_ATTR;

        match canvas.get_attribute(SETTINGS_ATTR) {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => (settings, None),
                Err(e) => (Self::default(), Some(e)),
            },
            None => (Self::default(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"muted": true}"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.log_level(), log::Level::Info);
    }

    #[test]
    fn test_volumes_clamped() {
        let settings = Settings::from_json(r#"{"master_volume": 3.0, "sfx_volume": -1}"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_debug_logging_level() {
        let settings = Settings::from_json(r#"{"debug_logging": true}"#).unwrap();
        assert_eq!(settings.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{muted").is_err());
        assert!(Settings::from_json(r#"{"muted": "yes"}"#).is_err());
    }
}
