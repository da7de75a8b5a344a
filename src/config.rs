//! Board Configuration
//!
//! Build-time settings for the board.

use log::LevelFilter;

use crate::models::NoteColor;

/// localStorage key holding the serialized board
pub const STORAGE_KEY: &str = "sticky_notes_app_v1";

/// Board settings
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub storage_key: String,
    /// Color preselected in the compose bar
    pub default_color: NoteColor,
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_color: NoteColor::PALETTE[0],
            log_level: default_log_level(),
        }
    }
}

impl BoardConfig {
    /// Defaults, with the log level taken from `STICKY_BOARD_LOG` at build time
    pub fn from_build_env() -> Self {
        Self {
            log_level: parse_log_level(option_env!("STICKY_BOARD_LOG")),
            ..Self::default()
        }
    }
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Parse a level name, falling back to the build default
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or_else(default_log_level)
}
