//! User settings for listkeeper
//!
//! Manages display preferences shared by both shells. The settings file is
//! only ever read; users create or edit it by hand.

use serde::Deserialize;

use super::paths::KeeperPaths;
use crate::error::KeeperError;

/// User settings for listkeeper
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many entries "View Last N Expenses" shows
    #[serde(default = "default_recent_expense_count")]
    pub recent_expense_count: usize,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_recent_expense_count() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            recent_expense_count: default_recent_expense_count(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if the file doesn't exist
    pub fn load(paths: &KeeperPaths) -> Result<Self, KeeperError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                KeeperError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                KeeperError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.recent_expense_count == 0 {
                return Err(KeeperError::Config(
                    "recent_expense_count must be at least 1".into(),
                ));
            }

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }
}
