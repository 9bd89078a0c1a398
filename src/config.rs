//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "TICTACTOE_CONFIG";

/// Who makes the first move of each round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// The human always starts.
    Human,
    /// The computer always starts.
    Computer,
    /// A coin flip decides each round.
    Random,
    /// The human is asked before each round.
    #[default]
    Ask,
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Round wins needed to take a match.
    match_goal: u32,

    /// Who starts each round.
    first_player: FirstPlayer,

    /// Seed for the computer's random choices; entropy when absent.
    seed: Option<u64>,

    /// Clear the terminal before drawing the board.
    clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_goal: 5,
            first_player: FirstPlayer::default(),
            seed: None,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(match_goal = config.match_goal, first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be played.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.match_goal == 0 {
            return Err(ConfigError::new(
                "match_goal must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.match_goal(), 5);
        assert_eq!(*config.first_player(), FirstPlayer::Ask);
        assert_eq!(*config.seed(), None);
        assert!(*config.clear_screen());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str("first_player = \"computer\"").unwrap();
        assert_eq!(*config.first_player(), FirstPlayer::Computer);
        assert_eq!(*config.match_goal(), 5);
    }

    #[test]
    fn test_setters_chain() {
        let config = GameConfig::default()
            .with_match_goal(3)
            .with_seed(Some(11))
            .with_clear_screen(false);
        assert_eq!(*config.match_goal(), 3);
        assert_eq!(*config.seed(), Some(11));
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_zero_goal_rejected() {
        let err = GameConfig::default().with_match_goal(0).validate().unwrap_err();
        assert!(err.message.contains("match_goal"));
    }

    #[test]
    fn test_first_player_display() {
        assert_eq!(FirstPlayer::Random.to_string(), "random");
    }
}
