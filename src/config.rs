//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::PlayerSymbols;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol of the first mover.
    #[serde(default = "default_first_symbol")]
    first_symbol: String,

    /// Symbol of the second mover.
    #[serde(default = "default_second_symbol")]
    second_symbol: String,
}

fn default_first_symbol() -> String {
    "X".to_string()
}

fn default_second_symbol() -> String {
    "O".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_symbol: default_first_symbol(),
            second_symbol: default_second_symbol(),
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            first = %config.first_symbol,
            second = %config.second_symbol,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Resolves the configuration from a file and command-line overrides.
    ///
    /// An explicit `config` path must exist. Without one, `default_path` is
    /// read if present, otherwise the defaults apply. Override symbols replace
    /// file values before validation.
    #[instrument(skip(default_path), fields(default_path = %default_path.as_ref().display()))]
    pub fn load(
        config: Option<&Path>,
        default_path: impl AsRef<Path>,
        first_symbol: Option<String>,
        second_symbol: Option<String>,
    ) -> Result<Self, ConfigError> {
        let default_path = default_path.as_ref();
        let config = match config {
            Some(path) => Self::from_file(path)?,
            None if default_path.exists() => Self::from_file(default_path)?,
            None => {
                info!("No config file found, using defaults");
                Self::default()
            }
        };

        config.with_overrides(first_symbol, second_symbol)
    }

    /// Replaces symbols given on the command line, then validates.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        first_symbol: Option<String>,
        second_symbol: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(symbol) = first_symbol {
            debug!(%symbol, "Overriding first symbol");
            self.first_symbol = symbol;
        }
        if let Some(symbol) = second_symbol {
            debug!(%symbol, "Overriding second symbol");
            self.second_symbol = symbol;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that both symbols can be told apart on the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for symbol in [&self.first_symbol, &self.second_symbol] {
            if symbol.is_empty() {
                return Err(ConfigError::new("Player symbols must not be empty"));
            }
            if symbol.chars().any(char::is_whitespace) {
                return Err(ConfigError::new(format!(
                    "Player symbol {:?} must not contain whitespace",
                    symbol
                )));
            }
        }
        if self.first_symbol == self.second_symbol {
            return Err(ConfigError::new(format!(
                "Both players use the symbol {:?}",
                self.first_symbol
            )));
        }
        Ok(())
    }

    /// Symbol pair handed to the engine.
    pub fn symbols(&self) -> PlayerSymbols {
        PlayerSymbols::new(self.first_symbol.clone(), self.second_symbol.clone())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
