use std::path::Path;

use crate::error::{BoardError, ConfigError};
use crate::game::{Board, COLS, ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub output: OutputConfig,
}

/// Expected board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Reject snapshots whose size differs from `rows` x `cols`.
    pub enforce_dimensions: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
            enforce_dimensions: false,
        }
    }
}

impl BoardConfig {
    /// Create an empty board of the configured size.
    pub fn empty_board(&self) -> Board {
        Board::new(self.rows, self.cols)
    }

    /// Check a snapshot against the configured size when enforcement is on.
    pub fn check(&self, board: &Board) -> Result<(), BoardError> {
        if self.enforce_dimensions
            && (board.num_rows() != self.rows || board.num_cols() != self.cols)
        {
            return Err(BoardError::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: board.num_rows(),
                cols: board.num_cols(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the positions of the winning run.
    pub highlight_run: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            highlight_run: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
