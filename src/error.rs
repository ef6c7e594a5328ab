use std::path::PathBuf;

/// Errors raised while building, editing or parsing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board shape: row {row} has {found} cells, expected {expected}")]
    InvalidBoardShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell at ({row}, {col}) claims position ({found_row}, {found_col})")]
    MisplacedCell {
        row: usize,
        col: usize,
        found_row: usize,
        found_col: usize,
    },

    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("board is {rows}x{cols}, configured for {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
