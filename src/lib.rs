//! # Connect Four Verdict
//!
//! Win detection for Connect Four board snapshots. The owning UI component
//! holds and mutates the board; this crate only inspects it after each move.
//!
//! ## Modules
//!
//! - [`game`]: Board model, cell colors, and the four-in-a-row scan
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
