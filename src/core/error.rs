//! Error types for core module
//!
//! Covers settings persistence and failures surfaced from the rules engine at
//! the command boundary.

use chess_engine::ChessEngineError;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A move or square rejected by the engine
    #[error(transparent)]
    Engine(#[from] ChessEngineError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
