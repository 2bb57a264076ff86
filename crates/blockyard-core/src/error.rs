//! Error types for the engine.

use thiserror::Error;

/// Engine-wide error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A world-space coordinate reaching the grid was NaN or infinite
    #[error("invalid input: non-finite world coordinate ({0}, {1}, {2})")]
    InvalidInput(f32, f32, f32),

    /// A camera view name not present in the view catalog
    #[error("unknown camera view: {0}")]
    UnknownView(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
