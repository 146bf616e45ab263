//! Error types for Cinch
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Cinch operations
pub type CinchResult<T> = Result<T, CinchError>;

/// Main error type for Cinch operations
#[derive(Error, Debug)]
pub enum CinchError {
    /// Bundle manifest does not exist
    ///
    /// The only fatal condition in the bundling pipeline itself; missing
    /// import targets are skipped instead.
    #[error("bundle manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Invalid TOML configuration
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
