//! Error taxonomy
//!
//! Nothing here is recoverable by retrying. Init and config failures stop the
//! program before the loop starts; asset and render failures are logged and
//! the affected sprite is left out of the frame.

use std::fmt;
use std::path::PathBuf;

/// Convenience alias used throughout the crate
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug)]
pub enum GameError {
    /// A platform subsystem (video, window, renderer, events) could not start
    Init(String),
    /// A texture file is missing or could not be decoded
    AssetLoad { path: PathBuf, reason: String },
    /// A draw call was rejected by the renderer
    Render(String),
    /// Settings are present but unusable
    Config(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl GameError {
    pub fn asset(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        GameError::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Init(msg) => write!(f, "initialization failed: {msg}"),
            GameError::AssetLoad { path, reason } => {
                write!(f, "unable to load image {}: {reason}", path.display())
            }
            GameError::Render(msg) => write!(f, "render error: {msg}"),
            GameError::Config(msg) => write!(f, "invalid settings: {msg}"),
            GameError::Io(e) => write!(f, "i/o error: {e}"),
            GameError::Json(e) => write!(f, "settings parse error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Json(e)
    }
}
