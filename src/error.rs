//! Error types for the terminal front-end.
//!
//! The simulation itself cannot fail; everything here belongs to the shell
//! around it and is fatal.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    /// Terminal setup, drawing or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// A sprite could not be loaded.
    #[error("Failed to load sprite '{name}': {reason}")]
    Asset { name: &'static str, reason: String },

    /// Bad command-line usage.
    #[error("{0}")]
    Usage(String),
}

impl ShellError {
    pub fn asset(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Asset {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_message() {
        let err = ShellError::asset("dead", "sprite art is empty");
        assert_eq!(
            err.to_string(),
            "Failed to load sprite 'dead': sprite art is empty"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no tty");
        let err: ShellError = io.into();
        assert!(matches!(err, ShellError::Terminal(_)));
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }
}
