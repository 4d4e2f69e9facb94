//! Errors for the fallible edges of the crate.
//!
//! Game actions never fail: an illegal move is a silent no-op. Only
//! loading configuration and encoding snapshots can go wrong.

use thiserror::Error;

/// Configuration could not be loaded or is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON for `GamesConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid { field, reason: reason.into() }
    }
}

/// A game state could not be captured or restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),

    /// The snapshot belongs to a different game than the one mounted.
    #[error("snapshot is for {found}, but {expected} is mounted")]
    WrongGame { expected: String, found: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::invalid("snake.width", "must be at least 2");
        assert_eq!(err.to_string(), "invalid config value `snake.width`: must be at least 2");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let parse: Result<u32, _> = serde_json::from_str("nope");
        let err: ConfigError = parse.unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
