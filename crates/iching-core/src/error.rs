//! Error types for hexagram operations.

use thiserror::Error;

use crate::figure::Shape;

/// Result type for hexagram operations.
pub type HexResult<T> = Result<T, HexError>;

/// Errors that can occur while building or looking up a reading.
#[derive(Debug, Error)]
pub enum HexError {
    /// A figure string was not six characters of `x`/`y`.
    #[error(
        "invalid figure encoding {0:?}: expected six of 'x' (solid) or 'y' (broken), bottom line first"
    )]
    InvalidEncoding(String),

    /// A hexagram identity outside 1-64 was requested.
    #[error("hexagram identity {0} is out of range (expected 1-64)")]
    IdentityOutOfRange(i64),

    /// A resolved shape has no record in the reference table.
    #[error("no reference record matches shape {0}")]
    UnknownShape(Shape),

    /// The reference table could not be deserialized.
    #[error("reference table is not valid JSON: {0}")]
    Dataset(#[from] serde_json::Error),

    /// A reference record carries an unusable identity or shape.
    #[error("reference record {id} is malformed: {reason}")]
    MalformedRecord {
        /// Identity of the offending record as stored.
        id: u8,
        /// What is wrong with it.
        reason: String,
    },
}

impl HexError {
    /// Whether this error was caused by user input rather than bad data.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidEncoding(_) | Self::IdentityOutOfRange(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors() {
        assert!(HexError::InvalidEncoding("xyz".into()).is_usage_error());
        assert!(HexError::IdentityOutOfRange(65).is_usage_error());
        assert!(!HexError::UnknownShape(Shape::default()).is_usage_error());
    }

    #[test]
    fn messages() {
        assert_eq!(
            HexError::IdentityOutOfRange(0).to_string(),
            "hexagram identity 0 is out of range (expected 1-64)"
        );
        assert_eq!(
            HexError::UnknownShape(Shape::default()).to_string(),
            "no reference record matches shape xxxxxx"
        );
        assert!(
            HexError::InvalidEncoding("xxxxxa".into())
                .to_string()
                .contains("\"xxxxxa\"")
        );
    }
}
