//! Error types for TextGrid parsing

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a TextGrid document.
///
/// All errors are fatal for the document being parsed: the caller receives
/// either a complete row sequence or one of these. Batch callers are
/// expected to isolate failures per document themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The input does not contain the `ooTextFile` marker and is rejected
    /// before the pipeline runs.
    MissingMarker,
    /// The token stream fails a structural check: the first tier header is
    /// not at the expected offset, a tier header is truncated, or a tier's
    /// annotation span is not a multiple of its per-annotation stride.
    Misformatted(String),
    /// A bare (unquoted) field could not be parsed as a number.
    InvalidNumber(String),
    /// A token at a fixed offset had the wrong type, e.g. text where a
    /// numeric bound was expected.
    UnexpectedToken {
        expected: &'static str,
        index: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingMarker => {
                write!(f, "Not a TextGrid: missing 'ooTextFile' marker")
            }
            Error::Misformatted(detail) => {
                write!(f, "TextGrid appears misformatted: {}", detail)
            }
            Error::InvalidNumber(raw) => {
                write!(f, "Invalid numeric field: {:?}", raw)
            }
            Error::UnexpectedToken { expected, index } => {
                write!(f, "Expected {} at token {}", expected, index)
            }
        }
    }
}

impl std::error::Error for Error {}
