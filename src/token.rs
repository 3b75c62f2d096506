//! Token definitions for the long TextGrid format
//!
//! A token is one typed scalar produced by lexing: a floating-point number
//! or a piece of quoted text. Tokens carry no names; their semantic role is
//! determined entirely by their position in the stream, which is why the
//! structural validator and the tier assembler work with fixed offsets and
//! strides rather than with keys.

use serde::Serialize;

/// One typed scalar in the lexed stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Token {
    /// A bare numeric field, e.g. `xmin = 0.5` lexes to `Number(0.5)`.
    Number(f64),
    /// A quoted text field with the quotes already stripped.
    Text(String),
}

impl Token {
    /// Check if this token is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// Check if this token is text
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// The numeric value, if this token is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            Token::Text(_) => None,
        }
    }

    /// The text value, if this token is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(value) => Some(value),
            Token::Number(_) => None,
        }
    }
}
