//! Structural validator for the token stream
//!
//! The long TextGrid grammar is positional: nothing in the token stream
//! names its fields, so structure can only be checked by counting. This
//! module locates every tier header, pins the first one to the fixed
//! document-header offset, and verifies that each tier's annotation span
//! divides evenly by the tier type's per-annotation stride. Any violation
//! is a hard failure for the whole document.

use crate::document::TierType;
use crate::error::{Error, Result};
use crate::token::Token;

/// Document-header tokens preceding the first tier header: file-type
/// marker, object class, xmin, xmax, tier count.
pub const DOC_HEADER_LEN: usize = 5;

/// Tokens a tier header occupies: class, name, xmin, xmax, annotation
/// count.
pub const TIER_HEADER_LEN: usize = 5;

/// Tokens consumed by one interval annotation: xmin, xmax, text.
pub const INTERVAL_STRIDE: usize = 3;

/// Tokens consumed by one point annotation: xmin, text.
pub const POINT_STRIDE: usize = 2;

/// One validated tier boundary: where the tier's slice starts in the token
/// stream, and which kind of tier it declares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBoundary {
    /// Index of the tier's class token.
    pub start: usize,
    pub tier_type: TierType,
}

impl TierBoundary {
    /// Length of the tier's annotation span, given where the next tier (or
    /// the end of the stream) begins.
    pub fn span_len(&self, end: usize) -> Result<usize> {
        (end - self.start).checked_sub(TIER_HEADER_LEN).ok_or_else(|| {
            Error::Misformatted(format!("truncated tier header at token {}", self.start + 1))
        })
    }
}

/// Locate and validate every tier boundary in the token stream.
///
/// Returns the boundaries in file order, or fails if the first tier header
/// is not at the fixed document-header offset, a tier class is unknown, or
/// a tier's annotation span does not divide by its stride.
pub fn locate_tiers(tokens: &[Token]) -> Result<Vec<TierBoundary>> {
    let mut boundaries = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        if let Token::Text(value) = token {
            if value.contains("Tier") {
                let tier_type = TierType::from_class(value).ok_or_else(|| {
                    Error::Misformatted(format!("unknown tier class {:?} at token {}", value, index + 1))
                })?;
                boundaries.push(TierBoundary { start: index, tier_type });
            }
        }
    }

    match boundaries.first() {
        Some(first) if first.start == DOC_HEADER_LEN => {}
        Some(first) => {
            return Err(Error::Misformatted(format!(
                "first tier header at token {}, expected {}",
                first.start + 1,
                DOC_HEADER_LEN + 1
            )))
        }
        None => {
            return Err(Error::Misformatted("no tier headers found".to_string()));
        }
    }

    for (position, boundary) in boundaries.iter().enumerate() {
        let end = boundaries
            .get(position + 1)
            .map_or(tokens.len(), |next| next.start);
        let span = boundary.span_len(end)?;
        let stride = boundary.tier_type.stride();
        if span % stride != 0 {
            return Err(Error::Misformatted(format!(
                "tier {} ({}) has {} annotation tokens, not a multiple of {}",
                position + 1,
                boundary.tier_type.label(),
                span,
                stride
            )));
        }
    }

    Ok(boundaries)
}
