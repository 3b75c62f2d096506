//! Tier assembler
//!
//! Walks each validated tier slice of the token stream and builds the
//! document model: the four fixed-offset header fields first, then the
//! annotation span partitioned into stride-sized groups in strict
//! sequential order. The validator has already checked that every span
//! divides evenly, so the walk here consumes each slice exactly.

use crate::document::{Annotation, Document, Tier, TierHeader, TierType};
use crate::error::{Error, Result};
use crate::structure::{TierBoundary, TIER_HEADER_LEN};
use crate::token::Token;

/// Offset of the tier name within a tier slice (offset 0 is the class
/// token the validator already consumed).
const NAME_OFFSET: usize = 1;
/// Offset of the tier's lower bound within its slice.
const XMIN_OFFSET: usize = 2;
/// Offset of the tier's upper bound within its slice.
const XMAX_OFFSET: usize = 3;

/// Build the document from the token stream and its validated boundaries.
pub fn assemble(tokens: &[Token], boundaries: &[TierBoundary]) -> Result<Document> {
    let mut tiers = Vec::with_capacity(boundaries.len());
    for (position, boundary) in boundaries.iter().enumerate() {
        let end = boundaries
            .get(position + 1)
            .map_or(tokens.len(), |next| next.start);
        let slice = &tokens[boundary.start..end];
        tiers.push(assemble_tier(slice, boundary.start, boundary.tier_type)?);
    }
    Ok(Document { tiers })
}

/// Build one tier from its slice. `base` is the slice's absolute position
/// in the token stream, used only for error reporting.
fn assemble_tier(slice: &[Token], base: usize, tier_type: TierType) -> Result<Tier> {
    let header = TierHeader {
        tier_type,
        name: expect_text(slice, NAME_OFFSET, base)?.to_string(),
        xmin: expect_number(slice, XMIN_OFFSET, base)?,
        xmax: expect_number(slice, XMAX_OFFSET, base)?,
    };

    // The declared annotation count at offset 4 is trusted, not checked;
    // the validator's stride arithmetic already pinned the span down.
    let stride = tier_type.stride();
    let mut annotations = Vec::new();
    let mut offset = TIER_HEADER_LEN;
    while offset + stride <= slice.len() {
        let index = annotations.len() + 1;
        let annotation = match tier_type {
            TierType::Interval => Annotation::Interval {
                xmin: expect_number(slice, offset, base)?,
                xmax: expect_number(slice, offset + 1, base)?,
                text: expect_text(slice, offset + 2, base)?.to_string(),
                index,
            },
            TierType::Point => Annotation::Point {
                xmin: expect_number(slice, offset, base)?,
                text: expect_text(slice, offset + 1, base)?.to_string(),
                index,
            },
        };
        annotations.push(annotation);
        offset += stride;
    }

    Ok(Tier { header, annotations })
}

fn expect_number(slice: &[Token], offset: usize, base: usize) -> Result<f64> {
    match slice.get(offset) {
        Some(Token::Number(value)) => Ok(*value),
        _ => Err(Error::UnexpectedToken {
            expected: "number",
            index: base + offset + 1,
        }),
    }
}

fn expect_text<'a>(slice: &'a [Token], offset: usize, base: usize) -> Result<&'a str> {
    match slice.get(offset) {
        Some(Token::Text(value)) => Ok(value),
        _ => Err(Error::UnexpectedToken {
            expected: "text",
            index: base + offset + 1,
        }),
    }
}
