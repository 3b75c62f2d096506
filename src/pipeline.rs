//! Pipeline orchestration
//!
//! Chains the three stages — lexer, structural validator, tier assembler —
//! into the two public entry points. The pipeline is a pure function of
//! its input text: no state survives between calls, so independent
//! documents can be parsed concurrently without coordination.

use crate::assembly::assemble;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::lexing::lex;
use crate::rows::Row;
use crate::structure::locate_tiers;

/// Marker that must appear somewhere in the input for it to be treated as
/// a text-format TextGrid at all. Checked before the pipeline runs.
pub const TEXT_FILE_MARKER: &str = "ooTextFile";

/// Parse a long-format TextGrid into its flat row sequence.
pub fn parse(source: &str) -> Result<Vec<Row>> {
    Ok(parse_document(source)?.into_rows())
}

/// Parse a long-format TextGrid into the structured document model.
pub fn parse_document(source: &str) -> Result<Document> {
    if !source.lines().any(|line| line.contains(TEXT_FILE_MARKER)) {
        return Err(Error::MissingMarker);
    }
    let tokens = lex(source)?;
    let boundaries = locate_tiers(&tokens)?;
    assemble(&tokens, &boundaries)
}
