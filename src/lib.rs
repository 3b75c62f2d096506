//! # textgrid
//!
//! A parser for Praat's long TextGrid annotation format. The crate turns
//! one decoded TextGrid document into a flat, tabular record set: one row
//! per annotated interval or point, grouped by tier.
//!
//! The pipeline has three stages, consumed in sequence:
//!
//! 1. [`lexing`] — a quote-aware character scan producing typed scalar
//!    tokens (the format is schema-less; meaning comes from token order).
//! 2. [`structure`] — locates tier headers in the token stream and checks
//!    the positional grammar's counts against the declared tier types.
//! 3. [`assembly`] — partitions each tier's annotation span into
//!    stride-sized groups and builds the [`document::Document`] model,
//!    which flattens into [`rows::Row`] records.
//!
//! The common entry point is [`parse`]:
//!
//! ```rust
//! let source = std::fs::read_to_string("recording.TextGrid")?;
//! for row in textgrid::parse(&source)? {
//!     println!("{} {:?}", row.tier_name, row.text);
//! }
//! ```
//!
//! Each parse call is a pure function of its input text; there is no
//! shared state, so batch callers may parse many documents concurrently
//! and must only take care to isolate per-document failures.

pub mod assembly;
pub mod document;
pub mod error;
pub mod lexing;
pub mod pipeline;
pub mod rows;
pub mod structure;
pub mod testing;
pub mod token;

pub use document::{Annotation, Document, Tier, TierHeader, TierType};
pub use error::{Error, Result};
pub use pipeline::{parse, parse_document};
pub use rows::Row;
pub use token::Token;
