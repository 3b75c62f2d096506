//! Flat row output
//!
//! One row per annotation, tier headers replicated across their tier's
//! rows. This is the crate's primary output contract; the structured
//! [`Document`](crate::document::Document) exists for callers that want
//! tiers instead.

use serde::Serialize;

use crate::document::TierType;

/// One annotation (or empty-tier placeholder) with its tier's header
/// fields attached.
///
/// The `Option` fields are absent (`null` in JSON output) on empty-tier
/// placeholder rows; `xmax` is additionally absent on point annotations,
/// which have a single time rather than a start and an end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// 1-based tier order of appearance.
    pub tier_num: usize,
    pub tier_name: String,
    pub tier_type: TierType,
    pub tier_xmin: f64,
    pub tier_xmax: f64,
    pub xmin: Option<f64>,
    pub xmax: Option<f64>,
    pub text: Option<String>,
    /// 1-based position of the annotation within its tier.
    pub annotation_num: Option<usize>,
}
