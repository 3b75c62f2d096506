//! Data model for a parsed TextGrid document
//!
//! All entities here are immutable: they are built once per parse call by
//! the assembler and either inspected as-is or flattened into rows.

use serde::Serialize;

use crate::rows::Row;
use crate::structure::{INTERVAL_STRIDE, POINT_STRIDE};

/// The two tier kinds of the long TextGrid format.
///
/// Serialized (and displayed in rows) using the file's own literal class
/// labels, `IntervalTier` and `TextTier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TierType {
    #[serde(rename = "IntervalTier")]
    Interval,
    #[serde(rename = "TextTier")]
    Point,
}

impl TierType {
    /// Map a tier class token to its type; `None` for unknown classes.
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "IntervalTier" => Some(TierType::Interval),
            "TextTier" => Some(TierType::Point),
            _ => None,
        }
    }

    /// The literal class label as written in the file.
    pub fn label(&self) -> &'static str {
        match self {
            TierType::Interval => "IntervalTier",
            TierType::Point => "TextTier",
        }
    }

    /// Tokens consumed by one annotation of this tier type.
    pub fn stride(&self) -> usize {
        match self {
            TierType::Interval => INTERVAL_STRIDE,
            TierType::Point => POINT_STRIDE,
        }
    }
}

/// The four fixed-offset header fields at the start of a tier's slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierHeader {
    pub tier_type: TierType,
    pub name: String,
    pub xmin: f64,
    pub xmax: f64,
}

/// One labeled interval or point within a tier. `index` is 1-based, in
/// order of appearance inside the tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Annotation {
    Interval {
        xmin: f64,
        xmax: f64,
        text: String,
        index: usize,
    },
    Point {
        xmin: f64,
        text: String,
        index: usize,
    },
}

/// A named timeline within a document: header plus ordered annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tier {
    pub header: TierHeader,
    pub annotations: Vec<Annotation>,
}

/// An ordered sequence of tiers, as they appear in the file. A tier's
/// 1-based position in this sequence is its tier number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub tiers: Vec<Tier>,
}

impl Document {
    /// Flatten the document into one row per annotation, tiers in order.
    ///
    /// The tier header is replicated onto every row of its tier. A tier
    /// with no annotations contributes exactly one placeholder row with
    /// the header fields populated and the annotation fields absent.
    pub fn into_rows(self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (position, tier) in self.tiers.into_iter().enumerate() {
            let tier_num = position + 1;
            let header = tier.header;

            if tier.annotations.is_empty() {
                rows.push(Row {
                    tier_num,
                    tier_name: header.name,
                    tier_type: header.tier_type,
                    tier_xmin: header.xmin,
                    tier_xmax: header.xmax,
                    xmin: None,
                    xmax: None,
                    text: None,
                    annotation_num: None,
                });
                continue;
            }

            for annotation in tier.annotations {
                let (xmin, xmax, text, index) = match annotation {
                    Annotation::Interval {
                        xmin,
                        xmax,
                        text,
                        index,
                    } => (xmin, Some(xmax), text, index),
                    Annotation::Point { xmin, text, index } => (xmin, None, text, index),
                };
                rows.push(Row {
                    tier_num,
                    tier_name: header.name.clone(),
                    tier_type: header.tier_type,
                    tier_xmin: header.xmin,
                    tier_xmax: header.xmax,
                    xmin: Some(xmin),
                    xmax,
                    text: Some(text),
                    annotation_num: Some(index),
                });
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_header() -> TierHeader {
        TierHeader {
            tier_type: TierType::Interval,
            name: "words".to_string(),
            xmin: 0.0,
            xmax: 1.0,
        }
    }

    #[test]
    fn test_tier_type_from_class() {
        assert_eq!(TierType::from_class("IntervalTier"), Some(TierType::Interval));
        assert_eq!(TierType::from_class("TextTier"), Some(TierType::Point));
        assert_eq!(TierType::from_class("PitchTier"), None);
    }

    #[test]
    fn test_tier_type_strides() {
        assert_eq!(TierType::Interval.stride(), 3);
        assert_eq!(TierType::Point.stride(), 2);
    }

    #[test]
    fn test_into_rows_replicates_header() {
        let document = Document {
            tiers: vec![Tier {
                header: words_header(),
                annotations: vec![
                    Annotation::Interval {
                        xmin: 0.0,
                        xmax: 0.5,
                        text: "cat".to_string(),
                        index: 1,
                    },
                    Annotation::Interval {
                        xmin: 0.5,
                        xmax: 1.0,
                        text: "dog".to_string(),
                        index: 2,
                    },
                ],
            }],
        };

        let rows = document.into_rows();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.tier_num, 1);
            assert_eq!(row.tier_name, "words");
            assert_eq!(row.tier_type, TierType::Interval);
            assert_eq!(row.tier_xmin, 0.0);
            assert_eq!(row.tier_xmax, 1.0);
        }
        assert_eq!(rows[0].annotation_num, Some(1));
        assert_eq!(rows[1].annotation_num, Some(2));
    }

    #[test]
    fn test_into_rows_empty_tier_placeholder() {
        let document = Document {
            tiers: vec![Tier {
                header: words_header(),
                annotations: vec![],
            }],
        };

        let rows = document.into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tier_name, "words");
        assert_eq!(rows[0].xmin, None);
        assert_eq!(rows[0].xmax, None);
        assert_eq!(rows[0].text, None);
        assert_eq!(rows[0].annotation_num, None);
    }
}
