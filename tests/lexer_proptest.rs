//! Property-based tests for the lexer and the whole pipeline
//!
//! The round-trip properties pin down the two token conversions (quoted
//! text keeps exactly its content, bare numerals parse to their value),
//! and the pipeline properties check the row-count and numbering
//! invariants over generated tiers.

use proptest::prelude::*;
use textgrid::lexing::lex;
use textgrid::{parse, testing, Token};

proptest! {
    #[test]
    fn quoted_text_round_trips(content in "[a-zA-Z,.;:]+( [a-zA-Z,.;:]+)*") {
        let tokens = lex(&format!("\"{}\"", content)).unwrap();
        prop_assert_eq!(tokens, vec![Token::Text(content)]);
    }

    #[test]
    fn numbers_round_trip(whole in 0u32..1_000_000, frac in 0u32..1000) {
        let raw = format!("{}.{:03}", whole, frac);
        let expected: f64 = raw.parse().unwrap();
        let tokens = lex(&raw).unwrap();
        prop_assert_eq!(tokens, vec![Token::Number(expected)]);
    }

    #[test]
    fn field_labels_never_reach_the_stream(label in "[a-zA-Z?<>=]{1,12}", value in 0u32..10_000) {
        // Bare letters and punctuation outside quotes are dropped; only
        // the numeral survives.
        let tokens = lex(&format!("{} = {}", label, value)).unwrap();
        prop_assert_eq!(tokens, vec![Token::Number(value as f64)]);
    }

    #[test]
    fn interval_tier_row_count_matches_annotations(count in 0usize..20) {
        let intervals: Vec<(f64, f64, String)> = (0..count)
            .map(|i| (i as f64 * 0.1, (i + 1) as f64 * 0.1, format!("seg{}", i)))
            .collect();
        let borrowed: Vec<(f64, f64, &str)> = intervals
            .iter()
            .map(|(start, end, text)| (*start, *end, text.as_str()))
            .collect();
        let source = testing::document(
            0.0,
            2.0,
            &[testing::interval_tier("words", 0.0, 2.0, &borrowed)],
        );

        let rows = parse(&source).unwrap();

        // N annotation groups yield N rows; an empty tier yields one
        // placeholder row.
        prop_assert_eq!(rows.len(), count.max(1));

        if count == 0 {
            prop_assert_eq!(rows[0].annotation_num, None);
        } else {
            // annotation_num is contiguous from 1 with no gaps or repeats.
            for (position, row) in rows.iter().enumerate() {
                prop_assert_eq!(row.annotation_num, Some(position + 1));
                let expected = format!("seg{}", position);
                prop_assert_eq!(row.text.as_deref(), Some(expected.as_str()));
            }
        }
    }

    #[test]
    fn point_tier_row_count_matches_annotations(count in 0usize..20) {
        let points: Vec<(f64, String)> = (0..count)
            .map(|i| (i as f64 * 0.05, format!("p{}", i)))
            .collect();
        let borrowed: Vec<(f64, &str)> = points
            .iter()
            .map(|(time, mark)| (*time, mark.as_str()))
            .collect();
        let source = testing::document(
            0.0,
            1.0,
            &[testing::point_tier("events", 0.0, 1.0, &borrowed)],
        );

        let rows = parse(&source).unwrap();
        prop_assert_eq!(rows.len(), count.max(1));
        for row in &rows {
            prop_assert_eq!(row.xmax, None);
        }
    }
}
