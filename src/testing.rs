//! Test factories for long-format TextGrid sources
//!
//! Tests build their inputs through these factories instead of scattering
//! pasted fixtures, so every test exercises the same canonical rendering
//! of the format. Names and labels passed in must not contain `!`, `"`,
//! or bracketed integers, all of which the lexer's preprocessing strips.

use std::fmt::Write;

/// Render a whole document: the fixed header followed by the given
/// pre-rendered tiers.
pub fn document(xmin: f64, xmax: f64, tiers: &[String]) -> String {
    let mut out = String::new();
    writeln!(out, "File type = \"ooTextFile\"").unwrap();
    writeln!(out, "Object class = \"TextGrid\"").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "xmin = {}", xmin).unwrap();
    writeln!(out, "xmax = {}", xmax).unwrap();
    writeln!(out, "tiers? <exists>").unwrap();
    writeln!(out, "size = {}", tiers.len()).unwrap();
    writeln!(out, "item []:").unwrap();
    for (position, tier) in tiers.iter().enumerate() {
        writeln!(out, "    item [{}]:", position + 1).unwrap();
        out.push_str(tier);
    }
    out
}

/// Render one interval tier with its `(xmin, xmax, text)` annotations.
pub fn interval_tier(name: &str, xmin: f64, xmax: f64, intervals: &[(f64, f64, &str)]) -> String {
    let mut out = String::new();
    writeln!(out, "        class = \"IntervalTier\"").unwrap();
    writeln!(out, "        name = \"{}\"", name).unwrap();
    writeln!(out, "        xmin = {}", xmin).unwrap();
    writeln!(out, "        xmax = {}", xmax).unwrap();
    writeln!(out, "        intervals: size = {}", intervals.len()).unwrap();
    for (position, (start, end, text)) in intervals.iter().enumerate() {
        writeln!(out, "        intervals [{}]:", position + 1).unwrap();
        writeln!(out, "            xmin = {}", start).unwrap();
        writeln!(out, "            xmax = {}", end).unwrap();
        writeln!(out, "            text = \"{}\"", text).unwrap();
    }
    out
}

/// Render one point tier with its `(number, mark)` annotations.
pub fn point_tier(name: &str, xmin: f64, xmax: f64, points: &[(f64, &str)]) -> String {
    let mut out = String::new();
    writeln!(out, "        class = \"TextTier\"").unwrap();
    writeln!(out, "        name = \"{}\"", name).unwrap();
    writeln!(out, "        xmin = {}", xmin).unwrap();
    writeln!(out, "        xmax = {}", xmax).unwrap();
    writeln!(out, "        points: size = {}", points.len()).unwrap();
    for (position, (time, mark)) in points.iter().enumerate() {
        writeln!(out, "        points [{}]:", position + 1).unwrap();
        writeln!(out, "            number = {}", time).unwrap();
        writeln!(out, "            mark = \"{}\"", mark).unwrap();
    }
    out
}
