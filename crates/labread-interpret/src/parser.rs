//! Tolerant line parser.
//!
//! Each non-blank line is matched against `<term>:<value?><unit?>`. Lines
//! that do not match are dropped without error; nothing here can fail.

use std::sync::LazyLock;

use regex::Regex;

use labread_core::models::item::ParsedLine;

/// Term up to the first colon, then an optional signed decimal, then an
/// optional unit token.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^:]+):\s*(-?[0-9]+(?:\.[0-9]+)?)?\s*([A-Za-z0-9^/%.\-]*)").unwrap()
});

/// Parse every line of `text`, keeping input order.
pub fn parse_lines(text: &str) -> Vec<ParsedLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

/// Parse a single, already trimmed line.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let caps = LINE_PATTERN.captures(line)?;

    let raw_term = caps.get(1)?.as_str().trim();
    if raw_term.is_empty() {
        return None;
    }

    // Overlong literals parse to infinity; treat them as absent.
    let value = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite());

    let unit = caps
        .get(3)
        .map(|m| m.as_str().trim())
        .filter(|u| !u.is_empty())
        .map(str::to_string);

    Some(ParsedLine {
        raw_term: raw_term.to_string(),
        value,
        unit,
    })
}
