//! Splits a generated narrative into body text and discrete questions.
//!
//! Best effort: a line starting with a digit, a hyphen, or a bullet glyph
//! opens a new list item, and everything before the first list item is the
//! narrative body. Free text that happens to start a line with a number is
//! misread as a list item. When no list item is found the whole text is the
//! narrative and the question list is empty.

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on questions taken from a narrative.
pub const MAX_NARRATIVE_QUESTIONS: usize = 5;

const BULLET_GLYPHS: &[char] = &['-', '•', '*', '·', '◦', '‣', '–', '—'];

/// An enumerator (`1.`, `2)`, `3`) or a run of bullet glyphs, plus the
/// whitespace after it.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]+[.)]?|[-•*·◦‣–—]+)\s*").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrativeSplit {
    pub narrative: String,
    pub questions: Vec<String>,
}

impl NarrativeSplit {
    pub fn is_empty(&self) -> bool {
        self.narrative.is_empty() && self.questions.is_empty()
    }
}

pub fn split_narrative(text: &str) -> NarrativeSplit {
    let mut body: Vec<&str> = Vec::new();
    let mut items: Vec<Vec<&str>> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if starts_list_item(line) {
            items.push(vec![strip_marker(line)]);
        } else if let Some(current) = items.last_mut() {
            if !line.is_empty() {
                current.push(line);
            }
        } else {
            body.push(line);
        }
    }

    if items.is_empty() {
        return NarrativeSplit {
            narrative: text.trim().to_string(),
            questions: Vec::new(),
        };
    }

    let questions = items
        .into_iter()
        .map(|parts| parts.join(" ").trim().to_string())
        .filter(|q| !q.is_empty())
        .take(MAX_NARRATIVE_QUESTIONS)
        .collect();

    NarrativeSplit {
        narrative: body.join("\n").trim().to_string(),
        questions,
    }
}

fn starts_list_item(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit() || BULLET_GLYPHS.contains(&c))
}

fn strip_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line,
    }
}
