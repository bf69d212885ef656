//! Follow-up questions a reader could bring to a clinician.
//!
//! Every question is phrased as a request for discussion; none asserts a
//! medical conclusion.

use labread_core::models::interpretation::Section;

pub const GENERIC_QUESTIONS: [&str; 4] = [
    "Which of these values should I pay attention to and why?",
    "Could any medication, diet, or hydration changes affect these numbers?",
    "Are there lifestyle or routine changes related to these results?",
    "When should I recheck this report, and which tests?",
];

pub fn follow_up_question(label: &str) -> String {
    format!("Could we discuss my {label} result and whether a follow-up test is useful?")
}

/// Build the question list, at most `cap` entries long.
///
/// The first low or high item (in section order) gets a question of its
/// own ahead of the generic set.
pub fn generate(sections: &[Section], cap: usize) -> Vec<String> {
    let flagged = sections
        .iter()
        .flat_map(|s| &s.items)
        .find(|item| item.status.is_flagged());

    flagged
        .map(|item| follow_up_question(&item.label))
        .into_iter()
        .chain(GENERIC_QUESTIONS.iter().map(|q| q.to_string()))
        .take(cap)
        .collect()
}
