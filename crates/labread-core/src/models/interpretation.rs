use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::item::ResolvedItem;

/// Fixed, non-diagnostic boilerplate attached to every result.
pub const DISCLAIMER: &str = "This tool simplifies report language for understanding only. \
It does not diagnose conditions. Please consult your doctor for medical advice.";

/// A clinical section and the items that fell into it, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Section {
    pub section: String,
    pub section_title: String,
    pub items: Vec<ResolvedItem>,
}

/// The structured interpretation of one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InterpretationResult {
    pub sections: Vec<Section>,
    pub questions: Vec<String>,
    pub disclaimer: String,
    /// True when an external narrative was received and applied.
    pub narrative_used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl InterpretationResult {
    pub fn new(sections: Vec<Section>, questions: Vec<String>) -> Self {
        Self {
            sections,
            questions,
            disclaimer: DISCLAIMER.to_string(),
            narrative_used: false,
            narrative: None,
        }
    }

    /// All items across sections, in section order.
    pub fn items(&self) -> impl Iterator<Item = &ResolvedItem> {
        self.sections.iter().flat_map(|s| &s.items)
    }
}
