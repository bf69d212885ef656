use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Position of a value relative to its typical interval.
///
/// Purely numeric; never a statement about health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Status {
    Low,
    High,
    InRange,
    /// No value was parsed or no typical interval is configured.
    Unknown,
}

impl Status {
    /// Whether the value sits outside its typical interval.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Status::Low | Status::High)
    }
}

/// One `term: value unit` line as it appeared in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParsedLine {
    /// Term text before the first colon, trimmed, case preserved.
    pub raw_term: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
}

/// A parsed line that resolved to a catalog entry (or was bucketed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResolvedItem {
    /// Canonical term name.
    pub term: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical: Option<[f64; 2]>,
    pub status: Status,
    pub explanation: String,
}
