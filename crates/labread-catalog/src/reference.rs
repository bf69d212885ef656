use serde::{Deserialize, Serialize};
use ts_rs::TS;

use labread_core::models::item::Status;

/// A typical reference interval, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
}

impl ReferenceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low <= self.high
    }

    /// Where `value` falls. Bounds compare exactly, with no tolerance.
    pub fn position(&self, value: f64) -> Status {
        if value < self.low {
            Status::Low
        } else if value > self.high {
            Status::High
        } else {
            Status::InRange
        }
    }

    pub fn as_pair(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

/// Catalog entry for one canonical test name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogEntry {
    pub canonical_name: String,
    pub section: String,
    pub section_title: String,
    pub label: String,
    /// Plain-language sentence describing what the test measures.
    pub explanation_template: String,
}

/// Unit and typical interval for one canonical test name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RangeEntry {
    pub canonical_name: String,
    pub unit: Option<String>,
    pub typical: Option<ReferenceRange>,
}

/// A test as declared inside a panel module.
#[derive(Debug, Clone)]
pub struct TermDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub explanation: &'static str,
    pub unit: Option<&'static str>,
    pub typical: Option<ReferenceRange>,
}
