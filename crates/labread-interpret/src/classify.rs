use labread_catalog::reference::ReferenceRange;
use labread_catalog::Catalog;
use labread_core::models::item::Status;

/// Outcome of comparing one value against the range table.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub status: Status,
    /// Present only when a status other than `Unknown` was determined.
    pub typical: Option<ReferenceRange>,
    /// Unit from the range table, when it has one for this term.
    pub unit: Option<String>,
}

/// Classify `value` for a canonical term.
///
/// Without a range entry, a typical interval, or a value, the status is
/// [`Status::Unknown`] and no interval is reported.
pub fn classify(catalog: &Catalog, canonical_name: &str, value: Option<f64>) -> Classification {
    let Some(range) = catalog.range(canonical_name) else {
        return Classification {
            status: Status::Unknown,
            typical: None,
            unit: None,
        };
    };

    let unit = range.unit.clone();
    match (range.typical, value) {
        (Some(typical), Some(v)) => Classification {
            status: typical.position(v),
            typical: Some(typical),
            unit,
        },
        _ => Classification {
            status: Status::Unknown,
            typical: None,
            unit,
        },
    }
}
