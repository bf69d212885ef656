//! JSON table format.
//!
//! Terms are an object keyed by canonical name:
//!
//! ```json
//! { "Hemoglobin": { "section": "cbc", "sectionTitle": "Complete Blood Count",
//!                   "label": "Hemoglobin", "simple": "Hemoglobin carries oxygen." } }
//! ```
//!
//! Ranges are keyed the same way, with an optional unit and `[low, high]`:
//!
//! ```json
//! { "Hemoglobin": { "unit": "g/dL", "typical": [12.0, 16.0] } }
//! ```
//!
//! Key order in the file is preserved as catalog order.

use serde::Deserialize;

use crate::error::CatalogError;
use crate::reference::{CatalogEntry, RangeEntry, ReferenceRange};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TermRecord {
    section: String,
    section_title: String,
    label: String,
    simple: String,
}

#[derive(Debug, Deserialize)]
struct RangeRecord {
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    typical: Option<[f64; 2]>,
}

pub fn parse_terms(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let records: Vec<(String, TermRecord)> = parse_keyed(json)?;
    Ok(records
        .into_iter()
        .map(|(name, r)| CatalogEntry {
            canonical_name: name,
            section: r.section,
            section_title: r.section_title,
            label: r.label,
            explanation_template: r.simple,
        })
        .collect())
}

pub fn parse_ranges(json: &str) -> Result<Vec<RangeEntry>, CatalogError> {
    let records: Vec<(String, RangeRecord)> = parse_keyed(json)?;
    Ok(records
        .into_iter()
        .map(|(name, r)| RangeEntry {
            canonical_name: name,
            unit: r.unit,
            typical: r.typical.map(|[low, high]| ReferenceRange::new(low, high)),
        })
        .collect())
}

/// Parse a JSON object into (key, value) pairs in document order.
///
/// Duplicate keys are kept so that [`crate::Catalog::new`] can reject them
/// rather than letting the last one silently win.
fn parse_keyed<T: serde::de::DeserializeOwned>(
    json: &str,
) -> Result<Vec<(String, T)>, CatalogError> {
    struct Keyed<T>(Vec<(String, T)>);

    impl<'de, T: serde::de::DeserializeOwned> Deserialize<'de> for Keyed<T> {
        fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            struct Visitor<T>(std::marker::PhantomData<T>);

            impl<'de, T: serde::de::DeserializeOwned> serde::de::Visitor<'de> for Visitor<T> {
                type Value = Keyed<T>;

                fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    f.write_str("an object keyed by canonical term name")
                }

                fn visit_map<A: serde::de::MapAccess<'de>>(
                    self,
                    mut map: A,
                ) -> Result<Self::Value, A::Error> {
                    let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                    while let Some((k, v)) = map.next_entry::<String, T>()? {
                        out.push((k, v));
                    }
                    Ok(Keyed(out))
                }
            }

            d.deserialize_map(Visitor(std::marker::PhantomData))
        }
    }

    let keyed: Keyed<T> = serde_json::from_str(json)?;
    Ok(keyed.0)
}
