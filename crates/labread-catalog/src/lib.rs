//! labread-catalog
//!
//! The term catalog and reference ranges consulted by the interpreter.
//! Pure data plus a validated, case-insensitive lookup structure. Panels
//! declare the built-in tests; JSON tables can replace them at startup.

pub mod error;
pub mod panels;
pub mod reference;
pub mod tables;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use error::CatalogError;
use reference::{CatalogEntry, RangeEntry, TermDefinition};

/// A group of related tests that share a report section.
pub trait Panel: Send + Sync {
    /// Section identifier (e.g., "cbc", "lipids").
    fn id(&self) -> &str;

    /// Section heading shown to readers (e.g., "Complete Blood Count").
    fn title(&self) -> &str;

    /// The tests this panel declares.
    fn tests(&self) -> &[TermDefinition];

    fn catalog_entries(&self) -> Vec<CatalogEntry> {
        self.tests()
            .iter()
            .map(|t| CatalogEntry {
                canonical_name: t.name.to_string(),
                section: self.id().to_string(),
                section_title: self.title().to_string(),
                label: t.label.to_string(),
                explanation_template: t.explanation.to_string(),
            })
            .collect()
    }

    fn range_entries(&self) -> Vec<RangeEntry> {
        self.tests()
            .iter()
            .filter(|t| t.unit.is_some() || t.typical.is_some())
            .map(|t| RangeEntry {
                canonical_name: t.name.to_string(),
                unit: t.unit.map(str::to_string),
                typical: t.typical,
            })
            .collect()
    }
}

/// Return all built-in panels, in catalog order.
pub fn all_panels() -> Vec<Box<dyn Panel>> {
    vec![
        Box::new(panels::cbc::CompleteBloodCount),
        Box::new(panels::glucose::BloodSugar),
        Box::new(panels::lipids::Lipids),
        Box::new(panels::liver::LiverEnzymes),
        Box::new(panels::thyroid::Thyroid),
        Box::new(panels::kidney::KidneyElectrolytes),
    ]
}

/// Read-only term catalog and reference ranges.
///
/// Built once at startup and shared (typically behind an `Arc`) by every
/// request. Nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    ranges: HashMap<String, RangeEntry>,
    /// Lowercased canonical name → index into `entries`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate names and malformed
    /// intervals.
    ///
    /// Ranges are keyed by canonical name but need not have a matching
    /// entry.
    pub fn new(entries: Vec<CatalogEntry>, ranges: Vec<RangeEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.canonical_name.trim().is_empty() {
                return Err(CatalogError::BlankTerm);
            }
            let key = entry.canonical_name.to_lowercase();
            if index.insert(key, i).is_some() {
                return Err(CatalogError::DuplicateTerm(entry.canonical_name.clone()));
            }
        }

        let mut range_map = HashMap::with_capacity(ranges.len());
        let mut range_keys = HashSet::with_capacity(ranges.len());
        for range in ranges {
            if range.canonical_name.trim().is_empty() {
                return Err(CatalogError::BlankTerm);
            }
            if let Some(typical) = range.typical
                && !typical.is_valid()
            {
                return Err(CatalogError::InvalidRange {
                    term: range.canonical_name,
                    low: typical.low,
                    high: typical.high,
                });
            }
            // Lookups are exact, so names differing only in case would shadow each other.
            if !range_keys.insert(range.canonical_name.to_lowercase()) {
                return Err(CatalogError::DuplicateRange(range.canonical_name));
            }
            range_map.insert(range.canonical_name.clone(), range);
        }

        tracing::debug!(
            terms = entries.len(),
            ranges = range_map.len(),
            "catalog built"
        );

        Ok(Self {
            entries,
            ranges: range_map,
            index,
        })
    }

    /// The catalog assembled from [`all_panels`].
    pub fn builtin() -> Result<Self, CatalogError> {
        let panels = all_panels();
        let entries = panels.iter().flat_map(|p| p.catalog_entries()).collect();
        let ranges = panels.iter().flat_map(|p| p.range_entries()).collect();
        Self::new(entries, ranges)
    }

    /// Build from the JSON term and range tables. See [`tables`].
    pub fn from_json(terms_json: &str, ranges_json: &str) -> Result<Self, CatalogError> {
        let entries = tables::parse_terms(terms_json)?;
        let ranges = tables::parse_ranges(ranges_json)?;
        Self::new(entries, ranges)
    }

    /// Read both JSON tables from disk.
    pub fn load(terms_path: &Path, ranges_path: &Path) -> Result<Self, CatalogError> {
        let terms = read_table(terms_path)?;
        let ranges = read_table(ranges_path)?;
        let catalog = Self::from_json(&terms, &ranges)?;
        tracing::info!(
            terms_path = %terms_path.display(),
            ranges_path = %ranges_path.display(),
            terms = catalog.len(),
            "loaded catalog tables"
        );
        Ok(catalog)
    }

    /// Exact, case-insensitive lookup of a raw term name.
    pub fn resolve(&self, raw_term: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&raw_term.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Range data for a canonical name (exact match).
    pub fn range(&self, canonical_name: &str) -> Option<&RangeEntry> {
        self.ranges.get(canonical_name)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_table(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
