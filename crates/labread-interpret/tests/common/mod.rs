#![allow(dead_code)]

use std::sync::Arc;

use labread_catalog::reference::{CatalogEntry, RangeEntry, ReferenceRange};
use labread_catalog::Catalog;
use labread_interpret::{InterpretOptions, Interpreter};

pub fn entry(name: &str, section: &str, title: &str, template: &str) -> CatalogEntry {
    CatalogEntry {
        canonical_name: name.to_string(),
        section: section.to_string(),
        section_title: title.to_string(),
        label: format!("{name} label"),
        explanation_template: template.to_string(),
    }
}

pub fn range(name: &str, unit: Option<&str>, typical: Option<(f64, f64)>) -> RangeEntry {
    RangeEntry {
        canonical_name: name.to_string(),
        unit: unit.map(str::to_string),
        typical: typical.map(|(low, high)| ReferenceRange::new(low, high)),
    }
}

/// A small catalog independent of the built-in panels.
pub fn fixture_catalog() -> Catalog {
    Catalog::new(
        vec![
            entry("Ferritin", "iron", "Iron Studies", "Ferritin measures stored iron."),
            entry("Transferrin", "iron", "Iron Studies", "Transferrin carries iron in the blood."),
            entry("Vitamin D", "vitamins", "Vitamins", "Vitamin D helps bones."),
            entry("Magnesium", "minerals", "Minerals", "Magnesium helps muscles."),
        ],
        vec![
            range("Ferritin", Some("ng/mL"), Some((20.0, 300.0))),
            range("Transferrin", Some("mg/dL"), Some((200.0, 360.0))),
            range("Vitamin D", Some("ng/mL"), None),
            range("Zinc", Some("ug/dL"), Some((60.0, 120.0))),
        ],
    )
    .unwrap()
}

pub fn builtin_interpreter() -> Interpreter {
    Interpreter::new(Arc::new(Catalog::builtin().unwrap()), InterpretOptions::default())
}

pub fn fixture_interpreter(options: InterpretOptions) -> Interpreter {
    Interpreter::new(Arc::new(fixture_catalog()), options)
}
