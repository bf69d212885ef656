use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use labread_catalog::Catalog;
use labread_catalog::reference::CatalogEntry;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTerm {
    name: String,
    section: String,
    section_title: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    typical: Option<[f64; 2]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTermDetail {
    #[serde(flatten)]
    term: CatalogTerm,
    explanation: String,
}

fn summarize(catalog: &Catalog, entry: &CatalogEntry) -> CatalogTerm {
    let range = catalog.range(&entry.canonical_name);
    CatalogTerm {
        name: entry.canonical_name.clone(),
        section: entry.section.clone(),
        section_title: entry.section_title.clone(),
        label: entry.label.clone(),
        unit: range.and_then(|r| r.unit.clone()),
        typical: range.and_then(|r| r.typical).map(|t| t.as_pair()),
    }
}

pub async fn list_catalog(State(state): State<AppState>) -> Json<Vec<CatalogTerm>> {
    let catalog = state.interpreter.catalog();
    Json(
        catalog
            .entries()
            .iter()
            .map(|entry| summarize(catalog, entry))
            .collect(),
    )
}

/// Look up one term, case-insensitively, as the interpreter would.
pub async fn get_catalog_term(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<CatalogTermDetail>, ApiError> {
    let catalog = state.interpreter.catalog();
    let entry = catalog
        .resolve(&term)
        .ok_or_else(|| ApiError::NotFound(format!("term not found: {term}")))?;

    Ok(Json(CatalogTermDetail {
        term: summarize(catalog, entry),
        explanation: entry.explanation_template.clone(),
    }))
}
