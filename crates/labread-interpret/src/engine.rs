use std::sync::Arc;

use tracing::{debug, info};

use labread_catalog::Catalog;
use labread_core::models::interpretation::InterpretationResult;
use labread_core::models::item::{ParsedLine, ResolvedItem};
use labread_core::models::level::Level;

use crate::aggregate::{self, Placement};
use crate::classify::classify;
use crate::explain;
use crate::narrative::split_narrative;
use crate::options::{InterpretOptions, UnmatchedPolicy};
use crate::parser;
use crate::questions;

/// Section id used for unmatched terms under [`UnmatchedPolicy::BucketAsOther`].
pub const OTHER_SECTION: &str = "Other";
pub const OTHER_SECTION_TITLE: &str = "Other Findings";

/// Runs the parse → resolve → classify → explain → group → ask pipeline.
///
/// Cheap to clone; the catalog is shared.
#[derive(Debug, Clone)]
pub struct Interpreter {
    catalog: Arc<Catalog>,
    options: InterpretOptions,
}

impl Interpreter {
    pub fn new(catalog: Arc<Catalog>, options: InterpretOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &InterpretOptions {
        &self.options
    }

    /// Interpret report text. Never fails: at worst every line is dropped
    /// and only the generic questions come back.
    pub fn interpret(&self, text: &str, level: Level) -> InterpretationResult {
        let parsed = parser::parse_lines(text);
        let line_count = parsed.len();

        let placements: Vec<Placement> = parsed
            .into_iter()
            .filter_map(|line| self.place(line, level))
            .collect();
        let resolved = placements.len();

        let sections = aggregate::group(placements);
        let questions = questions::generate(&sections, self.options.max_questions);

        info!(
            lines = line_count,
            resolved,
            dropped = line_count - resolved,
            sections = sections.len(),
            level = %level,
            "report interpreted"
        );

        InterpretationResult::new(sections, questions)
    }

    /// Fold an externally generated narrative into `result`.
    ///
    /// Returns whether the narrative was used. Blank text leaves `result`
    /// untouched. Questions parsed from the narrative replace the
    /// generated ones only when there is at least one.
    pub fn attach_narrative(&self, result: &mut InterpretationResult, raw: &str) -> bool {
        let split = split_narrative(raw);
        if split.is_empty() {
            debug!("narrative was blank, keeping generated questions");
            return false;
        }

        if !split.questions.is_empty() {
            result.questions = split
                .questions
                .into_iter()
                .take(self.options.max_questions)
                .collect();
        }
        result.narrative = Some(split.narrative).filter(|n| !n.is_empty());
        result.narrative_used = true;
        true
    }

    fn place(&self, line: ParsedLine, level: Level) -> Option<Placement> {
        match self.catalog.resolve(&line.raw_term) {
            Some(entry) => {
                let c = classify(&self.catalog, &entry.canonical_name, line.value);
                Some(Placement {
                    section: entry.section.clone(),
                    section_title: entry.section_title.clone(),
                    item: ResolvedItem {
                        term: entry.canonical_name.clone(),
                        label: entry.label.clone(),
                        value: line.value,
                        unit: c.unit.or(line.unit),
                        typical: c.typical.map(|r| r.as_pair()),
                        status: c.status,
                        explanation: explain::compose(Some(entry), c.status, level),
                    },
                })
            }
            None => match self.options.on_unmatched {
                UnmatchedPolicy::Drop => {
                    debug!(term = %line.raw_term, "dropping unmatched term");
                    None
                }
                UnmatchedPolicy::BucketAsOther => {
                    let c = classify(&self.catalog, &line.raw_term, line.value);
                    Some(Placement {
                        section: OTHER_SECTION.to_string(),
                        section_title: OTHER_SECTION_TITLE.to_string(),
                        item: ResolvedItem {
                            label: line.raw_term.clone(),
                            term: line.raw_term,
                            value: line.value,
                            unit: c.unit.or(line.unit),
                            typical: c.typical.map(|r| r.as_pair()),
                            status: c.status,
                            explanation: explain::compose(None, c.status, level),
                        },
                    })
                }
            },
        }
    }
}
