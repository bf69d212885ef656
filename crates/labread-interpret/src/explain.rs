//! Explanation composer.
//!
//! Each reading level is a [`Register`]: an ordered substitution table
//! applied to the catalog's template, plus the clause appended for each
//! status. Adding a register means adding data here, not branches.

use labread_catalog::reference::CatalogEntry;
use labread_core::models::item::Status;
use labread_core::models::level::Level;

/// Used when an item has no catalog entry.
pub const FALLBACK_EXPLANATION: &str = "This item is noted in the report.";

/// Sentence appended to the template for each status.
#[derive(Debug, Clone, Copy)]
pub struct StatusClauses {
    pub low: &'static str,
    pub high: &'static str,
    pub in_range: &'static str,
    pub unknown: Option<&'static str>,
}

impl StatusClauses {
    pub fn for_status(&self, status: Status) -> Option<&'static str> {
        match status {
            Status::Low => Some(self.low),
            Status::High => Some(self.high),
            Status::InRange => Some(self.in_range),
            Status::Unknown => self.unknown,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Register {
    pub level: Level,
    /// (find, replace) pairs, earlier pairs taking precedence.
    pub substitutions: &'static [(&'static str, &'static str)],
    pub clauses: StatusClauses,
}

pub static STANDARD: Register = Register {
    level: Level::Standard,
    substitutions: &[],
    clauses: StatusClauses {
        low: "Your result is below the typical range.",
        high: "Your result is above the typical range.",
        in_range: "Your result is within the typical range.",
        unknown: None,
    },
};

pub static CHILD: Register = Register {
    level: Level::Child,
    substitutions: &[
        ("carries", "moves"),
        ("infections", "germs"),
        ("blood to clot", "stop bleeding"),
        ("measures", "checks"),
        ("regulates", "controls"),
        ("an enzyme", "a helper protein"),
        ("immune system", "body's defense team"),
        ("metabolism", "energy use"),
        ("a hormone", "a body messenger"),
        ("filter", "clean"),
        ("properly", "well"),
    ],
    clauses: StatusClauses {
        low: "This number is a bit lower than usual.",
        high: "This number is a bit higher than usual.",
        in_range: "This number is in the usual zone.",
        unknown: None,
    },
};

pub fn register(level: Level) -> &'static Register {
    match level {
        Level::Standard => &STANDARD,
        Level::Child => &CHILD,
    }
}

/// Render the explanation for one item.
pub fn compose(entry: Option<&CatalogEntry>, status: Status, level: Level) -> String {
    let Some(entry) = entry else {
        return FALLBACK_EXPLANATION.to_string();
    };

    let register = register(level);
    let base = substitute(&entry.explanation_template, register.substitutions);

    match register.clauses.for_status(status) {
        Some(clause) => format!("{base} {clause}"),
        None => base,
    }
}

/// Apply `table` in a single left-to-right pass.
///
/// Each pair fires at most once, on its first match. At each position the
/// first pair that has not yet fired wins; replacement text is never
/// rescanned, so pairs cannot chain into one another.
pub fn substitute(text: &str, table: &[(&str, &str)]) -> String {
    if table.is_empty() {
        return text.to_string();
    }

    let mut fired = vec![false; table.len()];
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(ch) = rest.chars().next() {
        for (i, (find, replace)) in table.iter().enumerate() {
            if !fired[i] && !find.is_empty() && rest.starts_with(find) {
                fired[i] = true;
                out.push_str(replace);
                rest = &rest[find.len()..];
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
