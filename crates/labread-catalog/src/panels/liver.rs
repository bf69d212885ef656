use crate::Panel;
use crate::reference::{ReferenceRange, TermDefinition};

pub struct LiverEnzymes;

static TESTS: &[TermDefinition] = &[
    TermDefinition {
        name: "ALT",
        label: "ALT (Alanine Aminotransferase)",
        explanation: "ALT is an enzyme found mostly in the liver.",
        unit: Some("U/L"),
        typical: Some(ReferenceRange::new(7.0, 56.0)),
    },
    TermDefinition {
        name: "AST",
        label: "AST (Aspartate Aminotransferase)",
        explanation: "AST is an enzyme found in the liver and in muscles.",
        unit: Some("U/L"),
        typical: Some(ReferenceRange::new(10.0, 40.0)),
    },
];

impl Panel for LiverEnzymes {
    fn id(&self) -> &str {
        "liver"
    }

    fn title(&self) -> &str {
        "Liver Enzymes"
    }

    fn tests(&self) -> &[TermDefinition] {
        TESTS
    }
}
