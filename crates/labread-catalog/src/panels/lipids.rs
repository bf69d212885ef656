use crate::Panel;
use crate::reference::{ReferenceRange, TermDefinition};

/// Lipid panel. LDL and triglycerides have no meaningful lower bound, so
/// their intervals start at zero.
pub struct Lipids;

static TESTS: &[TermDefinition] = &[
    TermDefinition {
        name: "Total Cholesterol",
        label: "Total Cholesterol",
        explanation: "Total cholesterol measures all the cholesterol carried in your blood.",
        unit: Some("mg/dL"),
        typical: Some(ReferenceRange::new(125.0, 200.0)),
    },
    TermDefinition {
        name: "LDL",
        label: "LDL Cholesterol",
        explanation: "LDL cholesterol is the type that can build up in the walls of blood vessels.",
        unit: Some("mg/dL"),
        typical: Some(ReferenceRange::new(0.0, 100.0)),
    },
    TermDefinition {
        name: "HDL",
        label: "HDL Cholesterol",
        explanation: "HDL cholesterol carries extra cholesterol away to the liver.",
        unit: Some("mg/dL"),
        typical: Some(ReferenceRange::new(40.0, 60.0)),
    },
    TermDefinition {
        name: "Triglycerides",
        label: "Triglycerides",
        explanation: "Triglycerides are a type of fat in the blood that stores energy from food.",
        unit: Some("mg/dL"),
        typical: Some(ReferenceRange::new(0.0, 150.0)),
    },
];

impl Panel for Lipids {
    fn id(&self) -> &str {
        "lipids"
    }

    fn title(&self) -> &str {
        "Cholesterol & Fats"
    }

    fn tests(&self) -> &[TermDefinition] {
        TESTS
    }
}
