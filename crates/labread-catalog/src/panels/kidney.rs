use crate::Panel;
use crate::reference::{ReferenceRange, TermDefinition};

/// Kidney function markers and the main electrolytes.
pub struct KidneyElectrolytes;

static TESTS: &[TermDefinition] = &[
    TermDefinition {
        name: "Creatinine",
        label: "Creatinine",
        explanation: "Creatinine is a waste product from muscles that healthy kidneys filter out of the blood.",
        unit: Some("mg/dL"),
        typical: Some(ReferenceRange::new(0.6, 1.3)),
    },
    TermDefinition {
        name: "BUN",
        label: "Blood Urea Nitrogen (BUN)",
        explanation: "BUN measures a waste product from protein breakdown that the kidneys filter out.",
        unit: Some("mg/dL"),
        typical: Some(ReferenceRange::new(7.0, 20.0)),
    },
    TermDefinition {
        name: "Sodium",
        label: "Sodium",
        explanation: "Sodium is a mineral that regulates the balance of fluid in your body.",
        unit: Some("mmol/L"),
        typical: Some(ReferenceRange::new(135.0, 145.0)),
    },
    TermDefinition {
        name: "Potassium",
        label: "Potassium",
        explanation: "Potassium is a mineral that helps your heart and muscles work properly.",
        unit: Some("mmol/L"),
        typical: Some(ReferenceRange::new(3.5, 5.1)),
    },
    TermDefinition {
        name: "Calcium",
        label: "Calcium",
        explanation: "Calcium is a mineral that keeps bones strong and helps muscles and nerves work.",
        unit: Some("mg/dL"),
        typical: Some(ReferenceRange::new(8.5, 10.2)),
    },
];

impl Panel for KidneyElectrolytes {
    fn id(&self) -> &str {
        "kidney"
    }

    fn title(&self) -> &str {
        "Kidney & Electrolytes"
    }

    fn tests(&self) -> &[TermDefinition] {
        TESTS
    }
}
