use crate::Panel;
use crate::reference::{ReferenceRange, TermDefinition};

/// Complete blood count: oxygen carrying, immune cells, and clotting.
pub struct CompleteBloodCount;

static TESTS: &[TermDefinition] = &[
    TermDefinition {
        name: "Hemoglobin",
        label: "Hemoglobin",
        explanation: "Hemoglobin is the protein in red blood cells that carries oxygen around your body.",
        unit: Some("g/dL"),
        typical: Some(ReferenceRange::new(12.0, 16.0)),
    },
    TermDefinition {
        name: "WBC",
        label: "White Blood Cells (WBC)",
        explanation: "White blood cells are part of the immune system and help your body fight infections.",
        unit: Some("10^9/L"),
        typical: Some(ReferenceRange::new(4.0, 11.0)),
    },
    TermDefinition {
        name: "Platelets",
        label: "Platelets",
        explanation: "Platelets are tiny cell fragments that help blood to clot.",
        unit: Some("10^9/L"),
        typical: Some(ReferenceRange::new(150.0, 450.0)),
    },
];

impl Panel for CompleteBloodCount {
    fn id(&self) -> &str {
        "cbc"
    }

    fn title(&self) -> &str {
        "Complete Blood Count"
    }

    fn tests(&self) -> &[TermDefinition] {
        TESTS
    }
}
