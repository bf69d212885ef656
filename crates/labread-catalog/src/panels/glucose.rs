use crate::Panel;
use crate::reference::{ReferenceRange, TermDefinition};

/// Fasting blood sugar.
pub struct BloodSugar;

static TESTS: &[TermDefinition] = &[TermDefinition {
    name: "Glucose (Fasting)",
    label: "Fasting Glucose",
    explanation: "Fasting glucose measures the sugar in your blood after not eating for several hours.",
    unit: Some("mg/dL"),
    typical: Some(ReferenceRange::new(70.0, 99.0)),
}];

impl Panel for BloodSugar {
    fn id(&self) -> &str {
        "glucose"
    }

    fn title(&self) -> &str {
        "Blood Sugar"
    }

    fn tests(&self) -> &[TermDefinition] {
        TESTS
    }
}
