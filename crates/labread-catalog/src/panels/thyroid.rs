use crate::Panel;
use crate::reference::{ReferenceRange, TermDefinition};

pub struct Thyroid;

static TESTS: &[TermDefinition] = &[TermDefinition {
    name: "TSH",
    label: "TSH (Thyroid Stimulating Hormone)",
    explanation: "TSH is a hormone that tells the thyroid gland how hard to work, which regulates your metabolism.",
    unit: Some("mIU/L"),
    typical: Some(ReferenceRange::new(0.4, 4.5)),
}];

impl Panel for Thyroid {
    fn id(&self) -> &str {
        "thyroid"
    }

    fn title(&self) -> &str {
        "Thyroid"
    }

    fn tests(&self) -> &[TermDefinition] {
        TESTS
    }
}
