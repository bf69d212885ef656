use labread_core::models::interpretation::{InterpretationResult, Section, DISCLAIMER};
use labread_core::models::item::{ResolvedItem, Status};

fn item(status: Status, value: Option<f64>) -> ResolvedItem {
    ResolvedItem {
        term: "Hemoglobin".to_string(),
        label: "Hemoglobin".to_string(),
        value,
        unit: Some("g/dL".to_string()),
        typical: value.map(|_| [12.0, 16.0]),
        status,
        explanation: "Hemoglobin carries oxygen.".to_string(),
    }
}

#[test]
fn status_uses_kebab_case() {
    assert_eq!(serde_json::to_string(&Status::InRange).unwrap(), "\"in-range\"");
    assert_eq!(serde_json::to_string(&Status::Unknown).unwrap(), "\"unknown\"");
}

#[test]
fn result_uses_camel_case_and_skips_absent_fields() {
    let result = InterpretationResult::new(
        vec![Section {
            section: "cbc".to_string(),
            section_title: "Complete Blood Count".to_string(),
            items: vec![item(Status::Unknown, None)],
        }],
        vec!["When should I recheck this report, and which tests?".to_string()],
    );

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["sections"][0]["sectionTitle"], "Complete Blood Count");
    assert_eq!(json["narrativeUsed"], false);
    assert_eq!(json["disclaimer"], DISCLAIMER);
    assert!(json.get("narrative").is_none());

    let first = &json["sections"][0]["items"][0];
    assert!(first.get("value").is_none());
    assert!(first.get("typical").is_none());
    assert_eq!(first["unit"], "g/dL");
}

#[test]
fn typical_interval_serializes_as_pair() {
    let json = serde_json::to_value(item(Status::Low, Some(10.2))).unwrap();
    assert_eq!(json["typical"], serde_json::json!([12.0, 16.0]));
    assert_eq!(json["status"], "low");
}

#[test]
fn flagged_statuses() {
    assert!(Status::Low.is_flagged());
    assert!(Status::High.is_flagged());
    assert!(!Status::InRange.is_flagged());
    assert!(!Status::Unknown.is_flagged());
}
