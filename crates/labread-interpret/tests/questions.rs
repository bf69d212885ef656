use labread_core::models::interpretation::Section;
use labread_core::models::item::{ResolvedItem, Status};
use labread_interpret::questions::{follow_up_question, generate, GENERIC_QUESTIONS};

fn section(id: &str, items: &[(&str, Status)]) -> Section {
    Section {
        section: id.to_string(),
        section_title: id.to_string(),
        items: items
            .iter()
            .map(|(label, status)| ResolvedItem {
                term: label.to_string(),
                label: label.to_string(),
                value: Some(1.0),
                unit: None,
                typical: None,
                status: *status,
                explanation: String::new(),
            })
            .collect(),
    }
}

#[test]
fn no_flags_gives_generic_set_only() {
    let sections = [section("cbc", &[("WBC", Status::InRange), ("Platelets", Status::Unknown)])];
    assert_eq!(generate(&sections, 5), GENERIC_QUESTIONS.to_vec());
}

#[test]
fn first_flagged_item_leads() {
    let sections = [
        section("cbc", &[("WBC", Status::InRange), ("Hemoglobin", Status::Low)]),
        section("lipids", &[("LDL", Status::High)]),
    ];
    let questions = generate(&sections, 5);

    assert_eq!(questions.len(), 5);
    assert_eq!(
        questions[0],
        "Could we discuss my Hemoglobin result and whether a follow-up test is useful?"
    );
    assert_eq!(&questions[1..], &GENERIC_QUESTIONS[..]);
}

#[test]
fn only_one_item_specific_question() {
    let sections = [section("x", &[("A", Status::High), ("B", Status::Low), ("C", Status::High)])];
    let questions = generate(&sections, 10);
    let specific = questions.iter().filter(|q| q.starts_with("Could we discuss")).count();
    assert_eq!(specific, 1);
}

#[test]
fn cap_is_respected() {
    let sections = [section("x", &[("A", Status::High)])];
    assert_eq!(generate(&sections, 2).len(), 2);
    assert!(generate(&sections, 0).is_empty());
    assert_eq!(generate(&[], 3).len(), 3);
}

#[test]
fn questions_are_not_diagnostic() {
    let q = follow_up_question("TSH (Thyroid Stimulating Hormone)");
    assert!(q.ends_with('?'));
    for text in GENERIC_QUESTIONS.iter().copied().chain([q.as_str()]) {
        assert!(!text.to_lowercase().contains("you have"), "{text}");
        assert!(!text.to_lowercase().contains("diagnos"), "{text}");
    }
}
