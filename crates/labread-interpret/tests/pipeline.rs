mod common;

use labread_core::models::interpretation::DISCLAIMER;
use labread_core::models::item::Status;
use labread_core::models::level::Level;
use labread_interpret::engine::{OTHER_SECTION, OTHER_SECTION_TITLE};
use labread_interpret::explain::FALLBACK_EXPLANATION;
use labread_interpret::questions::GENERIC_QUESTIONS;
use labread_interpret::{InterpretOptions, UnmatchedPolicy};

#[test]
fn hemoglobin_low_wbc_in_range() {
    let interpreter = common::builtin_interpreter();
    let result = interpreter.interpret("Hemoglobin: 10.2 g/dL\nWBC: 6.1 10^9/L", Level::Standard);

    assert_eq!(result.sections.len(), 1);
    let cbc = &result.sections[0];
    assert_eq!(cbc.section, "cbc");
    assert_eq!(cbc.section_title, "Complete Blood Count");

    let hemoglobin = &cbc.items[0];
    assert_eq!(hemoglobin.term, "Hemoglobin");
    assert_eq!(hemoglobin.value, Some(10.2));
    assert_eq!(hemoglobin.unit.as_deref(), Some("g/dL"));
    assert_eq!(hemoglobin.typical, Some([12.0, 16.0]));
    assert_eq!(hemoglobin.status, Status::Low);

    let wbc = &cbc.items[1];
    assert_eq!(wbc.term, "WBC");
    assert_eq!(wbc.label, "White Blood Cells (WBC)");
    assert_eq!(wbc.typical, Some([4.0, 11.0]));
    assert_eq!(wbc.status, Status::InRange);

    assert_eq!(
        result.questions[0],
        "Could we discuss my Hemoglobin result and whether a follow-up test is useful?"
    );
    assert_eq!(&result.questions[1..], &GENERIC_QUESTIONS[..]);
    assert_eq!(result.disclaimer, DISCLAIMER);
    assert!(!result.narrative_used);
    assert!(result.narrative.is_none());
}

#[test]
fn terms_match_case_insensitively_and_report_canonical_name() {
    let interpreter = common::builtin_interpreter();
    let result = interpreter.interpret("glucose (FASTING): 120 mg/dL", Level::Standard);

    let item = &result.sections[0].items[0];
    assert_eq!(item.term, "Glucose (Fasting)");
    assert_eq!(item.label, "Fasting Glucose");
    assert_eq!(item.status, Status::High);
}

#[test]
fn range_unit_takes_precedence_over_parsed_unit() {
    let interpreter = common::builtin_interpreter();
    let result = interpreter.interpret("Sodium: 140 mEq/L", Level::Standard);
    assert_eq!(result.sections[0].items[0].unit.as_deref(), Some("mmol/L"));
}

#[test]
fn parsed_unit_is_kept_when_range_has_none() {
    let interpreter = common::fixture_interpreter(InterpretOptions::default());
    let result = interpreter.interpret("Magnesium: 2.0 mg/dL", Level::Standard);
    let item = &result.sections[0].items[0];
    assert_eq!(item.unit.as_deref(), Some("mg/dL"));
    assert_eq!(item.status, Status::Unknown);
    assert!(item.typical.is_none());
}

#[test]
fn sections_appear_in_first_seen_order() {
    let interpreter = common::builtin_interpreter();
    let text = "TSH: 2.0\nLDL: 90\nHemoglobin: 13\nHDL: 50\nALT: 30\nPlatelets: 200";
    let result = interpreter.interpret(text, Level::Standard);

    let ids: Vec<_> = result.sections.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(ids, ["thyroid", "lipids", "cbc", "liver"]);

    let lipids: Vec<_> = result.sections[1].items.iter().map(|i| i.term.as_str()).collect();
    assert_eq!(lipids, ["LDL", "HDL"]);
}

#[test]
fn unmatched_terms_are_dropped_by_default() {
    let interpreter = common::builtin_interpreter();
    let result = interpreter.interpret("Unobtainium: 4 mg\nWBC: 5", Level::Standard);

    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].items.len(), 1);
    assert!(result.sections.iter().all(|s| s.section != OTHER_SECTION));
}

#[test]
fn unmatched_terms_can_be_bucketed() {
    let interpreter = common::fixture_interpreter(InterpretOptions {
        on_unmatched: UnmatchedPolicy::BucketAsOther,
        ..InterpretOptions::default()
    });
    let result = interpreter.interpret(
        "Unobtainium: 4 mg\nFerritin: 10 ng/mL\nZinc: 50",
        Level::Child,
    );

    let ids: Vec<_> = result.sections.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(ids, [OTHER_SECTION, "iron"]);

    let other = &result.sections[0];
    assert_eq!(other.section, "Other");
    assert_eq!(other.section_title, OTHER_SECTION_TITLE);
    assert_eq!(other.section_title, "Other Findings");

    let unobtainium = &other.items[0];
    assert_eq!(unobtainium.term, "Unobtainium");
    assert_eq!(unobtainium.label, "Unobtainium");
    assert_eq!(unobtainium.unit.as_deref(), Some("mg"));
    assert_eq!(unobtainium.status, Status::Unknown);
    assert_eq!(unobtainium.explanation, FALLBACK_EXPLANATION);

    // A range entry without a catalog entry still classifies the value.
    let zinc = &other.items[1];
    assert_eq!(zinc.status, Status::Low);
    assert_eq!(zinc.typical, Some([60.0, 120.0]));

    // The first flagged item in section order leads the questions.
    assert_eq!(
        result.questions[0],
        "Could we discuss my Zinc result and whether a follow-up test is useful?"
    );
}

#[test]
fn garbage_input_yields_generic_questions_only() {
    let interpreter = common::builtin_interpreter();
    let result = interpreter.interpret("no colons here\n\n:::\n   ", Level::Standard);
    assert!(result.sections.is_empty());
    assert_eq!(result.questions, GENERIC_QUESTIONS.to_vec());
    assert_eq!(result.disclaimer, DISCLAIMER);
}

#[test]
fn child_level_changes_explanations_only() {
    let interpreter = common::builtin_interpreter();
    let text = "Hemoglobin: 13\nWBC: 15";
    let standard = interpreter.interpret(text, Level::Standard);
    let child = interpreter.interpret(text, Level::Child);

    assert_eq!(standard.questions, child.questions);
    for (s, c) in standard.items().zip(child.items()) {
        assert_eq!(s.status, c.status);
        assert_eq!(s.typical, c.typical);
        assert_ne!(s.explanation, c.explanation);
    }
    assert!(child.items().next().unwrap().explanation.contains("moves oxygen"));
}

#[test]
fn pipeline_is_idempotent() {
    let interpreter = common::builtin_interpreter();
    let text = "Hemoglobin: 10.2 g/dL\nLDL: 130\nfoo\nTSH: \nCalcium: 9";
    let first = interpreter.interpret(text, Level::Child);
    let second = interpreter.interpret(text, Level::Child);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn question_count_is_bounded_for_large_reports() {
    let interpreter = common::builtin_interpreter();
    let text = (0..500)
        .map(|i| format!("Hemoglobin: {}", i % 30))
        .collect::<Vec<_>>()
        .join("\n");
    let result = interpreter.interpret(&text, Level::Standard);
    assert_eq!(result.sections[0].items.len(), 500);
    assert!(result.questions.len() <= 5);
}

#[test]
fn custom_question_cap() {
    let interpreter = common::fixture_interpreter(InterpretOptions {
        max_questions: 2,
        ..InterpretOptions::default()
    });
    let result = interpreter.interpret("Ferritin: 400", Level::Standard);
    assert_eq!(result.questions.len(), 2);
}

#[test]
fn narrative_questions_supersede_generated_ones() {
    let interpreter = common::builtin_interpreter();
    let mut result = interpreter.interpret("Hemoglobin: 10.2 g/dL", Level::Standard);

    let used = interpreter.attach_narrative(
        &mut result,
        "You are doing fine overall.\n1. Ask about retesting\n2. Ask about diet",
    );

    assert!(used);
    assert!(result.narrative_used);
    assert_eq!(result.narrative.as_deref(), Some("You are doing fine overall."));
    assert_eq!(result.questions, ["Ask about retesting", "Ask about diet"]);
    assert_eq!(result.sections.len(), 1);
}

#[test]
fn narrative_without_list_keeps_generated_questions() {
    let interpreter = common::builtin_interpreter();
    let mut result = interpreter.interpret("WBC: 6", Level::Standard);
    let generated = result.questions.clone();

    assert!(interpreter.attach_narrative(&mut result, "Everything looks steady."));
    assert_eq!(result.narrative.as_deref(), Some("Everything looks steady."));
    assert_eq!(result.questions, generated);
}

#[test]
fn blank_narrative_is_not_used() {
    let interpreter = common::builtin_interpreter();
    let mut result = interpreter.interpret("WBC: 6", Level::Standard);
    let before = result.clone();

    assert!(!interpreter.attach_narrative(&mut result, "  \n "));
    assert_eq!(result, before);
}

#[test]
fn narrative_questions_respect_configured_cap() {
    let interpreter = common::fixture_interpreter(InterpretOptions {
        max_questions: 3,
        ..InterpretOptions::default()
    });
    let mut result = interpreter.interpret("Ferritin: 50", Level::Standard);
    interpreter.attach_narrative(&mut result, "Body\n1. a\n2. b\n3. c\n4. d");
    assert_eq!(result.questions, ["a", "b", "c"]);
}
