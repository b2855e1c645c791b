use plumber_board::classify::{
    classify_issue, IssueCategory, IssueSeverity, IssueUrgency,
};

#[test]
fn leak_description_classifies_as_leak() {
    let result = classify_issue("water is leaking from under the sink, small puddle forming");
    assert_eq!(result.category, IssueCategory::Leak);
    assert!(result.confidence > 0.0);
    assert!(result
        .required_tools
        .iter()
        .any(|t| t == "pipe wrench"));
    assert_eq!(result.estimated_duration, "1-3 hours");
}

#[test]
fn water_heater_description_classifies_by_score() {
    let result = classify_issue("heater temperature is wrong, heating takes forever");
    assert_eq!(result.category, IssueCategory::WaterHeater);
    assert!(result
        .safety_notes
        .iter()
        .any(|n| n == "Turn off power/gas before service"));
}

#[test]
fn sewer_description_carries_sewer_recommendations() {
    let result = classify_issue("strong sewer smell in the yard near the septic field");
    assert_eq!(result.category, IssueCategory::Sewer);
    assert_eq!(result.estimated_duration, "2-6 hours");
    assert!(result
        .next_steps
        .iter()
        .any(|s| s == "Check for city sewer line responsibility"));
}

#[test]
fn flooding_triggers_emergency_dispatch_steps() {
    let result = classify_issue("basement is flooding, pipe burst, come now");
    assert_eq!(result.severity, IssueSeverity::Critical);
    assert_eq!(result.urgency, IssueUrgency::Emergency);
    assert_eq!(
        result.next_steps[0],
        "Dispatch emergency technician immediately"
    );
    // Critical severity also pulls in the backup-crew steps.
    assert!(result
        .next_steps
        .iter()
        .any(|s| s == "Bring backup technician if needed"));
}

#[test]
fn calm_description_gets_standard_scheduling() {
    let result = classify_issue("toilet tank refills slowly, no rush at all");
    assert_eq!(result.urgency, IssueUrgency::Low);
    assert_eq!(
        result.next_steps[0],
        "Schedule technician within 24-48 hours"
    );
}

#[test]
fn classification_serializes_with_camel_case_fields() {
    let result = classify_issue("garbage disposal is jammed and humming");
    assert_eq!(result.category, IssueCategory::GarbageDisposal);

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["category"], "garbage_disposal");
    assert!(value["estimatedDuration"].is_string());
    assert!(value["requiredTools"].is_array());
    assert!(value["nextSteps"].is_array());
}

#[test]
fn classification_is_deterministic() {
    let description = "faucet is dripping, please come quickly";
    assert_eq!(classify_issue(description), classify_issue(description));
}
