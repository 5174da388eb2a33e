use agentdraft::shared::ids::validate_identifier_value;
use agentdraft::shared::WorkflowId;

#[test]
fn shared_ids_module_accepts_ascii_identifiers() {
    assert_eq!(
        WorkflowId::parse("refund_status-2").map(|id| id.to_string()),
        Ok("refund_status-2".to_string())
    );
    assert!(validate_identifier_value("workflow id", "workflow1").is_ok());
}

#[test]
fn shared_ids_module_rejects_empty_and_spaced_values() {
    assert_eq!(
        WorkflowId::parse(""),
        Err("workflow id must be non-empty".to_string())
    );
    assert!(WorkflowId::parse("order cancel").is_err());
}

#[test]
fn shared_ids_module_deserialize_reports_offending_value() {
    let err = serde_yaml::from_str::<WorkflowId>("\"bad/id\"").expect_err("invalid");
    assert!(err.to_string().contains("invalid workflow id `bad/id`"));
}
