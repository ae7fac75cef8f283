use scylla_declarative_api::shared::{
    domain::model::value_objects::field_violation::FieldViolation,
    interfaces::host::diagnostics::{DiagnosticSeverity, Diagnostics},
};

#[test]
fn warnings_do_not_count_as_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.add_warning("Deprecated", "use something else");

    assert!(!diagnostics.has_error());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn violations_become_attribute_errors_in_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.add_violations(&[
        FieldViolation::new("keyspace", "Keyspace missing", "Keyspace must be specified."),
        FieldViolation::new("grantee", "Grantee missing", "Grantee must be specified."),
    ]);
    diagnostics.add_error("Query error", "boom");

    assert!(diagnostics.has_error());
    assert_eq!(diagnostics.error_attributes(), vec!["keyspace", "grantee"]);
    assert!(
        diagnostics
            .iter()
            .all(|diagnostic| diagnostic.severity == DiagnosticSeverity::Error)
    );
}

#[test]
fn diagnostics_serialize_as_plain_list() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.add_attribute_error("shares", "Out of range", "too many");

    let value = serde_json::to_value(&diagnostics).expect("serializable");

    assert_eq!(
        value,
        serde_json::json!([{
            "severity": "error",
            "summary": "Out of range",
            "detail": "too many",
            "attribute": "shares",
        }])
    );
}
