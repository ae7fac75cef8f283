use axum::{Json, extract::State, http::StatusCode};
use scylla_declarative_api::{
    grants::interfaces::host::resources::keyspace_grant_resource_data::KeyspaceGrantResourceData,
    shared::{
        domain::model::enums::statement_execution_error::StatementExecutionError,
        interfaces::{
            host::lifecycle::{CreateResourceRequest, ReadResourceRequest},
            rest::controllers::resource_lifecycle_rest_controller::{
                create_resource, read_resource,
            },
        },
    },
};

use crate::support::{
    create_harness, fakes::FakeStatementExecutor, keyspace_grant_data, listing_result,
};

#[tokio::test]
async fn read_endpoint_replies_ok_with_state_when_grant_exists() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Ok(
        listing_result(&[("clerk", "<keyspace shop>", "SELECT")]),
    )]));
    let data = keyspace_grant_data("shop", "clerk", "SELECT");

    let (status, Json(response)) = read_resource(
        State(harness.keyspace_grants.clone()),
        Json(ReadResourceRequest {
            state: data.clone(),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.state, Some(data));
}

#[tokio::test]
async fn create_endpoint_replies_unprocessable_entity_on_error_diagnostics() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Err(
        StatementExecutionError::Request("Unauthorized".to_string()),
    )]));

    let (status, Json(response)) = create_resource(
        State(harness.keyspace_grants.clone()),
        Json(CreateResourceRequest {
            config: keyspace_grant_data("shop", "clerk", "SELECT"),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.state.is_none());
    assert!(response.diagnostics.has_error());
}

#[test]
fn lifecycle_payloads_use_tagged_attribute_values() {
    let request: CreateResourceRequest<KeyspaceGrantResourceData> = serde_json::from_value(serde_json::json!({
        "config": {
            "keyspace": { "state": "known", "value": "shop" },
            "grantee": { "state": "unknown" },
        }
    }))
    .expect("valid payload");

    assert_eq!(request.config.keyspace.known().map(String::as_str), Some("shop"));
    assert!(request.config.grantee.is_unknown());
    assert!(request.config.permission.is_null());
}
