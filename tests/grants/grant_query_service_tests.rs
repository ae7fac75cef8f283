use scylla_declarative_api::{
    grants::domain::{
        model::enums::{grant_domain_error::GrantDomainError, grant_presence::GrantPresence},
        services::grant_query_service::GrantQueryService,
    },
    shared::domain::model::{
        entities::query_result::{ColumnSpec, QueryResult},
        enums::statement_execution_error::StatementExecutionError,
        value_objects::cql_value::CqlValue,
    },
};

use crate::support::{
    create_harness, fakes::FakeStatementExecutor, keyspace_grant, listing_result, table_grant,
};

#[tokio::test]
async fn handle_read_finds_matching_listing_row() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Ok(
        listing_result(&[
            ("clerk", "<keyspace shop>", "MODIFY"),
            ("clerk", "<keyspace shop>", "SELECT"),
        ]),
    )]));

    let presence = harness
        .query_service
        .handle_read(&keyspace_grant("shop", "clerk", "select"))
        .await
        .expect("read should succeed");

    assert_eq!(presence, GrantPresence::Found);
    assert_eq!(
        harness.executor.statements(),
        vec![r#"LIST SELECT PERMISSION ON KEYSPACE "shop" OF "clerk""#.to_string()]
    );
}

#[tokio::test]
async fn handle_read_matches_lowercased_resource_identity() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Ok(
        listing_result(&[("clerk", "<table shop.dailyorders>", "SELECT")]),
    )]));

    let presence = harness
        .query_service
        .handle_read(&table_grant("Shop", "DailyOrders", "clerk", "SELECT"))
        .await
        .expect("read should succeed");

    assert_eq!(presence, GrantPresence::Found);
}

#[tokio::test]
async fn handle_read_ignores_rows_inherited_from_other_roles() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Ok(
        listing_result(&[("staff", "<keyspace shop>", "SELECT")]),
    )]));

    let presence = harness
        .query_service
        .handle_read(&keyspace_grant("shop", "clerk", "SELECT"))
        .await
        .expect("read should succeed");

    assert_eq!(presence, GrantPresence::NotFound);
}

#[tokio::test]
async fn handle_read_reports_not_found_for_empty_listing() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Ok(
        listing_result(&[]),
    )]));

    let presence = harness
        .query_service
        .handle_read(&keyspace_grant("shop", "clerk", "SELECT"))
        .await
        .expect("read should succeed");

    assert!(!presence.is_found());
}

#[tokio::test]
async fn handle_read_treats_missing_object_as_not_found() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Err(
        StatementExecutionError::Request("<keyspace shop> doesn't exist".to_string()),
    )]));

    let presence = harness
        .query_service
        .handle_read(&keyspace_grant("shop", "clerk", "SELECT"))
        .await
        .expect("missing objects are not errors");

    assert_eq!(presence, GrantPresence::NotFound);
}

#[tokio::test]
async fn handle_read_surfaces_other_failures() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Err(
        StatementExecutionError::Connection("all nodes unreachable".to_string()),
    )]));

    let result = harness
        .query_service
        .handle_read(&keyspace_grant("shop", "clerk", "SELECT"))
        .await;

    assert!(matches!(
        result,
        Err(GrantDomainError::Execution { statement, .. })
            if statement == r#"LIST SELECT PERMISSION ON KEYSPACE "shop" OF "clerk""#
    ));
}

#[tokio::test]
async fn handle_read_rejects_listing_without_permission_column() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Ok(
        QueryResult::new(
            vec![
                ColumnSpec::new("role", "text"),
                ColumnSpec::new("resource", "text"),
            ],
            vec![vec![
                CqlValue::from("clerk"),
                CqlValue::from("<keyspace shop>"),
            ]],
        ),
    )]));

    let result = harness
        .query_service
        .handle_read(&keyspace_grant("shop", "clerk", "SELECT"))
        .await;

    assert!(matches!(
        result,
        Err(GrantDomainError::Schema(message)) if message.contains("permission")
    ));
}
