use scylla_declarative_api::{
    grants::domain::{
        model::enums::grant_domain_error::GrantDomainError,
        services::grant_command_service::GrantCommandService,
    },
    shared::domain::model::enums::statement_execution_error::StatementExecutionError,
};

use crate::support::{create_harness, fakes::FakeStatementExecutor, keyspace_grant, table_grant};

#[tokio::test]
async fn handle_create_issues_grant_statement() {
    let harness = create_harness(FakeStatementExecutor::new());

    let result = harness
        .command_service
        .handle_create(&table_grant("shop", "orders", "clerk", "select"))
        .await;

    assert!(result.is_ok());
    assert_eq!(
        harness.executor.statements(),
        vec![r#"GRANT SELECT ON "shop"."orders" TO "clerk""#.to_string()]
    );
}

#[tokio::test]
async fn handle_create_reports_statement_and_server_message_on_failure() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Err(
        StatementExecutionError::Request("Unauthorized: no AUTHORIZE permission".to_string()),
    )]));

    let result = harness
        .command_service
        .handle_create(&keyspace_grant("shop", "clerk", "ALTER"))
        .await;

    let Err(error @ GrantDomainError::Execution { .. }) = result else {
        panic!("expected execution error");
    };
    assert_eq!(
        error.to_string(),
        "GRANT ALTER ON KEYSPACE \"shop\" TO \"clerk\"\n\nUnauthorized: no AUTHORIZE permission"
    );
}

#[tokio::test]
async fn handle_delete_issues_revoke_statement() {
    let harness = create_harness(FakeStatementExecutor::new());

    let result = harness
        .command_service
        .handle_delete(&keyspace_grant("shop", "clerk", "drop"))
        .await;

    assert!(result.is_ok());
    assert_eq!(
        harness.executor.statements(),
        vec![r#"REVOKE DROP ON KEYSPACE "shop" FROM "clerk""#.to_string()]
    );
}

#[tokio::test]
async fn handle_delete_surfaces_missing_role_as_error() {
    let harness = create_harness(FakeStatementExecutor::with_responses(vec![Err(
        StatementExecutionError::Request("Role clerk doesn't exist".to_string()),
    )]));

    let result = harness
        .command_service
        .handle_delete(&keyspace_grant("shop", "clerk", "DROP"))
        .await;

    assert!(matches!(result, Err(GrantDomainError::Execution { .. })));
}
