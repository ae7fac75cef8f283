use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    grants::domain::{
        model::{entities::grant::Grant, enums::grant_domain_error::GrantDomainError},
        services::grant_command_service::GrantCommandService,
    },
    shared::infrastructure::executors::statement_executor::StatementExecutor,
};

pub struct GrantCommandServiceImpl {
    executor: Arc<dyn StatementExecutor>,
}

impl GrantCommandServiceImpl {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }

    async fn run_statement(&self, statement: String) -> Result<(), GrantDomainError> {
        tracing::debug!(%statement, "executing grant statement");

        self.executor
            .execute(&statement, &[])
            .await
            .map_err(|e| GrantDomainError::Execution {
                statement,
                message: e.to_string(),
            })?;

        Ok(())
    }
}

#[async_trait]
impl GrantCommandService for GrantCommandServiceImpl {
    async fn handle_create(&self, grant: &Grant) -> Result<(), GrantDomainError> {
        self.run_statement(grant.grant_statement()).await?;

        tracing::info!(
            grantee = grant.grantee(),
            resource = %grant.resource().listing_identity(),
            permission = grant.permission().value(),
            "created grant"
        );
        Ok(())
    }

    async fn handle_delete(&self, grant: &Grant) -> Result<(), GrantDomainError> {
        self.run_statement(grant.revoke_statement()).await?;

        tracing::info!(
            grantee = grant.grantee(),
            resource = %grant.resource().listing_identity(),
            permission = grant.permission().value(),
            "revoked grant"
        );
        Ok(())
    }
}
