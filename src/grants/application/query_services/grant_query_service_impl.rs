use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    grants::domain::{
        model::{
            entities::grant::Grant,
            enums::{grant_domain_error::GrantDomainError, grant_presence::GrantPresence},
        },
        services::grant_query_service::GrantQueryService,
    },
    shared::{
        domain::model::entities::query_result::QueryResult,
        infrastructure::executors::statement_executor::StatementExecutor,
    },
};

pub struct GrantQueryServiceImpl {
    executor: Arc<dyn StatementExecutor>,
}

impl GrantQueryServiceImpl {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }

    fn scan_listing(grant: &Grant, result: &QueryResult) -> Result<GrantPresence, GrantDomainError> {
        let role_column = result.find_column("role")?;
        let resource_column = result.find_column("resource")?;
        let permission_column = result.find_column("permission")?;

        for row in &result.rows {
            let role = QueryResult::cell(row, role_column)?.as_text()?;
            let resource = QueryResult::cell(row, resource_column)?.as_text()?;
            let permission = QueryResult::cell(row, permission_column)?.as_text()?;

            if grant.matches_listing(role, resource, permission) {
                return Ok(GrantPresence::Found);
            }
        }

        Ok(GrantPresence::NotFound)
    }
}

#[async_trait]
impl GrantQueryService for GrantQueryServiceImpl {
    async fn handle_read(&self, grant: &Grant) -> Result<GrantPresence, GrantDomainError> {
        let statement = grant.list_statement();
        tracing::debug!(%statement, "listing permissions");

        let result = match self.executor.execute(&statement, &[]).await {
            Ok(result) => result,
            Err(error) if error.indicates_missing_object() => {
                tracing::warn!(
                    grantee = grant.grantee(),
                    resource = %grant.resource().listing_identity(),
                    "grant target no longer exists"
                );
                return Ok(GrantPresence::NotFound);
            }
            Err(error) => {
                return Err(GrantDomainError::Execution {
                    statement,
                    message: error.to_string(),
                });
            }
        };

        Self::scan_listing(grant, &result)
    }
}
