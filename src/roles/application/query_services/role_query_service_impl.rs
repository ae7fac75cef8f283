use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    roles::domain::{
        model::{
            entities::role::RoleAttributes, enums::role_domain_error::RoleDomainError,
            value_objects::role_name::RoleName,
        },
        services::role_query_service::RoleQueryService,
    },
    shared::{
        domain::model::{entities::query_result::QueryResult, value_objects::cql_value::CqlValue},
        infrastructure::executors::statement_executor::StatementExecutor,
    },
};

const SELECT_ROLE_STATEMENT: &str =
    "SELECT can_login, is_superuser, salted_hash FROM system_auth.roles WHERE role = ?";

pub struct RoleQueryServiceImpl {
    executor: Arc<dyn StatementExecutor>,
}

impl RoleQueryServiceImpl {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl RoleQueryService for RoleQueryServiceImpl {
    async fn handle_find(
        &self,
        name: &RoleName,
    ) -> Result<Option<RoleAttributes>, RoleDomainError> {
        let result = self
            .executor
            .execute(SELECT_ROLE_STATEMENT, &[CqlValue::from(name.value())])
            .await
            .map_err(|e| RoleDomainError::Query(e.to_string()))?;

        let Some(row) = result.rows.first() else {
            return Ok(None);
        };

        let salted_hash = match QueryResult::cell(row, 2)? {
            value if value.is_null() => None,
            value => Some(value.as_text()?.to_string()),
        };

        Ok(Some(RoleAttributes {
            login: QueryResult::cell(row, 0)?.as_boolean()?,
            superuser: QueryResult::cell(row, 1)?.as_boolean()?,
            salted_hash,
        }))
    }
}
