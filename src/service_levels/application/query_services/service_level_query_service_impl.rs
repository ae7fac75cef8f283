use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    service_levels::domain::{
        model::{
            entities::service_level::{ServiceLevel, ServiceLevelAttributes},
            enums::service_level_domain_error::ServiceLevelDomainError,
            value_objects::service_level_name::ServiceLevelName,
        },
        services::service_level_query_service::ServiceLevelQueryService,
    },
    shared::{
        domain::model::{entities::query_result::QueryResult, value_objects::cql_value::CqlValue},
        infrastructure::executors::statement_executor::StatementExecutor,
    },
};

const NANOSECONDS_PER_MILLISECOND: i64 = 1_000_000;

pub struct ServiceLevelQueryServiceImpl {
    executor: Arc<dyn StatementExecutor>,
}

impl ServiceLevelQueryServiceImpl {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }
}

fn non_null(value: &CqlValue) -> Option<&CqlValue> {
    (!value.is_null()).then_some(value)
}

#[async_trait]
impl ServiceLevelQueryService for ServiceLevelQueryServiceImpl {
    async fn handle_find(
        &self,
        name: &ServiceLevelName,
    ) -> Result<Option<ServiceLevelAttributes>, ServiceLevelDomainError> {
        let result = self
            .executor
            .execute(&ServiceLevel::list_statement(name), &[])
            .await
            .map_err(|e| ServiceLevelDomainError::Query(e.to_string()))?;

        let Some(row) = result.rows.first() else {
            return Ok(None);
        };

        let timeout_column = result.find_column("timeout")?;
        let workload_type_column = result.find_column("workload_type")?;
        // Only reported by enterprise clusters.
        let shares_column = result.find_optional_column("shares");

        // Months and days are ignored, a timeout never gets that long.
        let timeout_milliseconds = match non_null(QueryResult::cell(row, timeout_column)?) {
            Some(value) => Some(value.as_duration()?.2 / NANOSECONDS_PER_MILLISECOND),
            None => None,
        };
        let workload_type = match non_null(QueryResult::cell(row, workload_type_column)?) {
            Some(value) => Some(value.as_text()?.to_string()),
            None => None,
        };
        let shares = match shares_column {
            Some(index) => match non_null(QueryResult::cell(row, index)?) {
                Some(value) => Some(i64::from(value.as_int32()?)),
                None => None,
            },
            None => None,
        };

        Ok(Some(ServiceLevelAttributes {
            shares,
            workload_type,
            timeout_milliseconds,
        }))
    }
}
