use async_trait::async_trait;

use crate::shared::domain::model::{
    entities::query_result::QueryResult, enums::statement_execution_error::StatementExecutionError,
    value_objects::cql_value::CqlValue,
};

/// Sends one statement to the cluster and returns its rows.
///
/// Implementations own the session; callers never retry.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    async fn execute(
        &self,
        statement: &str,
        values: &[CqlValue],
    ) -> Result<QueryResult, StatementExecutionError>;
}
