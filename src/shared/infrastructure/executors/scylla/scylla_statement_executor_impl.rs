use async_trait::async_trait;
use scylla::{
    client::{
        execution_profile::ExecutionProfile, session::Session, session_builder::SessionBuilder,
    },
    response::query_result::IntoRowsResultError,
    statement::Consistency,
    value::{CqlValue as DriverValue, Row},
};
use tokio::sync::OnceCell;

use crate::{
    config::app_config::AppConfig,
    shared::{
        domain::model::{
            entities::query_result::{ColumnSpec, QueryResult},
            enums::statement_execution_error::StatementExecutionError,
            value_objects::cql_value::CqlValue,
        },
        infrastructure::executors::statement_executor::StatementExecutor,
    },
};

/// Executes statements over a single lazily opened driver session.
pub struct ScyllaStatementExecutorImpl {
    hosts: Vec<String>,
    username: Option<String>,
    password: Option<String>,
    session: OnceCell<Session>,
}

impl ScyllaStatementExecutorImpl {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            hosts: config.scylla_hosts.clone(),
            username: config.scylla_username.clone(),
            password: config.scylla_password.clone(),
            session: OnceCell::new(),
        }
    }

    async fn session(&self) -> Result<&Session, StatementExecutionError> {
        self.session
            .get_or_try_init(|| async {
                let profile = ExecutionProfile::builder()
                    .consistency(Consistency::One)
                    .build();

                let mut builder = SessionBuilder::new()
                    .known_nodes(&self.hosts)
                    .default_execution_profile_handle(profile.into_handle());
                if let Some(username) = &self.username {
                    builder = builder.user(
                        username.clone(),
                        self.password.clone().unwrap_or_default(),
                    );
                }

                tracing::debug!(hosts = ?self.hosts, "opening scylla session");
                builder
                    .build()
                    .await
                    .map_err(|e| StatementExecutionError::Connection(e.to_string()))
            })
            .await
    }

    fn to_driver_value(value: &CqlValue) -> Option<DriverValue> {
        match value {
            CqlValue::Null => None,
            CqlValue::Text(text) => Some(DriverValue::Text(text.clone())),
            CqlValue::Boolean(flag) => Some(DriverValue::Boolean(*flag)),
            CqlValue::Int(number) => Some(DriverValue::Int(*number)),
            CqlValue::BigInt(number) => Some(DriverValue::BigInt(*number)),
            CqlValue::Duration {
                months,
                days,
                nanoseconds,
            } => Some(DriverValue::Duration(scylla::value::CqlDuration {
                months: *months,
                days: *days,
                nanoseconds: *nanoseconds,
            })),
        }
    }

    fn from_driver_value(value: Option<DriverValue>) -> Result<CqlValue, StatementExecutionError> {
        match value {
            None => Ok(CqlValue::Null),
            Some(DriverValue::Text(text)) | Some(DriverValue::Ascii(text)) => {
                Ok(CqlValue::Text(text))
            }
            Some(DriverValue::Boolean(flag)) => Ok(CqlValue::Boolean(flag)),
            Some(DriverValue::Int(number)) => Ok(CqlValue::Int(number)),
            Some(DriverValue::BigInt(number)) => Ok(CqlValue::BigInt(number)),
            Some(DriverValue::Duration(duration)) => Ok(CqlValue::Duration {
                months: duration.months,
                days: duration.days,
                nanoseconds: duration.nanoseconds,
            }),
            Some(other) => Err(StatementExecutionError::Decode(format!(
                "unsupported cell value {other:?}"
            ))),
        }
    }
}

#[async_trait]
impl StatementExecutor for ScyllaStatementExecutorImpl {
    async fn execute(
        &self,
        statement: &str,
        values: &[CqlValue],
    ) -> Result<QueryResult, StatementExecutionError> {
        let session = self.session().await?;
        let bound: Vec<Option<DriverValue>> = values.iter().map(Self::to_driver_value).collect();

        let result = session
            .query_unpaged(statement, bound)
            .await
            .map_err(|e| StatementExecutionError::Request(e.to_string()))?;

        let rows_result = match result.into_rows_result() {
            Ok(rows_result) => rows_result,
            Err(IntoRowsResultError::ResultNotRows(_)) => return Ok(QueryResult::default()),
            Err(e) => return Err(StatementExecutionError::Decode(e.to_string())),
        };

        let column_specs = rows_result
            .column_specs()
            .iter()
            .map(|spec| ColumnSpec::new(spec.name(), format!("{:?}", spec.typ())))
            .collect();

        let mut rows = Vec::new();
        for row in rows_result
            .rows::<Row>()
            .map_err(|e| StatementExecutionError::Decode(e.to_string()))?
        {
            let row = row.map_err(|e| StatementExecutionError::Decode(e.to_string()))?;
            let cells = row
                .columns
                .into_iter()
                .map(Self::from_driver_value)
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        Ok(QueryResult::new(column_specs, rows))
    }
}
