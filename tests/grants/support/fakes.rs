use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;
use regex::Regex;
use scylla_declarative_api::shared::{
    domain::model::{
        entities::query_result::{ColumnSpec, QueryResult},
        enums::statement_execution_error::StatementExecutionError,
        value_objects::cql_value::CqlValue,
    },
    infrastructure::executors::statement_executor::StatementExecutor,
};

#[derive(Default)]
struct FakeStatementExecutorState {
    statements: Vec<String>,
    responses: VecDeque<Result<QueryResult, StatementExecutionError>>,
}

/// Records every statement and answers with scripted responses, then empty results.
pub struct FakeStatementExecutor {
    state: Mutex<FakeStatementExecutorState>,
}

impl FakeStatementExecutor {
    pub fn new() -> Self {
        Self::with_responses(vec![])
    }

    pub fn with_responses(responses: Vec<Result<QueryResult, StatementExecutionError>>) -> Self {
        Self {
            state: Mutex::new(FakeStatementExecutorState {
                statements: Vec::new(),
                responses: responses.into(),
            }),
        }
    }

    pub fn statements(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .statements
            .clone()
    }
}

#[async_trait]
impl StatementExecutor for FakeStatementExecutor {
    async fn execute(
        &self,
        statement: &str,
        _values: &[CqlValue],
    ) -> Result<QueryResult, StatementExecutionError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.statements.push(statement.to_string());
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Ok(QueryResult::default()))
    }
}

lazy_static::lazy_static! {
    static ref GRANT_REGEX: Regex =
        Regex::new(r#"^GRANT (\w+) ON (.+) TO "((?:[^"]|"")*)"$"#).expect("valid regex");
    static ref REVOKE_REGEX: Regex =
        Regex::new(r#"^REVOKE (\w+) ON (.+) FROM "((?:[^"]|"")*)"$"#).expect("valid regex");
    static ref LIST_REGEX: Regex =
        Regex::new(r#"^LIST (\w+) PERMISSION ON (.+) OF "((?:[^"]|"")*)"$"#).expect("valid regex");
    static ref KEYSPACE_FRAGMENT_REGEX: Regex =
        Regex::new(r#"^KEYSPACE "((?:[^"]|"")*)"$"#).expect("valid regex");
    static ref TABLE_FRAGMENT_REGEX: Regex =
        Regex::new(r#"^"((?:[^"]|"")*)"\."((?:[^"]|"")*)"$"#).expect("valid regex");
}

fn unquote(value: &str) -> String {
    value.replace("\"\"", "\"")
}

fn listing_identity(fragment: &str) -> Option<String> {
    if let Some(captures) = KEYSPACE_FRAGMENT_REGEX.captures(fragment) {
        return Some(format!("<keyspace {}>", unquote(&captures[1]).to_lowercase()));
    }
    TABLE_FRAGMENT_REGEX.captures(fragment).map(|captures| {
        format!(
            "<table {}.{}>",
            unquote(&captures[1]).to_lowercase(),
            unquote(&captures[2]).to_lowercase()
        )
    })
}

#[derive(Default)]
struct InMemoryPermissionClusterState {
    roles: HashSet<String>,
    /// (role, resource, permission)
    permissions: BTreeSet<(String, String, String)>,
    statements: Vec<String>,
}

/// Interprets GRANT, REVOKE and LIST PERMISSION the way a cluster would.
pub struct InMemoryPermissionCluster {
    state: Mutex<InMemoryPermissionClusterState>,
}

impl InMemoryPermissionCluster {
    pub fn with_roles(roles: &[&str]) -> Self {
        Self {
            state: Mutex::new(InMemoryPermissionClusterState {
                roles: roles.iter().map(|role| role.to_string()).collect(),
                ..InMemoryPermissionClusterState::default()
            }),
        }
    }

    pub fn drop_role(&self, role: &str) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.roles.remove(role);
        state.permissions.retain(|(grantee, _, _)| grantee != role);
    }

    pub fn permissions(&self) -> Vec<(String, String, String)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .permissions
            .iter()
            .cloned()
            .collect()
    }

    pub fn statements(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .statements
            .clone()
    }
}

fn missing_role(role: &str) -> StatementExecutionError {
    StatementExecutionError::Request(format!("Role {role} doesn't exist"))
}

fn unparsable(statement: &str) -> StatementExecutionError {
    StatementExecutionError::Request(format!("line 1:0 no viable alternative at input '{statement}'"))
}

#[async_trait]
impl StatementExecutor for InMemoryPermissionCluster {
    async fn execute(
        &self,
        statement: &str,
        _values: &[CqlValue],
    ) -> Result<QueryResult, StatementExecutionError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.statements.push(statement.to_string());

        if let Some(captures) = GRANT_REGEX.captures(statement) {
            let role = unquote(&captures[3]);
            let resource = listing_identity(&captures[2]).ok_or_else(|| unparsable(statement))?;
            if !state.roles.contains(&role) {
                return Err(missing_role(&role));
            }
            state
                .permissions
                .insert((role, resource, captures[1].to_string()));
            return Ok(QueryResult::default());
        }

        if let Some(captures) = REVOKE_REGEX.captures(statement) {
            let role = unquote(&captures[3]);
            let resource = listing_identity(&captures[2]).ok_or_else(|| unparsable(statement))?;
            if !state.roles.contains(&role) {
                return Err(missing_role(&role));
            }
            state
                .permissions
                .remove(&(role, resource, captures[1].to_string()));
            return Ok(QueryResult::default());
        }

        if let Some(captures) = LIST_REGEX.captures(statement) {
            let role = unquote(&captures[3]);
            let resource = listing_identity(&captures[2]).ok_or_else(|| unparsable(statement))?;
            if !state.roles.contains(&role) {
                return Err(missing_role(&role));
            }
            let rows = state
                .permissions
                .iter()
                .filter(|(grantee, on, permission)| {
                    *grantee == role && *on == resource && permission.as_str() == &captures[1]
                })
                .map(|(grantee, on, permission)| {
                    vec![
                        CqlValue::from(grantee.as_str()),
                        CqlValue::from(grantee.as_str()),
                        CqlValue::from(on.as_str()),
                        CqlValue::from(permission.as_str()),
                    ]
                })
                .collect();
            return Ok(QueryResult::new(
                vec![
                    ColumnSpec::new("role", "text"),
                    ColumnSpec::new("username", "text"),
                    ColumnSpec::new("resource", "text"),
                    ColumnSpec::new("permission", "text"),
                ],
                rows,
            ));
        }

        Err(unparsable(statement))
    }
}
