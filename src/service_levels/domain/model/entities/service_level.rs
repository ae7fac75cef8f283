use crate::{
    service_levels::domain::model::{
        enums::{service_level_domain_error::ServiceLevelDomainError, workload_type::WorkloadType},
        value_objects::{
            service_level_name::ServiceLevelName, service_level_shares::ServiceLevelShares,
        },
    },
    shared::domain::model::{
        builders::cql_statement_builder::CqlStatementBuilder,
        value_objects::{cql::Cql, field_violation::FieldViolation},
    },
};

#[derive(Clone, Debug, Default)]
pub struct ServiceLevelParts {
    pub name: Option<String>,
    pub shares: Option<i64>,
    pub workload_type: Option<String>,
    pub timeout_milliseconds: Option<i64>,
}

/// Optional settings of a service level; absent settings are left to the server.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ServiceLevelSettings {
    pub shares: Option<ServiceLevelShares>,
    pub workload_type: Option<WorkloadType>,
    pub timeout_milliseconds: Option<i64>,
}

impl ServiceLevelSettings {
    pub fn is_empty(&self) -> bool {
        self.shares.is_none() && self.workload_type.is_none() && self.timeout_milliseconds.is_none()
    }

    pub(crate) fn append_clauses(&self, statement: &mut CqlStatementBuilder) {
        if let Some(shares) = self.shares {
            statement.once("with", " WITH ", " AND ");
            statement.appendf("SHARES = %s", &[Cql::int_literal(shares.value())]);
        }
        if let Some(workload_type) = self.workload_type {
            statement.once("with", " WITH ", " AND ");
            statement.appendf(
                "WORKLOAD_TYPE = %s",
                &[Cql::string_literal(workload_type.as_str())],
            );
        }
        if let Some(timeout) = self.timeout_milliseconds {
            statement.once("with", " WITH ", " AND ");
            statement.appendf(
                "TIMEOUT = %s",
                &[Cql::string_literal(&format!("{timeout}ms"))],
            );
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServiceLevel {
    name: ServiceLevelName,
    settings: ServiceLevelSettings,
}

/// Settings as reported by `LIST SERVICE LEVEL`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceLevelAttributes {
    pub shares: Option<i64>,
    pub workload_type: Option<String>,
    pub timeout_milliseconds: Option<i64>,
}

impl ServiceLevel {
    pub fn new(parts: ServiceLevelParts) -> Result<Self, ServiceLevelDomainError> {
        let mut violations = Vec::new();

        let name = ServiceLevelName::new(parts.name.as_deref())
            .map_err(|violation| violations.push(violation))
            .ok();
        let settings = ServiceLevelSettings {
            shares: parts.shares.and_then(|shares| {
                ServiceLevelShares::new(shares)
                    .map_err(|violation| violations.push(violation))
                    .ok()
            }),
            workload_type: parts.workload_type.as_deref().and_then(|value| {
                parse_workload_type(value)
                    .map_err(|violation| violations.push(violation))
                    .ok()
            }),
            timeout_milliseconds: parts.timeout_milliseconds,
        };

        match name {
            Some(name) if violations.is_empty() => Ok(Self { name, settings }),
            _ => Err(ServiceLevelDomainError::Validation(violations)),
        }
    }

    pub fn name(&self) -> &ServiceLevelName {
        &self.name
    }

    pub fn settings(&self) -> &ServiceLevelSettings {
        &self.settings
    }

    pub fn create_statement(&self) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf(
            "CREATE SERVICE LEVEL %s",
            &[Cql::quoted_name(self.name.value())],
        );
        self.settings.append_clauses(&mut statement);
        statement.render()
    }

    pub fn list_statement(name: &ServiceLevelName) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf("LIST SERVICE LEVEL %s", &[Cql::quoted_name(name.value())]);
        statement.render()
    }

    pub fn drop_statement(name: &ServiceLevelName) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf("DROP SERVICE LEVEL %s", &[Cql::quoted_name(name.value())]);
        statement.render()
    }
}

fn parse_workload_type(value: &str) -> Result<WorkloadType, FieldViolation> {
    value.parse().map_err(|_| {
        FieldViolation::new(
            "workload_type",
            "Unsupported value",
            "workload_type must be either \"unspecified\", \"interactive\" or \"batch\"",
        )
    })
}
