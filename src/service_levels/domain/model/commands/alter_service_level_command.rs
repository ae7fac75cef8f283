use crate::{
    service_levels::domain::model::{
        entities::service_level::ServiceLevelSettings,
        value_objects::service_level_name::ServiceLevelName,
    },
    shared::domain::model::{
        builders::cql_statement_builder::CqlStatementBuilder, value_objects::cql::Cql,
    },
};

/// Settings to change on an existing service level.
#[derive(Clone, Debug)]
pub struct AlterServiceLevelCommand {
    name: ServiceLevelName,
    changes: ServiceLevelSettings,
}

impl AlterServiceLevelCommand {
    pub fn new(name: ServiceLevelName, changes: ServiceLevelSettings) -> Self {
        Self { name, changes }
    }

    pub fn name(&self) -> &ServiceLevelName {
        &self.name
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn statement(&self) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf(
            "ALTER SERVICE LEVEL %s",
            &[Cql::quoted_name(self.name.value())],
        );
        self.changes.append_clauses(&mut statement);
        statement.render()
    }
}
