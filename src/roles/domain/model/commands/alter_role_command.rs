use crate::{
    roles::domain::model::value_objects::role_name::RoleName,
    shared::domain::model::{
        builders::cql_statement_builder::CqlStatementBuilder, value_objects::cql::Cql,
    },
};

/// Attributes to change on an existing role; `None` leaves an attribute untouched.
#[derive(Clone, Debug)]
pub struct AlterRoleCommand {
    name: RoleName,
    login: Option<bool>,
    superuser: Option<bool>,
    password: Option<String>,
}

impl AlterRoleCommand {
    pub fn new(
        name: RoleName,
        login: Option<bool>,
        superuser: Option<bool>,
        password: Option<String>,
    ) -> Self {
        Self {
            name,
            login,
            superuser,
            password,
        }
    }

    pub fn name(&self) -> &RoleName {
        &self.name
    }

    pub fn has_changes(&self) -> bool {
        self.login.is_some() || self.superuser.is_some() || self.password.is_some()
    }

    pub fn statement(&self) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf("ALTER ROLE %s", &[Cql::quoted_name(self.name.value())]);
        if let Some(login) = self.login {
            statement.once("with", " WITH ", " AND ");
            statement.appendf("LOGIN = %s", &[Cql::bool_literal(login)]);
        }
        if let Some(superuser) = self.superuser {
            statement.once("with", " WITH ", " AND ");
            statement.appendf("SUPERUSER = %s", &[Cql::bool_literal(superuser)]);
        }
        if let Some(password) = &self.password {
            statement.once("with", " WITH ", " AND ");
            statement.appendf("PASSWORD = %s", &[Cql::string_literal(password)]);
        }
        statement.render()
    }
}
