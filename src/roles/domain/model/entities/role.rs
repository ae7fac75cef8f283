use crate::{
    roles::domain::model::{
        enums::role_domain_error::RoleDomainError, value_objects::role_name::RoleName,
    },
    shared::domain::model::{
        builders::cql_statement_builder::CqlStatementBuilder,
        value_objects::{cql::Cql, field_violation::FieldViolation},
    },
};

#[derive(Clone, Debug, Default)]
pub struct RoleParts {
    pub name: Option<String>,
    pub login: Option<bool>,
    pub superuser: Option<bool>,
    pub password: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Role {
    name: RoleName,
    login: bool,
    superuser: bool,
    password: Option<String>,
}

/// Schemes of `salted_hash` that can be checked locally.
const BCRYPT_PREFIXES: [&str; 2] = ["$2a$", "$2y$"];

/// Role columns as stored in `system_auth.roles`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleAttributes {
    pub login: bool,
    pub superuser: bool,
    pub salted_hash: Option<String>,
}

impl RoleAttributes {
    /// Checks `password` against the stored hash.
    ///
    /// `None` when the role has no hash or its scheme is not bcrypt.
    pub fn password_matches(&self, password: &str) -> Option<bool> {
        let hash = self.salted_hash.as_deref()?;
        if !BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix)) {
            return None;
        }

        Some(matches!(bcrypt::verify(password, hash), Ok(true)))
    }
}

impl Role {
    pub fn new(parts: RoleParts) -> Result<Self, RoleDomainError> {
        let mut violations = Vec::new();

        let name = RoleName::new(parts.name.as_deref())
            .map_err(|violation| violations.push(violation))
            .ok();
        if parts.login.is_none() {
            violations.push(FieldViolation::new(
                "login",
                "Login missing",
                "Whether the role may log in must be specified.",
            ));
        }
        if parts.superuser.is_none() {
            violations.push(FieldViolation::new(
                "superuser",
                "Superuser missing",
                "Whether the role is a superuser must be specified.",
            ));
        }

        match (name, parts.login, parts.superuser) {
            (Some(name), Some(login), Some(superuser)) => Ok(Self {
                name,
                login,
                superuser,
                password: parts.password,
            }),
            _ => Err(RoleDomainError::Validation(violations)),
        }
    }

    pub fn name(&self) -> &RoleName {
        &self.name
    }

    pub fn login(&self) -> bool {
        self.login
    }

    pub fn superuser(&self) -> bool {
        self.superuser
    }

    pub fn create_statement(&self) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf("CREATE ROLE %s", &[Cql::quoted_name(self.name.value())]);
        statement.once("with", " WITH ", " AND ");
        statement.appendf("LOGIN = %s", &[Cql::bool_literal(self.login)]);
        statement.once("with", " WITH ", " AND ");
        statement.appendf("SUPERUSER = %s", &[Cql::bool_literal(self.superuser)]);
        if let Some(password) = &self.password {
            statement.once("with", " WITH ", " AND ");
            statement.appendf("PASSWORD = %s", &[Cql::string_literal(password)]);
        }
        statement.render()
    }

    pub fn drop_statement(name: &RoleName) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf("DROP ROLE %s", &[Cql::quoted_name(name.value())]);
        statement.render()
    }
}
