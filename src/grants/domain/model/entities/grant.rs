use crate::{
    grants::domain::model::{
        enums::{
            grant_domain_error::GrantDomainError,
            grantable_resource::{GrantableResource, GrantableResourceKind},
        },
        value_objects::permission::Permission,
    },
    shared::domain::model::{
        builders::cql_statement_builder::CqlStatementBuilder,
        value_objects::{cql::Cql, field_violation::FieldViolation},
    },
};

/// Raw grant attributes as received from the host. `None` and empty strings
/// both count as missing.
#[derive(Clone, Debug)]
pub struct GrantParts {
    pub kind: GrantableResourceKind,
    pub keyspace: Option<String>,
    pub table: Option<String>,
    pub grantee: Option<String>,
    pub permission: Option<String>,
}

/// The (grantee, resource, permission) triple the cluster authorizes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grant {
    resource: GrantableResource,
    grantee: String,
    permission: Permission,
}

impl Grant {
    /// Validates every attribute and reports all violations at once.
    pub fn new(parts: GrantParts) -> Result<Self, GrantDomainError> {
        let mut violations = Vec::new();

        let keyspace = required(parts.keyspace);
        if keyspace.is_none() {
            violations.push(FieldViolation::new(
                "keyspace",
                "Keyspace missing",
                "Keyspace must be specified.",
            ));
        }

        let table = match parts.kind {
            GrantableResourceKind::Keyspace => None,
            GrantableResourceKind::Table => {
                let table = required(parts.table);
                if table.is_none() {
                    violations.push(FieldViolation::new(
                        "table",
                        "Table missing",
                        "Table name must be specified.",
                    ));
                }
                table
            }
        };

        let grantee = required(parts.grantee);
        if grantee.is_none() {
            violations.push(FieldViolation::new(
                "grantee",
                "Grantee missing",
                "Grantee must be specified.",
            ));
        }

        let permission = match required(parts.permission) {
            None => {
                violations.push(FieldViolation::new(
                    "permission",
                    "Permission missing",
                    "Permission must be specified.",
                ));
                None
            }
            Some(value) => match Permission::new(&value, parts.kind) {
                Ok(permission) => Some(permission),
                Err(violation) => {
                    violations.push(violation);
                    None
                }
            },
        };

        match (keyspace, table, grantee, permission) {
            (Some(keyspace), table, Some(grantee), Some(permission)) if violations.is_empty() => {
                let resource = match (parts.kind, table) {
                    (GrantableResourceKind::Table, Some(table)) => {
                        GrantableResource::table(keyspace, table)
                    }
                    _ => GrantableResource::keyspace(keyspace),
                };
                Ok(Self {
                    resource,
                    grantee,
                    permission,
                })
            }
            _ => Err(GrantDomainError::Validation(violations)),
        }
    }

    pub fn resource(&self) -> &GrantableResource {
        &self.resource
    }

    pub fn grantee(&self) -> &str {
        &self.grantee
    }

    pub fn permission(&self) -> &Permission {
        &self.permission
    }

    pub fn grant_statement(&self) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf(
            "GRANT %s ON %s TO %s",
            &[
                self.permission.as_cql(),
                self.resource.statement_fragment(),
                Cql::quoted_name(&self.grantee),
            ],
        );
        statement.render()
    }

    pub fn list_statement(&self) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf(
            "LIST %s PERMISSION ON %s OF %s",
            &[
                self.permission.as_cql(),
                self.resource.statement_fragment(),
                Cql::quoted_name(&self.grantee),
            ],
        );
        statement.render()
    }

    pub fn revoke_statement(&self) -> String {
        let mut statement = CqlStatementBuilder::new();
        statement.appendf(
            "REVOKE %s ON %s FROM %s",
            &[
                self.permission.as_cql(),
                self.resource.statement_fragment(),
                Cql::quoted_name(&self.grantee),
            ],
        );
        statement.render()
    }

    /// Whether a permission listing row describes this grant.
    pub fn matches_listing(&self, role: &str, resource: &str, permission: &str) -> bool {
        role == self.grantee
            && resource == self.resource.listing_identity()
            && permission == self.permission.value()
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
