use crate::shared::domain::model::{
    builders::cql_statement_builder::CqlStatementBuilder, value_objects::cql::Cql,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GrantableResourceKind {
    Keyspace,
    Table,
}

impl GrantableResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyspace => "keyspace",
            Self::Table => "table",
        }
    }
}

/// An object permissions can be granted on.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum GrantableResource {
    Keyspace { keyspace: String },
    Table { keyspace: String, table: String },
}

impl GrantableResource {
    pub fn keyspace(keyspace: impl Into<String>) -> Self {
        Self::Keyspace {
            keyspace: keyspace.into(),
        }
    }

    pub fn table(keyspace: impl Into<String>, table: impl Into<String>) -> Self {
        Self::Table {
            keyspace: keyspace.into(),
            table: table.into(),
        }
    }

    pub fn kind(&self) -> GrantableResourceKind {
        match self {
            Self::Keyspace { .. } => GrantableResourceKind::Keyspace,
            Self::Table { .. } => GrantableResourceKind::Table,
        }
    }

    /// The object clause of GRANT, LIST and REVOKE, e.g. `KEYSPACE "ks"` or `"ks"."tbl"`.
    pub fn statement_fragment(&self) -> Cql {
        let mut fragment = CqlStatementBuilder::new();
        match self {
            Self::Keyspace { keyspace } => {
                fragment.appendf("KEYSPACE %s", &[Cql::quoted_name(keyspace)]);
            }
            Self::Table { keyspace, table } => {
                fragment.appendf(
                    "%s.%s",
                    &[Cql::quoted_name(keyspace), Cql::quoted_name(table)],
                );
            }
        }
        Cql::raw(fragment.render())
    }

    /// How `LIST ... PERMISSION` reports this object: lowercased, bracketed and type-tagged.
    pub fn listing_identity(&self) -> String {
        match self {
            Self::Keyspace { keyspace } => format!("<keyspace {}>", keyspace.to_lowercase()),
            Self::Table { keyspace, table } => format!(
                "<table {}.{}>",
                keyspace.to_lowercase(),
                table.to_lowercase()
            ),
        }
    }
}
