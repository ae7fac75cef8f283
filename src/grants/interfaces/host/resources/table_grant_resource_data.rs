use serde::{Deserialize, Serialize};

use crate::{
    grants::{
        domain::model::{
            entities::grant::GrantParts,
            enums::{
                grant_domain_error::GrantDomainError, grantable_resource::GrantableResourceKind,
            },
        },
        interfaces::host::resources::grant_resource_data::GrantResourceData,
    },
    shared::interfaces::host::attribute_value::AttributeValue,
};

lazy_static::lazy_static! {
    pub static ref TABLE_GRANT_IMPORT_ID_REGEX: regex::Regex = regex::Regex::new(
        "^(?P<keyspace>[^/]+)/(?P<table>[^/]+)/(?P<permission>[^/]+)/(?P<grantee>.+)$"
    )
    .expect("valid regex");
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableGrantResourceData {
    #[serde(default)]
    pub keyspace: AttributeValue<String>,
    #[serde(default)]
    pub table: AttributeValue<String>,
    #[serde(default)]
    pub grantee: AttributeValue<String>,
    #[serde(default)]
    pub permission: AttributeValue<String>,
}

impl GrantResourceData for TableGrantResourceData {
    const TYPE_NAME: &'static str = "scylla_table_grant";

    fn grant_parts(&self) -> GrantParts {
        GrantParts {
            kind: GrantableResourceKind::Table,
            keyspace: self.keyspace.non_empty().map(str::to_string),
            table: self.table.non_empty().map(str::to_string),
            grantee: self.grantee.non_empty().map(str::to_string),
            permission: self.permission.non_empty().map(str::to_string),
        }
    }

    fn from_import_id(id: &str) -> Result<Self, GrantDomainError> {
        let captures = TABLE_GRANT_IMPORT_ID_REGEX.captures(id).ok_or_else(|| {
            GrantDomainError::InvalidImportId(format!(
                "{id:?} does not match <keyspace>/<table>/<permission>/<grantee>"
            ))
        })?;

        Ok(Self {
            keyspace: AttributeValue::Known(captures["keyspace"].to_string()),
            table: AttributeValue::Known(captures["table"].to_string()),
            grantee: AttributeValue::Known(captures["grantee"].to_string()),
            permission: AttributeValue::Known(captures["permission"].to_string()),
        })
    }
}
