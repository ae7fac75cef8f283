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
    /// `<keyspace>/<permission>/<grantee>`; the grantee may contain `/`.
    pub static ref KEYSPACE_GRANT_IMPORT_ID_REGEX: regex::Regex =
        regex::Regex::new("^(?P<keyspace>[^/]+)/(?P<permission>[^/]+)/(?P<grantee>.+)$")
            .expect("valid regex");
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct KeyspaceGrantResourceData {
    #[serde(default)]
    pub keyspace: AttributeValue<String>,
    #[serde(default)]
    pub grantee: AttributeValue<String>,
    #[serde(default)]
    pub permission: AttributeValue<String>,
}

impl GrantResourceData for KeyspaceGrantResourceData {
    const TYPE_NAME: &'static str = "scylla_keyspace_grant";

    fn grant_parts(&self) -> GrantParts {
        GrantParts {
            kind: GrantableResourceKind::Keyspace,
            keyspace: self.keyspace.non_empty().map(str::to_string),
            table: None,
            grantee: self.grantee.non_empty().map(str::to_string),
            permission: self.permission.non_empty().map(str::to_string),
        }
    }

    fn from_import_id(id: &str) -> Result<Self, GrantDomainError> {
        let captures = KEYSPACE_GRANT_IMPORT_ID_REGEX
            .captures(id)
            .ok_or_else(|| {
                GrantDomainError::InvalidImportId(format!(
                    "{id:?} does not match <keyspace>/<permission>/<grantee>"
                ))
            })?;

        Ok(Self {
            keyspace: AttributeValue::Known(captures["keyspace"].to_string()),
            grantee: AttributeValue::Known(captures["grantee"].to_string()),
            permission: AttributeValue::Known(captures["permission"].to_string()),
        })
    }
}
