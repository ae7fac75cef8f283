use serde::{Deserialize, Serialize};

use crate::{
    roles::domain::model::entities::role::RoleParts,
    shared::interfaces::host::attribute_value::AttributeValue,
};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoleResourceData {
    #[serde(default)]
    pub name: AttributeValue<String>,
    /// Computed, always equal to `name`.
    #[serde(default)]
    pub id: AttributeValue<String>,
    #[serde(default)]
    pub login: AttributeValue<bool>,
    #[serde(default)]
    pub superuser: AttributeValue<bool>,
    #[serde(default)]
    pub password: AttributeValue<String>,
}

impl RoleResourceData {
    pub fn role_parts(&self) -> RoleParts {
        RoleParts {
            name: self.name.non_empty().map(str::to_string),
            login: self.login.known().copied(),
            superuser: self.superuser.known().copied(),
            password: self.password.known().cloned(),
        }
    }

    /// The identifier of an already created role, falling back to its name.
    pub fn role_id(&self) -> Option<&str> {
        self.id.non_empty().or_else(|| self.name.non_empty())
    }
}
