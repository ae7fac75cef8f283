use async_trait::async_trait;

use crate::roles::domain::model::{
    entities::role::RoleAttributes, enums::role_domain_error::RoleDomainError,
    value_objects::role_name::RoleName,
};

#[async_trait]
pub trait RoleQueryService: Send + Sync {
    async fn handle_find(&self, name: &RoleName)
    -> Result<Option<RoleAttributes>, RoleDomainError>;
}
