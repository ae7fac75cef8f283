use async_trait::async_trait;

use crate::roles::domain::model::{
    commands::alter_role_command::AlterRoleCommand, entities::role::Role,
    enums::role_domain_error::RoleDomainError, value_objects::role_name::RoleName,
};

#[async_trait]
pub trait RoleCommandService: Send + Sync {
    async fn handle_create(&self, role: &Role) -> Result<(), RoleDomainError>;

    /// A command without changes issues no statement.
    async fn handle_alter(&self, command: &AlterRoleCommand) -> Result<(), RoleDomainError>;

    async fn handle_drop(&self, name: &RoleName) -> Result<(), RoleDomainError>;
}
