use async_trait::async_trait;

use crate::service_levels::domain::model::{
    commands::alter_service_level_command::AlterServiceLevelCommand,
    entities::service_level::ServiceLevel, enums::service_level_domain_error::ServiceLevelDomainError,
    value_objects::service_level_name::ServiceLevelName,
};

#[async_trait]
pub trait ServiceLevelCommandService: Send + Sync {
    async fn handle_create(&self, service_level: &ServiceLevel)
        -> Result<(), ServiceLevelDomainError>;

    async fn handle_alter(
        &self,
        command: &AlterServiceLevelCommand,
    ) -> Result<(), ServiceLevelDomainError>;

    async fn handle_drop(&self, name: &ServiceLevelName) -> Result<(), ServiceLevelDomainError>;
}
