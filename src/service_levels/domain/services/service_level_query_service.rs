use async_trait::async_trait;

use crate::service_levels::domain::model::{
    entities::service_level::ServiceLevelAttributes,
    enums::service_level_domain_error::ServiceLevelDomainError,
    value_objects::service_level_name::ServiceLevelName,
};

#[async_trait]
pub trait ServiceLevelQueryService: Send + Sync {
    /// `None` when the service level does not exist.
    async fn handle_find(
        &self,
        name: &ServiceLevelName,
    ) -> Result<Option<ServiceLevelAttributes>, ServiceLevelDomainError>;
}
