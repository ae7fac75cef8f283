use async_trait::async_trait;

use crate::grants::domain::model::{
    entities::grant::Grant,
    enums::{grant_domain_error::GrantDomainError, grant_presence::GrantPresence},
};

#[async_trait]
pub trait GrantQueryService: Send + Sync {
    async fn handle_read(&self, grant: &Grant) -> Result<GrantPresence, GrantDomainError>;
}
