use async_trait::async_trait;

use crate::grants::domain::model::{
    entities::grant::Grant, enums::grant_domain_error::GrantDomainError,
};

#[async_trait]
pub trait GrantCommandService: Send + Sync {
    async fn handle_create(&self, grant: &Grant) -> Result<(), GrantDomainError>;

    /// Revoking an absent grant is accepted by the cluster.
    async fn handle_delete(&self, grant: &Grant) -> Result<(), GrantDomainError>;
}
