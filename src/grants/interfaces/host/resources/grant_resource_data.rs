use serde::{Serialize, de::DeserializeOwned};

use crate::grants::domain::model::{
    entities::grant::GrantParts, enums::grant_domain_error::GrantDomainError,
};

/// Host-side attribute set of one grant resource type.
pub trait GrantResourceData:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const TYPE_NAME: &'static str;

    fn grant_parts(&self) -> GrantParts;

    /// Rebuilds the attributes from a composite import identifier.
    fn from_import_id(id: &str) -> Result<Self, GrantDomainError>;
}
