use crate::{
    grants::domain::model::{
        enums::grantable_resource::GrantableResourceKind,
        value_objects::permission_vocabulary::PermissionVocabulary,
    },
    shared::domain::model::value_objects::{cql::Cql, field_violation::FieldViolation},
};

/// A permission name accepted by a resource kind, stored upper-cased.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Permission(String);

impl Permission {
    pub fn new(value: &str, kind: GrantableResourceKind) -> Result<Self, FieldViolation> {
        let vocabulary = PermissionVocabulary::for_kind(kind);
        if !vocabulary.contains(value) {
            return Err(FieldViolation::new(
                "permission",
                "Unsupported permission",
                format!("Permission must be one of {}", vocabulary.names().join(", ")),
            ));
        }

        Ok(Self(PermissionVocabulary::normalize(value)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn as_cql(&self) -> Cql {
        Cql::raw(self.0.clone())
    }
}
