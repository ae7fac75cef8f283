use std::collections::BTreeSet;

use lazy_static::lazy_static;

use crate::grants::domain::model::enums::grantable_resource::GrantableResourceKind;

/// Permission names one kind of grantable resource accepts, in canonical upper case.
#[derive(Debug)]
pub struct PermissionVocabulary {
    names: BTreeSet<&'static str>,
}

lazy_static! {
    static ref KEYSPACE_PERMISSIONS: PermissionVocabulary = PermissionVocabulary::new(&[
        "CREATE",
        "ALTER",
        "DROP",
        "SELECT",
        "MODIFY",
        "AUTHORIZE",
        "DESCRIBE",
    ]);
    static ref TABLE_PERMISSIONS: PermissionVocabulary = PermissionVocabulary::new(&[
        "CREATE",
        "ALTER",
        "DROP",
        "SELECT",
        "MODIFY",
        "AUTHORIZE",
        "DESCRIBE",
    ]);
}

impl PermissionVocabulary {
    fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.iter().copied().collect(),
        }
    }

    pub fn for_kind(kind: GrantableResourceKind) -> &'static Self {
        match kind {
            GrantableResourceKind::Keyspace => &*KEYSPACE_PERMISSIONS,
            GrantableResourceKind::Table => &*TABLE_PERMISSIONS,
        }
    }

    pub fn normalize(value: &str) -> String {
        value.to_uppercase()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, value: &str) -> bool {
        self.names.contains(Self::normalize(value).as_str())
    }

    /// Sorted permission names.
    pub fn names(&self) -> Vec<&'static str> {
        self.names.iter().copied().collect()
    }
}
