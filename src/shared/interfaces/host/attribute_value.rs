use serde::{Deserialize, Serialize};

/// Tri-state attribute as decoded by the lifecycle host.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum AttributeValue<T> {
    #[default]
    Null,
    Unknown,
    Known(T),
}

impl<T> AttributeValue<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Known(value),
            None => Self::Null,
        }
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null | Self::Unknown => None,
        }
    }
}

impl AttributeValue<String> {
    /// The value when it is known and not empty.
    pub fn non_empty(&self) -> Option<&str> {
        self.known()
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl<T> From<T> for AttributeValue<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}
