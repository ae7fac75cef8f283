use crate::shared::domain::model::enums::result_set_error::ResultSetError;

/// A CQL cell as returned by the executor, also used for bound values.
#[derive(Clone, Debug, PartialEq)]
pub enum CqlValue {
    Null,
    Text(String),
    Boolean(bool),
    Int(i32),
    BigInt(i64),
    Duration {
        months: i32,
        days: i32,
        nanoseconds: i64,
    },
}

impl CqlValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::BigInt(_) => "bigint",
            Self::Duration { .. } => "duration",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Result<&str, ResultSetError> {
        match self {
            Self::Text(value) => Ok(value),
            other => Err(ResultSetError::UnexpectedType {
                expected: "text",
                actual: other.type_name(),
            }),
        }
    }

    pub fn as_boolean(&self) -> Result<bool, ResultSetError> {
        match self {
            Self::Boolean(value) => Ok(*value),
            other => Err(ResultSetError::UnexpectedType {
                expected: "boolean",
                actual: other.type_name(),
            }),
        }
    }

    pub fn as_int32(&self) -> Result<i32, ResultSetError> {
        match self {
            Self::Int(value) => Ok(*value),
            other => Err(ResultSetError::UnexpectedType {
                expected: "int",
                actual: other.type_name(),
            }),
        }
    }

    /// Returns `(months, days, nanoseconds)`.
    pub fn as_duration(&self) -> Result<(i32, i32, i64), ResultSetError> {
        match self {
            Self::Duration {
                months,
                days,
                nanoseconds,
            } => Ok((*months, *days, *nanoseconds)),
            other => Err(ResultSetError::UnexpectedType {
                expected: "duration",
                actual: other.type_name(),
            }),
        }
    }
}

impl From<&str> for CqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CqlValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
