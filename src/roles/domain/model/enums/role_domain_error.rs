use thiserror::Error;

use crate::shared::domain::model::{
    enums::result_set_error::ResultSetError, value_objects::field_violation::FieldViolation,
};

/// Never carries statement text, since role statements may contain passwords.
#[derive(Debug, Error)]
pub enum RoleDomainError {
    #[error("role has {} invalid attribute(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("error {action} role: {message}")]
    Execution {
        action: &'static str,
        message: String,
    },

    #[error("unable to read role info: {0}")]
    Query(String),

    #[error("unexpected role row: {0}")]
    Schema(String),
}

impl From<ResultSetError> for RoleDomainError {
    fn from(error: ResultSetError) -> Self {
        Self::Schema(error.to_string())
    }
}
