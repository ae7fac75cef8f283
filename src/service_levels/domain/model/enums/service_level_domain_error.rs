use thiserror::Error;

use crate::shared::domain::model::{
    enums::result_set_error::ResultSetError, value_objects::field_violation::FieldViolation,
};

#[derive(Debug, Error)]
pub enum ServiceLevelDomainError {
    #[error("service level has {} invalid attribute(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("error {action} service level: {message}")]
    Execution {
        action: &'static str,
        message: String,
    },

    #[error("unable to read service level info: {0}")]
    Query(String),

    #[error("unexpected service level row: {0}")]
    Schema(String),
}

impl From<ResultSetError> for ServiceLevelDomainError {
    fn from(error: ResultSetError) -> Self {
        Self::Schema(error.to_string())
    }
}
