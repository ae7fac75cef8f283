use thiserror::Error;

use crate::shared::domain::model::{
    enums::result_set_error::ResultSetError, value_objects::field_violation::FieldViolation,
};

#[derive(Debug, Error)]
pub enum GrantDomainError {
    #[error("grant has {} invalid attribute(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("{statement}\n\n{message}")]
    Execution { statement: String, message: String },

    #[error("unexpected permission listing: {0}")]
    Schema(String),

    #[error("grant does not support update, only recreate")]
    UpdateNotSupported,

    #[error("invalid import identifier: {0}")]
    InvalidImportId(String),
}

impl From<ResultSetError> for GrantDomainError {
    fn from(error: ResultSetError) -> Self {
        Self::Schema(error.to_string())
    }
}
