use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ResultSetError {
    #[error("column {0} not found in result")]
    MissingColumn(String),

    #[error("row has no cell at index {0}")]
    MissingCell(usize),

    #[error("expected {expected} value, got {actual}")]
    UnexpectedType {
        expected: &'static str,
        actual: &'static str,
    },
}
