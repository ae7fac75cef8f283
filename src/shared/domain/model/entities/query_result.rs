use crate::shared::domain::model::{
    enums::result_set_error::ResultSetError, value_objects::cql_value::CqlValue,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub type_name: String,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Rows returned by a single statement. Statements that return no result set
/// produce an empty value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResult {
    pub column_specs: Vec<ColumnSpec>,
    pub rows: Vec<Vec<CqlValue>>,
}

impl QueryResult {
    pub fn new(column_specs: Vec<ColumnSpec>, rows: Vec<Vec<CqlValue>>) -> Self {
        Self { column_specs, rows }
    }

    pub fn find_column(&self, name: &str) -> Result<usize, ResultSetError> {
        self.find_optional_column(name)
            .ok_or_else(|| ResultSetError::MissingColumn(name.to_string()))
    }

    pub fn find_optional_column(&self, name: &str) -> Option<usize> {
        self.column_specs.iter().position(|spec| spec.name == name)
    }

    pub fn cell(row: &[CqlValue], index: usize) -> Result<&CqlValue, ResultSetError> {
        row.get(index).ok_or(ResultSetError::MissingCell(index))
    }
}
