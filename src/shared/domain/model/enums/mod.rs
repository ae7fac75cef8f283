pub mod result_set_error;
pub mod statement_execution_error;
