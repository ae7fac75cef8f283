pub mod query_result;
