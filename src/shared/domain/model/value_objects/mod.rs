pub mod cql;
pub mod cql_value;
pub mod field_violation;
