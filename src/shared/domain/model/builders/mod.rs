pub mod cql_statement_builder;
