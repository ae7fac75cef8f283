pub mod scylla_statement_executor_impl;
