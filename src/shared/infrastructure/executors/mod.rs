#[cfg(feature = "scylla-driver")]
pub mod scylla;
pub mod statement_executor;
