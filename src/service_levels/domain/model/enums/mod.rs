pub mod service_level_domain_error;
pub mod workload_type;
