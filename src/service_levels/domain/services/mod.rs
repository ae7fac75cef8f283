pub mod service_level_command_service;
pub mod service_level_query_service;
