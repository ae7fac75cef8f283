pub mod role_command_service;
pub mod role_query_service;
