pub mod grant_command_service;
pub mod grant_query_service;
