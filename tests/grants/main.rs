
mod grant_command_service_tests;
mod grant_endpoint_tests;
mod grant_query_service_tests;
