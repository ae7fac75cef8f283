pub mod grant_command_service_impl;
