pub mod role_command_service_impl;
