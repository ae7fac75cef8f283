pub mod service_level_command_service_impl;
