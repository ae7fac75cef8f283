pub mod alter_service_level_command;
