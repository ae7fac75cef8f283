pub mod alter_role_command;
