pub mod role_name;
