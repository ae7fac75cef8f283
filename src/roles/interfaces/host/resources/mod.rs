pub mod role_resource_data;
