pub mod service_level_resource_data;
