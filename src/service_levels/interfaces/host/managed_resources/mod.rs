pub mod service_level_managed_resource;
