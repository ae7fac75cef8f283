pub mod role_managed_resource;
