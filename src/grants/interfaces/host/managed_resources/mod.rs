pub mod grant_managed_resource;
