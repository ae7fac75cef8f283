pub mod managed_resources;
pub mod resources;
