pub mod config;
pub mod grants;
pub mod roles;
pub mod service_levels;
pub mod shared;
