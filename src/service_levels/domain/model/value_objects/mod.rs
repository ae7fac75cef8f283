pub mod service_level_name;
pub mod service_level_shares;
