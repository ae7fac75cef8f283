pub mod service_level;
