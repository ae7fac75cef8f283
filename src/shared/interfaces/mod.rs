pub mod host;
pub mod rest;
