#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{bcrypt_hash, role_data, role_row};
pub use harness::create_harness;
