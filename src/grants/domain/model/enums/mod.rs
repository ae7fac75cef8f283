pub mod grant_domain_error;
pub mod grant_presence;
pub mod grantable_resource;
