pub mod role_domain_error;
