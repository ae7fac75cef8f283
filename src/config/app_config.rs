use std::net::SocketAddr;

use validator::Validate;

pub const DEFAULT_CQL_PORT: u16 = 9042;

#[derive(Clone, Debug, Validate)]
pub struct AppConfig {
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(length(min = 1, message = "at least one scylla host must be configured"))]
    pub scylla_hosts: Vec<String>,
    pub scylla_username: Option<String>,
    pub scylla_password: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            scylla_hosts: parse_hosts(
                &std::env::var("SCYLLA_HOSTS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            ),
            scylla_username: std::env::var("SCYLLA_USERNAME").ok(),
            scylla_password: std::env::var("SCYLLA_PASSWORD").ok(),
        }
    }
}

/// Splits a comma separated host list, adding the default CQL port where missing.
pub fn parse_hosts(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(add_default_port)
        .collect()
}

pub fn add_default_port(host: &str) -> String {
    if host.parse::<SocketAddr>().is_ok() {
        return host.to_string();
    }

    if let Some((name, port)) = host.rsplit_once(':') {
        let bracketed = name.starts_with('[') && name.ends_with(']');
        if (bracketed || !name.contains(':')) && port.parse::<u16>().is_ok() {
            return host.to_string();
        }
    }

    if host.starts_with('[') && host.ends_with(']') {
        return format!("{host}:{DEFAULT_CQL_PORT}");
    }
    if host.contains(':') {
        return format!("[{host}]:{DEFAULT_CQL_PORT}");
    }

    format!("{host}:{DEFAULT_CQL_PORT}")
}
