//! Service settings from environment variables (a `.env` file is honoured by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/pedidos";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_REQUEST_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Largest accepted request body, in bytes.
    pub request_body_limit: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unset or blank variables take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_var("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections = parse_var("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), Some(DEFAULT_MAX_CONNECTIONS))?;
        let request_body_limit = parse_var(
            "REQUEST_BODY_LIMIT",
            get("REQUEST_BODY_LIMIT"),
            Some(DEFAULT_REQUEST_BODY_LIMIT),
        )?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        if request_body_limit == 0 {
            return Err(ConfigError::Invalid {
                var: "REQUEST_BODY_LIMIT",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            request_body_limit,
        })
    }
}

fn parse_var<T>(var: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
        None => default.ok_or_else(|| ConfigError::Invalid {
            var,
            value: String::new(),
            reason: "no default".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.request_body_limit, DEFAULT_REQUEST_BODY_LIMIT);
    }

    #[test]
    fn overrides_and_blank_values() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://db:5432/loja"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", " 12 "),
            ("REQUEST_BODY_LIMIT", ""),
        ])
        .unwrap();
        assert_eq!(s.database_url, "postgres://db:5432/loja");
        assert_eq!(s.bind_addr.port(), 8080);
        assert_eq!(s.max_connections, 12);
        assert_eq!(s.request_body_limit, DEFAULT_REQUEST_BODY_LIMIT);
    }

    #[test]
    fn invalid_value_names_variable() {
        let err = settings(&[("BIND_ADDR", "not-an-addr")]).unwrap_err();
        let ConfigError::Invalid { var, value, .. } = err;
        assert_eq!(var, "BIND_ADDR");
        assert_eq!(value, "not-an-addr");
    }

    #[test]
    fn zero_pool_is_rejected() {
        let err = settings(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }
}
