//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Address the API server listens on (`API_BIND_ADDR`).
pub fn bind_addr() -> Result<SocketAddr, ConfigError> {
    parse_setting(
        "API_BIND_ADDR",
        std::env::var("API_BIND_ADDR").ok(),
        "socket address",
        SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
    )
}

/// Largest request body an endpoint will read (`API_MAX_BODY_BYTES`).
pub fn max_body_bytes() -> Result<usize, ConfigError> {
    parse_setting(
        "API_MAX_BODY_BYTES",
        std::env::var("API_MAX_BODY_BYTES").ok(),
        "byte count",
        DEFAULT_MAX_BODY_BYTES,
    )
}

fn parse_setting<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_falls_back_to_default() {
        let parsed: usize = parse_setting("X", None, "byte count", 7).unwrap();
        assert_eq!(parsed, 7);
    }

    #[test]
    fn present_value_is_parsed() {
        let parsed: SocketAddr = parse_setting(
            "X",
            Some(" 127.0.0.1:8080 ".to_string()),
            "socket address",
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        )
        .unwrap();
        assert_eq!(parsed, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn malformed_value_is_an_error() {
        let err =
            parse_setting::<usize>("API_MAX_BODY_BYTES", Some("lots".into()), "byte count", 1)
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"API_MAX_BODY_BYTES must be a valid byte count, got "lots""#
        );
    }
}
