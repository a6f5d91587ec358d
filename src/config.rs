// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup and passed
//! explicitly into the components that need it. Nothing reads the environment
//! after [`GatewayConfig::from_env`] returns.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTH_SERVICE_URL` | Base URL of the upstream authentication service | `http://localhost:5001` |
//! | `UPSTREAM_TIMEOUT_SECS` | Timeout for upstream requests, in seconds | `5` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `APP_ENV` | Deployment environment (`local`, `development`, `production`) | `local` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | per environment |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{env, time::Duration};

use url::Url;

const DEFAULT_AUTH_SERVICE_URL: &str = "http://localhost:5001";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}

/// Deployment environment selector.
///
/// Affects only logging format and whether Swagger UI is mounted; the
/// forwarding behavior is identical across environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "local" => Ok(Self::Local),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }

    /// Whether the interactive API documentation is served at `/docs`.
    pub fn mount_docs(self) -> bool {
        !matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the upstream authentication service.
    pub auth_service_url: Url,
    /// Timeout applied to every upstream request.
    pub upstream_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `true` for JSON log output, `false` for human-readable output.
    pub json_logs: bool,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let auth_service_url = env_or_default("AUTH_SERVICE_URL", DEFAULT_AUTH_SERVICE_URL);
        let auth_service_url =
            Url::parse(&auth_service_url).map_err(|e| ConfigError::Invalid {
                name: "AUTH_SERVICE_URL",
                reason: e.to_string(),
            })?;

        let upstream_timeout = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    name: "UPSTREAM_TIMEOUT_SECS",
                    reason: format!("not a number: {raw}"),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let host = env_or_default("HOST", DEFAULT_HOST);
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                reason: format!("not a port number: {raw}"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = Environment::parse(&env_or_default("APP_ENV", "local"))?;

        // Local runs default to pretty output, deployed ones to JSON.
        let json_logs = match env::var("LOG_FORMAT") {
            Ok(fmt) => fmt == "json",
            Err(_) => environment != Environment::Local,
        };

        Ok(Self {
            auth_service_url,
            upstream_timeout,
            host,
            port,
            environment,
            json_logs,
        })
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_known_values() {
        assert_eq!(Environment::parse("local").unwrap(), Environment::Local);
        assert_eq!(
            Environment::parse("development").unwrap(),
            Environment::Development
        );
        assert_eq!(
            Environment::parse("production").unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn environment_rejects_unknown_value() {
        let err = Environment::parse("staging").expect_err("staging is not configured");
        assert!(matches!(err, ConfigError::UnknownEnvironment(ref v) if v == "staging"));
    }

    #[test]
    fn docs_mounted_outside_production() {
        assert!(Environment::Local.mount_docs());
        assert!(Environment::Development.mount_docs());
        assert!(!Environment::Production.mount_docs());
    }
}
