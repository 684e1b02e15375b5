use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,grocery_cart_rust=debug";

const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads `GROCERY_HOST` / `GROCERY_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("GROCERY_HOST").ok(),
            env::var("GROCERY_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match host {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "GROCERY_HOST",
                value,
            })?,
            None => defaults.host,
        };

        let port = match port {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "GROCERY_PORT",
                value,
            })?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
