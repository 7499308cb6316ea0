//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `STATIC_DIR`: default `static/` beside `Cargo.toml`
    /// - `ACTIVITIES_SEED`: JSON seed file replacing the built-in roster
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when `PORT` or `BIND_ADDR` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when `PORT` or `BIND_ADDR` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.is_empty())
            .map_or_else(default_static_dir, PathBuf::from);
        let seed_path = lookup("ACTIVITIES_SEED")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self { bind_addr, port, static_dir, seed_path })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
