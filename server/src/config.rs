//! Server configuration parsed from environment variables.
//!
//! Values are read through a lookup function so tests can feed a map instead
//! of mutating the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_FEEDBACK_INBOX_CAP: usize = 500;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

/// Credentials for forwarding feedback through Resend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub feedback_inbox_cap: usize,
    pub resend: Option<ResendConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            feedback_inbox_cap: DEFAULT_FEEDBACK_INBOX_CAP,
            resend: None,
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `FEEDBACK_INBOX_CAP`: default 500
    /// - `RESEND_API_KEY`, `RESEND_FROM`, `FEEDBACK_TO`: feedback forwarding,
    ///   enabled only when all three are set
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = env_parse(&lookup, "PORT", DEFAULT_PORT)?;
        let bind_addr = env_parse(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let feedback_inbox_cap = env_parse(&lookup, "FEEDBACK_INBOX_CAP", DEFAULT_FEEDBACK_INBOX_CAP)?;
        if feedback_inbox_cap == 0 {
            return Err(ConfigError::Zero { key: "FEEDBACK_INBOX_CAP" });
        }

        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let resend = match (non_empty("RESEND_API_KEY"), non_empty("RESEND_FROM"), non_empty("FEEDBACK_TO")) {
            (Some(api_key), Some(from), Some(to)) => Some(ResendConfig { api_key, from, to }),
            _ => None,
        };

        Ok(Self { bind_addr, port, feedback_inbox_cap, resend })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn env_parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
