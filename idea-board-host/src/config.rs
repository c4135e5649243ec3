//! Host configuration, read once at startup.

use crate::error::HostError;
use idea_board::ClientConfig;
use idea_board::config::API_URL_ENV;
use std::net::SocketAddr;

/// Environment variable with the address to listen on.
pub const ADDR_ENV: &str = "IDEA_BOARD_ADDR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
    /// Handed to every browser that loads the page.
    pub client: ClientConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup, so tests don't touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let raw_addr = lookup(ADDR_ENV)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| HostError::Config {
                var: ADDR_ENV,
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let client = ClientConfig::from_override(lookup(API_URL_ENV).as_deref());

        Ok(Self { addr, client })
    }
}
