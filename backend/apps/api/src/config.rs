//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use std::env;
use std::net::SocketAddr;

use anyhow::Context;

/// Default bind address
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Default CORS origins for a local frontend
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Process-level configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (`QUOTES_ADDR`)
    pub addr: SocketAddr,
    /// Allowed CORS origins (`FRONTEND_ORIGINS`, comma separated)
    pub frontend_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            frontend_origins: split_origins(DEFAULT_FRONTEND_ORIGINS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("QUOTES_ADDR").ok(),
            env::var("FRONTEND_ORIGINS").ok(),
        )
    }

    fn from_values(addr: Option<String>, origins: Option<String>) -> anyhow::Result<Self> {
        let addr = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("QUOTES_ADDR is not a socket address: {addr:?}"))?;

        let frontend_origins =
            split_origins(origins.as_deref().unwrap_or(DEFAULT_FRONTEND_ORIGINS));

        Ok(Self {
            addr,
            frontend_origins,
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_values(None, None).unwrap();
        assert_eq!(config.addr, ServerConfig::default().addr);
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_values(
            Some("127.0.0.1:9000".to_string()),
            Some(" https://quotes.example , ,https://admin.example".to_string()),
        )
        .unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:9000");
        assert_eq!(
            config.frontend_origins,
            vec!["https://quotes.example", "https://admin.example"]
        );
    }

    #[test]
    fn test_bad_addr_is_error() {
        assert!(ServerConfig::from_values(Some(":8080".to_string()), None).is_err());
    }
}
