//! Server configuration from the environment
//!
//! Reads `.env` (if present) and then:
//! - AUTOPROMPT_HOST (default 0.0.0.0)
//! - AUTOPROMPT_PORT (default 8080)
//! - AUTOPROMPT_API_KEY (optional, enables bearer auth)

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: None,
        }
    }
}

impl ServerConfig {
    /// Load from process environment, after applying `.env`
    pub fn from_env() -> Result<Self> {
        if dotenvy::dotenv().is_ok() {
            tracing::debug!("Loaded .env");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("AUTOPROMPT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("AUTOPROMPT_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid AUTOPROMPT_PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let api_key = lookup("AUTOPROMPT_API_KEY").filter(|k| !k.is_empty());

        Ok(Self {
            host,
            port,
            api_key,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("AUTOPROMPT_HOST", "127.0.0.1"),
            ("AUTOPROMPT_PORT", "9000"),
            ("AUTOPROMPT_API_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_empty_api_key_disables_auth() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("AUTOPROMPT_API_KEY", "")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("AUTOPROMPT_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("AUTOPROMPT_PORT"));
    }
}
