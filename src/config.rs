//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of questions the cache can hold
    pub max_entries: usize,
    /// Optional TTL in seconds for cached questions, None = no expiry
    pub cache_ttl: Option<u64>,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cached questions (default: 100)
    /// - `CACHE_TTL` - Cache TTL in seconds, unset or 0 disables expiry
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary key lookup. Unparsable values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            max_entries: parse_or(&lookup, "CACHE_MAX_ENTRIES", defaults.max_entries),
            cache_ttl: Some(parse_or(&lookup, "CACHE_TTL", 0u64)).filter(|&ttl| ttl > 0),
            cleanup_interval: parse_or(&lookup, "CLEANUP_INTERVAL", defaults.cleanup_interval)
                .max(1),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 100,
            cache_ttl: None,
            cleanup_interval: 60,
            server_port: 5000,
        }
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 100);
        assert_eq!(config.cache_ttl, None);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.server_port, 5000);
    }

    #[test]
    fn test_config_empty_lookup_uses_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CACHE_MAX_ENTRIES", "250"),
            ("CACHE_TTL", "30"),
            ("CLEANUP_INTERVAL", "5"),
            ("SERVER_PORT", "8080"),
        ]));

        assert_eq!(config.max_entries, 250);
        assert_eq!(config.cache_ttl, Some(30));
        assert_eq!(config.cleanup_interval, 5);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_config_zero_ttl_disables_expiry() {
        let config = Config::from_lookup(lookup_from(&[("CACHE_TTL", "0")]));
        assert_eq!(config.cache_ttl, None);
    }

    #[test]
    fn test_config_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("CACHE_MAX_ENTRIES", "lots"),
            ("SERVER_PORT", "99999"),
            ("CLEANUP_INTERVAL", "0"),
        ]));

        assert_eq!(config.max_entries, 100);
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cleanup_interval, 1);
    }
}
