//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. Capacity and TTL are fixed at process start; nothing here is
/// reconfigurable at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of live cache entries
    pub capacity: usize,
    /// Maximum entry age in milliseconds
    pub ttl_ms: u64,
    /// Payload byte budget for the memory watchdog; None disables it
    pub memory_limit_bytes: Option<usize>,
    /// Memory watchdog check interval in milliseconds
    pub memory_check_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 60000)
    /// - `MEMORY_LIMIT_BYTES` - Watchdog byte budget (default: unset, disabled)
    /// - `MEMORY_CHECK_INTERVAL_MS` - Watchdog check interval (default: 1000)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            memory_limit_bytes: env::var("MEMORY_LIMIT_BYTES")
                .ok()
                .and_then(|v| v.parse().ok()),
            memory_check_interval_ms: env::var("MEMORY_CHECK_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 100,
            ttl_ms: 60_000,
            memory_limit_bytes: None,
            memory_check_interval_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 100);
        assert_eq!(config.ttl_ms, 60_000);
        assert_eq!(config.memory_limit_bytes, None);
        assert_eq!(config.memory_check_interval_ms, 1000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("MEMORY_LIMIT_BYTES");
        env::remove_var("MEMORY_CHECK_INTERVAL_MS");

        let config = Config::from_env();
        assert_eq!(config.capacity, 100);
        assert_eq!(config.ttl_ms, 60_000);
        assert_eq!(config.memory_limit_bytes, None);
        assert_eq!(config.memory_check_interval_ms, 1000);
    }
}
