//! Configuration Module
//!
//! Loads cache configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default entry lifetime in seconds.
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// Environment variable holding the default TTL in seconds.
pub const TTL_ENV_VAR: &str = "RESOURCE_CACHE_TTL_SECONDS";

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Default TTL in seconds for writes without an explicit TTL
    pub default_ttl: u64,
}

impl CacheConfig {
    /// Creates a config with the given default TTL in seconds.
    pub fn with_ttl_seconds(default_ttl: u64) -> Self {
        Self { default_ttl }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RESOURCE_CACHE_TTL_SECONDS` - Default TTL in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var(TTL_ENV_VAR)
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TTL_SECONDS),
        }
    }

    /// Default TTL as a [`Duration`].
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.default_ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_config_with_ttl_seconds() {
        let config = CacheConfig::with_ttl_seconds(60);
        assert_eq!(config.default_ttl(), Duration::from_secs(60));
    }

    // Env mutation is process-wide, so all env cases live in one test
    #[test]
    fn test_config_from_env() {
        env::remove_var(TTL_ENV_VAR);
        assert_eq!(CacheConfig::from_env().default_ttl, 300);

        env::set_var(TTL_ENV_VAR, "120");
        assert_eq!(CacheConfig::from_env().default_ttl, 120);

        env::set_var(TTL_ENV_VAR, "not-a-number");
        assert_eq!(CacheConfig::from_env().default_ttl, 300);

        env::remove_var(TTL_ENV_VAR);
    }
}
