//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::{Instrumentation, Stage};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Count every `Cache.store` call
    pub count_calls: bool,
    /// Record argument/result history for every `Cache.store` call
    pub call_history: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_COUNT_CALLS` - Enable the call counter (default: true)
    /// - `CACHE_CALL_HISTORY` - Enable call history (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            count_calls: env::var("CACHE_COUNT_CALLS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.count_calls),
            call_history: env::var("CACHE_CALL_HISTORY")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.call_history),
        }
    }

    /// Builds the instrumentation pipeline, counter outermost.
    pub fn instrumentation(&self) -> Instrumentation {
        let mut instrumentation = Instrumentation::none();
        if self.count_calls {
            instrumentation = instrumentation.with(Stage::CountCalls);
        }
        if self.call_history {
            instrumentation = instrumentation.with(Stage::CallHistory);
        }
        instrumentation
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            count_calls: true,
            call_history: true,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert!(config.count_calls);
        assert!(config.call_history);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_COUNT_CALLS");
        env::remove_var("CACHE_CALL_HISTORY");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert!(config.count_calls);
        assert!(config.call_history);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_instrumentation_order() {
        let config = Config::default();
        assert_eq!(
            config.instrumentation().stages(),
            &[Stage::CountCalls, Stage::CallHistory]
        );

        let config = Config {
            count_calls: false,
            ..Config::default()
        };
        assert_eq!(config.instrumentation().stages(), &[Stage::CallHistory]);
    }
}
