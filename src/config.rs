//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::services::BirthdayPolicy;
use std::env;

/// Configuration for the address book session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Upcoming birthday algorithm (default: legacy)
    pub birthday_policy: BirthdayPolicy,

    /// Start with the demo contacts loaded (default: false)
    pub seed_demo: bool,

    /// Prompt printed before each command
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `BIRTHDAY_POLICY`: `legacy` or `calendar` (default: "legacy")
    /// - `ADDRESS_BOOK_SEED_DEMO`: Load demo contacts (default: false)
    /// - `ADDRESS_BOOK_PROMPT`: REPL prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Self::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let birthday_policy = match env::var("BIRTHDAY_POLICY") {
            Ok(val) => val
                .parse::<BirthdayPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "BIRTHDAY_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => defaults.birthday_policy,
        };

        let seed_demo = Self::parse_env_bool("ADDRESS_BOOK_SEED_DEMO", defaults.seed_demo)?;
        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or(defaults.prompt);

        Ok(Config {
            log_level,
            birthday_policy,
            seed_demo,
            prompt,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            birthday_policy: BirthdayPolicy::Legacy,
            seed_demo: false,
            prompt: "Enter a command: ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: &[&str] = &[
        "LOG_LEVEL",
        "BIRTHDAY_POLICY",
        "ADDRESS_BOOK_SEED_DEMO",
        "ADDRESS_BOOK_PROMPT",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.birthday_policy, BirthdayPolicy::Legacy);
        assert!(!config.seed_demo);
        assert_eq!(config.prompt, "Enter a command: ");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_policy, BirthdayPolicy::Legacy);
        assert!(!config.seed_demo);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("BIRTHDAY_POLICY", "calendar");
        guard.set("ADDRESS_BOOK_SEED_DEMO", "yes");
        guard.set("ADDRESS_BOOK_PROMPT", "> ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.birthday_policy, BirthdayPolicy::Calendar);
        assert!(config.seed_demo);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    #[serial]
    fn test_config_invalid_policy() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_POLICY", "monthly");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "BIRTHDAY_POLICY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_SEED_DEMO", "maybe");

        assert!(Config::parse_env_bool("ADDRESS_BOOK_SEED_DEMO", false).is_err());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }
}
