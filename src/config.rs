//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is read first, if present.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TOKEN_ENV` - Shared token required to create products. When unset or
//!   empty, product creation is always rejected.
//! - `SEED_STORE` - Preload the sample products (default: `true`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Value the `token` header must carry on protected routes.
    pub api_token: Option<String>,
    /// When true, the store starts with the sample catalogue.
    pub seed_store: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SEED_STORE` is not a boolean.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let api_token = env::var("TOKEN_ENV").ok().filter(|t| !t.is_empty());

        let seed_store = match env::var("SEED_STORE") {
            Ok(v) => parse_bool(&v).with_context(|| format!("Invalid SEED_STORE value '{v}'"))?,
            Err(_) => true,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            api_token,
            seed_store,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Returns whether product creation can ever be authorized.
    pub fn is_auth_configured(&self) -> bool {
        self.api_token.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Seed store: {}", self.seed_store);

        if self.is_auth_configured() {
            tracing::info!("  API token: set");
        } else {
            tracing::warn!("  API token: not set, product creation will be rejected");
        }
    }
}

/// Parses `true`/`false`/`1`/`0`, case-insensitively.
fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => anyhow::bail!("expected 'true' or 'false'"),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            api_token: Some("secret".to_string()),
            seed_store: true,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();

        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("TOKEN_ENV");
            env::remove_var("SEED_STORE");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.log_format, "text");
        assert!(config.api_token.is_none());
        assert!(config.seed_store);
        assert!(!config.is_auth_configured());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("TOKEN_ENV", "s3cret");
            env::set_var("SEED_STORE", "false");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.api_token.as_deref(), Some("s3cret"));
        assert!(!config.seed_store);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("TOKEN_ENV");
            env::remove_var("SEED_STORE");
        }
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("yes").is_err());
    }

    #[test]
    #[serial]
    fn test_invalid_seed_store_rejected() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SEED_STORE", "maybe");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("SEED_STORE");
        }
    }

    #[test]
    #[serial]
    fn test_empty_token_treated_as_unset() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("TOKEN_ENV", "");
        }

        let config = Config::from_env().unwrap();
        assert!(config.api_token.is_none());

        unsafe {
            env::remove_var("TOKEN_ENV");
        }
    }
}
