// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management
//!
//! All configuration comes from environment variables, with a best-effort
//! `.env` load first. Credentials are required at startup; everything else
//! has a sensible default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

use crate::constants::env_config;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Salesforce OAuth configuration
    pub salesforce: SalesforceConfig,
}

/// Salesforce OAuth client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesforceConfig {
    /// Login base URL (production or sandbox)
    pub login_url: String,
    /// Connected-app consumer key
    pub client_id: String,
    /// Connected-app consumer secret
    pub client_secret: String,
    /// Redirect URI registered on the connected app
    pub redirect_uri: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a required credential variable is missing or
    /// validation fails.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = ServerConfig {
            http_port: env_config::http_port(),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            salesforce: SalesforceConfig {
                login_url: env_config::login_url(),
                client_id: env::var("SF_CLIENT_ID").context("SF_CLIENT_ID not set")?,
                client_secret: env::var("SF_CLIENT_SECRET").context("SF_CLIENT_SECRET not set")?,
                redirect_uri: env_config::redirect_uri(),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error on values that cannot work at all; suspicious but
    /// workable values only warn.
    pub fn validate(&self) -> Result<()> {
        if self.salesforce.client_id.is_empty() {
            return Err(anyhow::anyhow!("SF_CLIENT_ID must not be empty"));
        }
        if self.salesforce.client_secret.is_empty() {
            return Err(anyhow::anyhow!("SF_CLIENT_SECRET must not be empty"));
        }

        if url::Url::parse(&self.salesforce.login_url).is_err() {
            warn!(
                "SF_LOGIN_URL does not parse as a URL: {}",
                self.salesforce.login_url
            );
        }
        if url::Url::parse(&self.salesforce.redirect_uri).is_err() {
            warn!(
                "SF_REDIRECT_URI does not parse as a URL: {}",
                self.salesforce.redirect_uri
            );
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Salesforce Connect Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Login URL: {}\n\
             - Redirect URI: {}\n\
             - Client ID: {}",
            self.http_port,
            self.log_level,
            self.salesforce.login_url,
            self.salesforce.redirect_uri,
            self.salesforce.client_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            http_port: 3000,
            log_level: LogLevel::Info,
            salesforce: SalesforceConfig {
                login_url: "https://login.salesforce.com".to_string(),
                client_id: "client".to_string(),
                client_secret: "secret".to_string(),
                redirect_uri: "http://localhost:3000/oauth/callback".to_string(),
            },
        }
    }

    #[test]
    fn log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
    }

    #[test]
    fn validate_rejects_empty_credentials() {
        let mut config = test_config();
        config.salesforce.client_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn summary_excludes_secret() {
        let config = test_config();
        let summary = config.summary();
        assert!(summary.contains("client"));
        assert!(!summary.contains("secret"));
    }
}
