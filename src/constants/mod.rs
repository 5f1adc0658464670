// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups OAuth endpoint constants and environment lookups by domain
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constants module
//!
//! Application constants organized by domain rather than a single flat file.

use std::env;

/// Service identity used in logs and health responses
pub mod service_names {
    /// Canonical service name
    pub const SFDC_CONNECT: &str = "sfdc-connect";
}

/// OAuth 2.0 endpoint paths and the fixed permission scope
pub mod oauth {
    /// Scope requested on every authorization (API access, identity,
    /// web sessions, and a refresh token)
    pub const SCOPE: &str = "api id web refresh_token";

    /// Authorization endpoint path relative to the login URL
    pub const AUTHORIZE_PATH: &str = "/services/oauth2/authorize";

    /// Token endpoint path relative to the login URL
    pub const TOKEN_PATH: &str = "/services/oauth2/token";

    /// Identity (userinfo) endpoint path relative to the instance URL
    pub const USERINFO_PATH: &str = "/services/oauth2/userinfo";

    /// Production login URL used when `SF_LOGIN_URL` is unset
    pub const DEFAULT_LOGIN_URL: &str = "https://login.salesforce.com";
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Default HTTP port when neither `HTTP_PORT` nor `PORT` is set
    pub const DEFAULT_HTTP_PORT: u16 = 3000;

    /// Get HTTP server port from environment or default
    ///
    /// `HTTP_PORT` wins over the conventional `PORT`.
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT)
    }

    /// Get Salesforce login base URL from environment or default
    #[must_use]
    pub fn login_url() -> String {
        env::var("SF_LOGIN_URL").unwrap_or_else(|_| super::oauth::DEFAULT_LOGIN_URL.to_string())
    }

    /// Get OAuth redirect URI from environment or default
    #[must_use]
    pub fn redirect_uri() -> String {
        env::var("SF_REDIRECT_URI")
            .unwrap_or_else(|_| format!("http://localhost:{}/oauth/callback", http_port()))
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    }
}
