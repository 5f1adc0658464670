// ABOUTME: OAuth module defining the provider capability and flow types
// ABOUTME: Centralizes token/identity types and the error taxonomy of the flow
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # OAuth Flow Module
//!
//! Types and the provider capability for the authorization-code flow. The
//! actual token exchange and identity lookup live behind the
//! [`IdentityProvider`] trait so the HTTP layer never talks to the wire
//! directly and tests can inject a scripted double.

pub mod salesforce;

use serde::{Deserialize, Serialize};

/// Credential set produced by a successful code exchange
///
/// Held only in process memory for the lifetime of the process, replaced
/// wholesale by each new authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    /// Credential used to call the provider's APIs
    pub access_token: String,
    /// Long-lived credential used to obtain new access tokens
    pub refresh_token: String,
    /// Base URL of the org the authenticated identity belongs to
    pub instance_url: String,
}

/// Identity of the authenticated user, as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-side user identifier
    pub user_id: String,
    /// Identifier of the org the user belongs to
    pub organization_id: String,
    /// Login username
    pub username: String,
    /// Human-readable display name
    pub display_name: String,
}

/// OAuth error types
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// Provider rejected the code, or the exchange call failed on the wire
    #[error("Token exchange failed: {0}")]
    ExchangeFailed(String),

    /// Post-exchange identity lookup failed
    #[error("Identity lookup failed: {0}")]
    IdentityFailed(String),

    /// Configuration was malformed in a way only detectable at use time
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Capability required from an OAuth provider implementation
///
/// Three operations cover the whole flow: build the authorization URL,
/// exchange the callback code, and verify the new credentials with an
/// identity lookup.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Get provider name
    fn name(&self) -> &str;

    /// Build the authorization URL the user is redirected to
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::ConfigurationError`] if the configured login
    /// URL cannot form a valid authorization URL.
    fn authorization_url(&self) -> Result<String, OAuthError>;

    /// Exchange an authorization code for a credential set
    async fn exchange_code(&self, code: &str) -> Result<TokenSet, OAuthError>;

    /// Look up the identity the credential set belongs to
    async fn fetch_identity(&self, tokens: &TokenSet) -> Result<Identity, OAuthError>;
}
