// ABOUTME: Salesforce implementation of the OAuth provider capability
// ABOUTME: Performs the authorize-URL build, code exchange, and userinfo lookup
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Salesforce OAuth Provider
//!
//! Concrete [`IdentityProvider`] over the Salesforce web-server flow
//! endpoints: `/services/oauth2/authorize`, `/services/oauth2/token`, and
//! `/services/oauth2/userinfo`.

use super::{Identity, IdentityProvider, OAuthError, TokenSet};
use crate::config::environment::SalesforceConfig;
use crate::constants::oauth;
use serde::Deserialize;
use url::Url;

/// Salesforce OAuth provider
pub struct SalesforceProvider {
    login_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    http: reqwest::Client,
}

/// Salesforce token response format
#[derive(Debug, Deserialize)]
struct SalesforceTokenResponse {
    access_token: String,
    refresh_token: String,
    instance_url: String,
}

/// Salesforce OAuth error response format
#[derive(Debug, Deserialize)]
struct SalesforceErrorResponse {
    error: String,
    error_description: Option<String>,
}

/// Salesforce userinfo response format
#[derive(Debug, Deserialize)]
struct SalesforceUserInfo {
    user_id: String,
    organization_id: String,
    preferred_username: String,
    name: String,
}

impl SalesforceProvider {
    /// Create a provider from the loaded configuration
    #[must_use]
    pub fn new(config: &SalesforceConfig) -> Self {
        Self {
            login_url: config.login_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// Turn a non-2xx token/userinfo body into a readable error message
    fn error_text(body: &str) -> String {
        match serde_json::from_str::<SalesforceErrorResponse>(body) {
            Ok(err) => err
                .error_description
                .map_or_else(|| err.error.clone(), |desc| format!("{}: {desc}", err.error)),
            Err(_) => body.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for SalesforceProvider {
    fn name(&self) -> &str {
        "salesforce"
    }

    fn authorization_url(&self) -> Result<String, OAuthError> {
        // A malformed SF_LOGIN_URL is only detectable here; surface it as a
        // configuration error rather than redirecting to garbage.
        Url::parse(&self.login_url).map_err(|e| {
            OAuthError::ConfigurationError(format!("invalid login URL {}: {e}", self.login_url))
        })?;

        Ok(format!(
            "{}{}?response_type=code&client_id={}&redirect_uri={}&scope={}",
            self.login_url,
            oauth::AUTHORIZE_PATH,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(oauth::SCOPE),
        ))
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenSet, OAuthError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self
            .http
            .post(format!("{}{}", self.login_url, oauth::TOKEN_PATH))
            .form(&params)
            .send()
            .await
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(OAuthError::ExchangeFailed(Self::error_text(&response_text)));
        }

        let token_response: SalesforceTokenResponse = serde_json::from_str(&response_text)
            .map_err(|e| OAuthError::ExchangeFailed(format!("Parse error: {e}")))?;

        Ok(TokenSet {
            access_token: token_response.access_token,
            refresh_token: token_response.refresh_token,
            instance_url: token_response.instance_url,
        })
    }

    async fn fetch_identity(&self, tokens: &TokenSet) -> Result<Identity, OAuthError> {
        let response = self
            .http
            .get(format!(
                "{}{}",
                tokens.instance_url.trim_end_matches('/'),
                oauth::USERINFO_PATH
            ))
            .bearer_auth(&tokens.access_token)
            .send()
            .await
            .map_err(|e| OAuthError::IdentityFailed(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| OAuthError::IdentityFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(OAuthError::IdentityFailed(Self::error_text(&response_text)));
        }

        let userinfo: SalesforceUserInfo = serde_json::from_str(&response_text)
            .map_err(|e| OAuthError::IdentityFailed(format!("Parse error: {e}")))?;

        Ok(Identity {
            user_id: userinfo.user_id,
            organization_id: userinfo.organization_id,
            username: userinfo.preferred_username,
            display_name: userinfo.name,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn test_config() -> SalesforceConfig {
        SalesforceConfig {
            login_url: "https://test.salesforce.com".to_string(),
            client_id: "3MVG9client".to_string(),
            client_secret: "s3cret".to_string(),
            redirect_uri: "http://localhost:3000/oauth/callback".to_string(),
        }
    }

    #[test]
    fn authorization_url_carries_fixed_scope() {
        let provider = SalesforceProvider::new(&test_config());
        let url = Url::parse(&provider.authorization_url().unwrap()).unwrap();

        assert_eq!(url.host_str(), Some("test.salesforce.com"));
        assert_eq!(url.path(), "/services/oauth2/authorize");

        let scope = url
            .query_pairs()
            .find(|(k, _)| k == "scope")
            .map(|(_, v)| v.to_string())
            .unwrap();
        assert_eq!(scope, "api id web refresh_token");
    }

    #[test]
    fn authorization_url_rejects_malformed_login_url() {
        let mut config = test_config();
        config.login_url = "not a url".to_string();
        let provider = SalesforceProvider::new(&config);

        let err = provider.authorization_url().unwrap_err();
        assert!(matches!(err, OAuthError::ConfigurationError(_)));
    }

    #[test]
    fn trailing_slash_on_login_url_is_trimmed() {
        let mut config = test_config();
        config.login_url = "https://test.salesforce.com/".to_string();
        let provider = SalesforceProvider::new(&config);

        let url = provider.authorization_url().unwrap();
        assert!(url.starts_with("https://test.salesforce.com/services/oauth2/authorize?"));
    }

    #[test]
    fn error_text_prefers_error_description() {
        let body = r#"{"error":"invalid_grant","error_description":"expired authorization code"}"#;
        assert_eq!(
            SalesforceProvider::error_text(body),
            "invalid_grant: expired authorization code"
        );

        let bare = r#"{"error":"invalid_client_id"}"#;
        assert_eq!(SalesforceProvider::error_text(bare), "invalid_client_id");

        assert_eq!(SalesforceProvider::error_text("<html>"), "<html>");
    }
}
