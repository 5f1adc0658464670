// ABOUTME: Unified error handling for the Salesforce connect service
// ABOUTME: Maps domain errors onto the plain-text HTTP contract of the flow
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Unified Error Handling System
//!
//! Standard error types, error codes, and HTTP response formatting for the
//! OAuth flow. Callers surface errors as plain text: the callback contract
//! is a text body, not a JSON envelope, so [`AppError`] renders its message
//! directly with the mapped status code. The code set covers exactly what
//! the flow emits: a missing/blank callback code, a failed exchange or
//! identity lookup, and configuration discovered broken at use time.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::oauth::OAuthError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A required field is missing from the request
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // External Services (5000-5999)
    /// Authentication with the external provider failed
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,

    // Configuration (6000-6999)
    /// Configuration error encountered
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    ///
    /// Provider failures map to 500, not a gateway status: the callback
    /// reports the whole exchange-and-verify body as one server failure.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::MissingRequiredField => 400,
            ErrorCode::ExternalAuthFailed | ErrorCode::ConfigError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::MissingRequiredField => "A required field is missing from the request",
            ErrorCode::ExternalAuthFailed => "Authentication with external service failed",
            ErrorCode::ConfigError => "Configuration error encountered",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message, used verbatim as the response body
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Callback arrived without a usable authorization code
    #[must_use]
    pub fn missing_authorization_code() -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            "Failed to get authorization code from callback.",
        )
    }

    /// Authentication against the provider failed
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalAuthFailed,
            format!("Authentication failed: {}", message.into()),
        )
    }
}

/// Conversion from the OAuth domain errors
impl From<OAuthError> for AppError {
    fn from(error: OAuthError) -> Self {
        let code = match &error {
            OAuthError::ExchangeFailed(_) | OAuthError::IdentityFailed(_) => {
                ErrorCode::ExternalAuthFailed
            }
            OAuthError::ConfigurationError(_) => ErrorCode::ConfigError,
        };
        AppError::new(code, error.to_string()).with_source(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::ExternalAuthFailed.http_status(), 500);
        assert_eq!(ErrorCode::ConfigError.http_status(), 500);
    }

    #[test]
    fn test_missing_code_message_is_literal() {
        let error = AppError::missing_authorization_code();
        assert_eq!(error.http_status(), 400);
        assert_eq!(
            error.message,
            "Failed to get authorization code from callback."
        );
    }

    #[test]
    fn test_authentication_failed_prefixes_message() {
        let error = AppError::authentication_failed("invalid_grant");
        assert_eq!(error.http_status(), 500);
        assert!(error.message.starts_with("Authentication failed: "));
        assert!(error.message.contains("invalid_grant"));
    }

    #[test]
    fn test_oauth_error_conversion() {
        let error = AppError::from(OAuthError::ExchangeFailed("expired code".to_string()));
        assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
        assert!(error.message.contains("expired code"));
        assert!(error.source.is_some());

        let error = AppError::from(OAuthError::ConfigurationError("bad login URL".to_string()));
        assert_eq!(error.code, ErrorCode::ConfigError);
    }
}
