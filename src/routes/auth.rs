// ABOUTME: OAuth flow route handlers for authorization initiation and callback
// ABOUTME: Drives redirect, code exchange, session storage, and identity display
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! OAuth flow routes
//!
//! `GET /oauth2/auth` sends the user to the Salesforce login page;
//! `GET /oauth/callback` exchanges the returned code, stores the credential
//! set in the session slot, and confirms the authenticated identity.
//! `GET /oauth/status` reports whether the slot currently holds credentials.

use crate::{
    errors::AppError,
    logging::AppLogger,
    oauth::{Identity, OAuthError},
    server::resources::ServerResources,
};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Query parameters for the OAuth callback
#[derive(Deserialize)]
struct CallbackQuery {
    #[serde(default)]
    code: Option<String>,
}

/// OAuth flow routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all OAuth flow routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/oauth2/auth", get(Self::handle_authorize))
            .route("/oauth/callback", get(Self::handle_callback))
            .route("/oauth/status", get(Self::handle_status))
            .with_state(resources)
    }

    /// Handle OAuth authorization initiation - redirects to the provider
    /// login page
    async fn handle_authorize(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let auth_url = resources.provider.authorization_url()?;

        info!(
            "Redirecting to {} authorization page",
            resources.provider.name()
        );

        // The documented contract is a 302; axum's Redirect helpers emit
        // 303/307, so the response is built explicitly.
        Ok((StatusCode::FOUND, [(header::LOCATION, auth_url)]).into_response())
    }

    /// Handle the OAuth callback: exchange the code, store the credential
    /// set, and verify it with an identity lookup
    async fn handle_callback(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CallbackQuery>,
    ) -> Result<Response, AppError> {
        // A blank `code=` is as useless as an absent one; reject both
        // before attempting an exchange.
        let Some(code) = query.code.filter(|c| !c.trim().is_empty()) else {
            return Err(AppError::missing_authorization_code());
        };

        match Self::authorize_with_code(&resources, &code).await {
            Ok(identity) => {
                info!("Successfully connected as user: {}", identity.username);
                AppLogger::log_oauth_event(resources.provider.name(), "callback", true);

                Ok((StatusCode::OK, Html(success_page(&identity))).into_response())
            }
            Err(e) => {
                error!("Salesforce authentication error: {}", e);
                AppLogger::log_oauth_event(resources.provider.name(), "callback", false);

                Err(AppError::authentication_failed(e.to_string()))
            }
        }
    }

    /// Exchange the code and verify the resulting credentials
    ///
    /// Exchange and identity lookup share one failure domain: the tokens are
    /// stored before the identity probe, and a failed probe leaves them in
    /// place while the flow reports failure.
    async fn authorize_with_code(
        resources: &Arc<ServerResources>,
        code: &str,
    ) -> Result<Identity, OAuthError> {
        let tokens = resources.provider.exchange_code(code).await?;

        info!("Auth successful!");
        info!("Instance URL: {}", tokens.instance_url);

        resources.session.store(tokens.clone()).await;

        let identity = resources.provider.fetch_identity(&tokens).await?;

        Ok(identity)
    }

    /// Report whether the session slot currently holds a credential set
    async fn handle_status(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        let instance_url = resources
            .session
            .snapshot()
            .await
            .map(|tokens| tokens.instance_url);

        Json(serde_json::json!({
            "provider": resources.provider.name(),
            "connected": instance_url.is_some(),
            "instance_url": instance_url,
        }))
    }
}

/// Render the post-authorization confirmation page
fn success_page(identity: &Identity) -> String {
    format!(
        "<h1>Authentication Successful!</h1>\
         <p>You have successfully connected to Salesforce as \
         <b>{}</b>. You can now close this browser tab and return to your \
         terminal.</p>",
        html_escape::encode_text(&identity.username)
    )
}
