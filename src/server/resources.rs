// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Shares the provider, session slot, and config across handlers
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. Handlers
//! receive one `Arc<ServerResources>` instead of threading each resource
//! through individually; tests swap the provider for a scripted double.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::oauth::IdentityProvider;
use crate::session::SessionStore;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
    /// The OAuth provider the flow runs against
    pub provider: Arc<dyn IdentityProvider>,
    /// The process-wide session credential slot
    pub session: SessionStore,
}

impl ServerResources {
    /// Create new server resources with an empty session slot
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            config,
            provider,
            session: SessionStore::new(),
        }
    }
}
