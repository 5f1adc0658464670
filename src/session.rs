// ABOUTME: Process-wide session slot holding the current credential set
// ABOUTME: Single-slot store; each successful authorization replaces it wholesale
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Session Store
//!
//! A single process-wide slot for the current [`TokenSet`]. The slot starts
//! empty, is overwritten wholesale by each successful exchange, and dies
//! with the process. There is no expiry and no per-user keying: the service
//! assumes one operator driving one flow at a time. Concurrent callbacks
//! race wholesale on the slot (last write wins); multi-user deployments
//! would need the slot keyed by a session identifier instead.

use std::sync::Arc;

use crate::oauth::TokenSet;

/// Shared handle to the session credential slot
#[derive(Clone, Default)]
pub struct SessionStore {
    slot: Arc<tokio::sync::RwLock<Option<TokenSet>>>,
}

impl SessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot with a new credential set
    pub async fn store(&self, tokens: TokenSet) {
        *self.slot.write().await = Some(tokens);
    }

    /// Get a copy of the current credential set, if any
    pub async fn snapshot(&self) -> Option<TokenSet> {
        self.slot.read().await.clone()
    }

    /// Whether a credential set is currently held
    pub async fn is_connected(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(tag: &str) -> TokenSet {
        TokenSet {
            access_token: format!("access-{tag}"),
            refresh_token: format!("refresh-{tag}"),
            instance_url: format!("https://{tag}.my.salesforce.com"),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = SessionStore::new();
        assert!(store.snapshot().await.is_none());
        assert!(!store.is_connected().await);
    }

    #[tokio::test]
    async fn store_replaces_wholesale() {
        let store = SessionStore::new();

        store.store(tokens("first")).await;
        assert_eq!(store.snapshot().await, Some(tokens("first")));

        store.store(tokens("second")).await;
        assert_eq!(store.snapshot().await, Some(tokens("second")));
        assert!(store.is_connected().await);
    }
}
