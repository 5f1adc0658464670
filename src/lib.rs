// ABOUTME: Main library entry point for the Salesforce connect service
// ABOUTME: Exposes the OAuth web-server flow, configuration, and HTTP surface
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(unsafe_code)]

//! # Salesforce Connect
//!
//! A small HTTP service that performs the OAuth 2.0 authorization-code
//! ("web server") flow against a single Salesforce org. One route sends the
//! user to the Salesforce login page; the callback route exchanges the
//! returned authorization code for a token set, keeps it in a process-wide
//! session slot, and verifies it with an identity lookup.
//!
//! ## Quick Start
//!
//! 1. Put `SF_CLIENT_ID` and `SF_CLIENT_SECRET` (and optionally
//!    `SF_LOGIN_URL`, `SF_REDIRECT_URI`, `PORT`) in the environment or a
//!    `.env` file
//! 2. Start the server with `sfdc-connect`
//! 3. Open `/oauth2/auth` in a browser and complete the Salesforce login
//!
//! ## Architecture
//!
//! - **`oauth`**: provider capability (authorize URL, code exchange,
//!   identity lookup) behind the [`oauth::IdentityProvider`] trait
//! - **`session`**: the single in-memory credential slot
//! - **`routes`**: the HTTP surface (initiate, callback, status, health)
//! - **`config`**: environment-based configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sfdc_connect::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Salesforce connect configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and environment lookups
pub mod constants;

/// Unified error handling
pub mod errors;

/// Logging configuration and startup
pub mod logging;

/// OAuth 2.0 provider capability and the Salesforce implementation
pub mod oauth;

/// `HTTP` route handlers
pub mod routes;

/// Server assembly and run loop
pub mod server;

/// Process-wide session credential slot
pub mod session;
