// ABOUTME: HTTP route groups for the Salesforce connect service
// ABOUTME: Organizes the OAuth flow surface and monitoring endpoints
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `HTTP` routes
//!
//! Route groups are assembled into the full router by [`crate::server`].

/// OAuth flow routes (initiate, callback, status)
pub mod auth;

/// Health check routes
pub mod health;
