// ABOUTME: Server binary for the Salesforce OAuth connect service
// ABOUTME: Loads configuration, wires resources, and runs the HTTP listener
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Salesforce Connect Server Binary
//!
//! Starts the OAuth 2.0 web-server flow service: loads environment
//! configuration, builds the Salesforce provider, and serves the two-route
//! flow plus monitoring endpoints.

use anyhow::Result;
use clap::Parser;
use sfdc_connect::{
    config::environment::ServerConfig,
    logging,
    oauth::salesforce::SalesforceProvider,
    server::{self, resources::ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "sfdc-connect")]
#[command(about = "Salesforce OAuth 2.0 web-server flow connector")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging comes up first so the config loader's own lines are captured
    logging::init_from_env()?;

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Salesforce Connect");
    info!("{}", config.summary());

    let provider = Arc::new(SalesforceProvider::new(&config.salesforce));
    let resources = Arc::new(ServerResources::new(Arc::new(config), provider));

    display_available_endpoints(resources.config.http_port);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display the available endpoints with their port
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    info!("=== Available API Endpoints ===");
    info!("OAuth Flow:");
    info!("   Begin Authorization: GET http://{host}:{port}/oauth2/auth");
    info!("   OAuth Callback:      GET http://{host}:{port}/oauth/callback");
    info!("   Connection Status:   GET http://{host}:{port}/oauth/status");
    info!("Monitoring:");
    info!("   Health Check:        GET http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}
