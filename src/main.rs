//! SMS relay backend
//!
//! A small HTTP service that accepts `{phone, message}` requests and forwards
//! them to Twilio, relaying the message sid or the provider's error text.

mod api;
mod core;
mod models;

use crate::api::endpoints::{AppState, create_router};
use crate::core::config::Config;
use crate::core::constants::env;
use crate::core::logging::init_logging;
use crate::core::provider::Provider;
use crate::core::providers::TwilioProvider;
use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Credentials are checked before anything else so that a misconfigured
    // process never binds a socket.
    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    print_startup_banner(&config);

    if let Err(e) = run(config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Arc<Config>) -> anyhow::Result<()> {
    let provider: Arc<dyn Provider> = Arc::new(
        TwilioProvider::new(
            config.account_sid.clone(),
            config.auth_token.clone(),
            config.twilio_base_url.clone(),
            config.request_timeout,
        )
        .context("Failed to create Twilio client")?,
    );

    info!("Using provider: {}", provider.provider_name());

    let app = create_router(AppState {
        config: config.clone(),
        provider,
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("🚀 Server running on http://localhost:{}", config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("📨 SMS Relay v{}", env!("CARGO_PKG_VERSION"));
    println!("✅ Configuration loaded successfully");
    println!("   Twilio Account: {}", config.account_sid);
    println!("   Sender: {}", config.sender);
    println!("   Twilio API: {}", config.twilio_base_url);
    println!("   Request Timeout: {}s", config.request_timeout);
    println!("   Server: {}:{}", config.host, config.port);
    println!();
}

/// Print help message
fn print_help() {
    println!("SMS Relay v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: sms-relay [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Required environment variables (a .env file is also read):");
    println!("  {} - Twilio account SID", env::ACCOUNT_SID);
    println!("  {} - Twilio auth token", env::AUTH_TOKEN);
    println!("  {} - Sender phone number", env::SENDER);
    println!();
    println!("Optional settings:");
    println!("  {} - Server host (default: 0.0.0.0)", env::HOST);
    println!("  {} - Server port (default: 5000)", env::PORT);
    println!("  {} - Logging level (default: info)", env::LOG_LEVEL);
    println!(
        "  {} - Twilio request timeout in seconds (default: 90)",
        env::REQUEST_TIMEOUT
    );
    println!(
        "  {} - Twilio API root (default: https://api.twilio.com)",
        env::BASE_URL
    );
    println!(
        "  {} - Read all settings from this dotenv file instead",
        env::ENV_FILE
    );
    println!();
    println!("Endpoints:");
    println!("  GET  /          - Banner");
    println!("  POST /send-sms  - Send {{\"phone\", \"message\"}}");
    println!("  GET  /health    - Health report");
}
