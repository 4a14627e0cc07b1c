//! Provider abstraction layer for SMS delivery services
//!
//! Handlers talk to a `dyn Provider` so that the concrete service (Twilio in
//! production, an in-memory double in tests) is injected at startup.

use async_trait::async_trait;
use thiserror::Error;

/// Error types for provider operations
///
/// `Display` renders only the provider's own description so that it can be
/// relayed to callers unchanged.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Unexpected(String),
}

/// A message ready to hand to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub to: String,
    pub from: String,
    pub body: String,
}

/// Provider acknowledgement of an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub sid: String,
    pub status: Option<String>,
}

/// Trait for SMS providers
#[async_trait]
pub trait Provider: Send + Sync {
    /// Submit a single message for delivery
    async fn send_message(&self, message: &OutboundMessage) -> Result<SentMessage, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
