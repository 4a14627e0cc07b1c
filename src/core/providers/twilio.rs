//! Twilio provider implementation

use crate::core::provider::{OutboundMessage, Provider, ProviderError, SentMessage};
use crate::models::twilio::{TwilioCreateMessage, TwilioErrorBody, TwilioMessage};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Twilio Programmable Messaging provider
pub struct TwilioProvider {
    client: Client,
    account_sid: String,
    auth_token: String,
    base_url: String,
}

impl TwilioProvider {
    /// Create a new Twilio provider
    ///
    /// # Arguments
    ///
    /// * `account_sid` - Twilio account identifier, also the basic-auth user
    /// * `auth_token` - Twilio auth token, the basic-auth password
    /// * `base_url` - API root such as `https://api.twilio.com`
    /// * `timeout` - Request timeout in seconds
    pub fn new(
        account_sid: String,
        auth_token: String,
        base_url: String,
        timeout: u64,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            client,
            account_sid,
            auth_token,
            base_url,
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }

    /// Turn a non-success response body into a [`ProviderError`]
    ///
    /// Twilio normally answers with a JSON error body whose `message` is what
    /// gets relayed. Anything else falls back to the raw text.
    fn api_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
        match serde_json::from_str::<TwilioErrorBody>(body) {
            Ok(error) => {
                debug!(
                    "Twilio error {:?} ({:?}): {}",
                    error.code, error.more_info, error.message
                );
                ProviderError::Api {
                    status: error.status.unwrap_or(status.as_u16()),
                    code: error.code,
                    message: error.message,
                }
            }
            Err(_) => {
                let message = if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
                } else {
                    body.trim().to_string()
                };
                ProviderError::Api {
                    status: status.as_u16(),
                    code: None,
                    message,
                }
            }
        }
    }
}

#[async_trait]
impl Provider for TwilioProvider {
    async fn send_message(&self, message: &OutboundMessage) -> Result<SentMessage, ProviderError> {
        let form = TwilioCreateMessage {
            to: &message.to,
            from: &message.from,
            body: &message.body,
        };

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        let created: TwilioMessage = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Unexpected(format!("Failed to parse response: {}", e)))?;

        debug!(
            "Twilio accepted message {} (status={:?}, date_created={:?})",
            created.sid, created.status, created.date_created
        );

        Ok(SentMessage {
            sid: created.sid,
            status: created.status,
        })
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
