//! Twilio REST API data models
//!
//! Only the fields the relay reads are modelled; everything else in Twilio's
//! payloads is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Form body of `POST /2010-04-01/Accounts/{AccountSid}/Messages.json`
#[derive(Debug, Clone, Serialize)]
pub struct TwilioCreateMessage<'a> {
    #[serde(rename = "To")]
    pub to: &'a str,
    #[serde(rename = "From")]
    pub from: &'a str,
    #[serde(rename = "Body")]
    pub body: &'a str,
}

/// Message resource returned when a message is accepted
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioMessage {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioErrorBody {
    #[serde(default)]
    pub code: Option<u32>,
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}
