//! Constants shared across the relay
//!
//! Environment variable names, defaults, and the fixed strings that make up
//! the public HTTP contract.

/// Environment variable names
pub mod env {
    /// Twilio account identifier
    pub const ACCOUNT_SID: &str = "TWILIO_SID";

    /// Twilio authentication token
    pub const AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";

    /// Sender phone number used as the `From` of every message
    pub const SENDER: &str = "TWILIO_PHONE";

    /// Twilio API root override
    pub const BASE_URL: &str = "TWILIO_BASE_URL";

    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";

    /// Provider request timeout in seconds
    pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";

    /// Dotenv file to read settings from instead of the process environment
    pub const ENV_FILE: &str = "ENV_FILE";
}

/// Defaults applied when an optional variable is unset
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 5000;
    pub const LOG_LEVEL: &str = "info";
    pub const REQUEST_TIMEOUT: u64 = 90;
    pub const TWILIO_BASE_URL: &str = "https://api.twilio.com";
}

/// Route paths
pub mod route {
    pub const ROOT: &str = "/";
    pub const SEND_SMS: &str = "/send-sms";
    pub const HEALTH: &str = "/health";
}

/// Fixed response texts
pub mod message {
    /// Body of `GET /`
    pub const ROOT_BANNER: &str = "🌍 Emission Tracker Backend Running...";

    /// Error returned when `phone` or `message` is missing
    pub const FIELDS_REQUIRED: &str = "Phone and message are required";
}
