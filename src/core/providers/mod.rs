//! Provider implementations

pub mod twilio;

pub use twilio::TwilioProvider;
