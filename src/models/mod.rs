//! API data models
//!
//! This module contains data structures for the relay's own HTTP surface and
//! for the Twilio REST API.

pub mod sms;
pub mod twilio;
