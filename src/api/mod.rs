//! HTTP surface: routes, handlers, and the error-to-response mapping

pub mod endpoints;
pub mod error;
