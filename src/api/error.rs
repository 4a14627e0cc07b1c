//! Send-path errors and their HTTP rendering

use crate::core::constants::message::FIELDS_REQUIRED;
use crate::core::provider::ProviderError;
use crate::models::sms::SendSmsResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Why a `POST /send-sms` did not produce a sid
///
/// Both variants render as `{"success": false, "error": ...}`; only the
/// status code differs.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("{}", FIELDS_REQUIRED)]
    MissingFields,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl SendError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SendError::MissingFields => StatusCode::BAD_REQUEST,
            SendError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(SendSmsResponse::failed(self.to_string()))).into_response()
    }
}
