//! API endpoint handlers
//!
//! This module implements the HTTP endpoints of the relay: the root banner,
//! SMS submission, and a JSON health report.

use crate::api::error::SendError;
use crate::core::config::Config;
use crate::core::constants::{message, route};
use crate::core::provider::{OutboundMessage, Provider, ProviderError};
use crate::models::sms::{SendSmsRequest, SendSmsResponse};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn Provider>,
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(route::ROOT, get(root))
        .route(route::SEND_SMS, post(send_sms))
        .route(route::HEALTH, get(health_check))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET / - Root endpoint
async fn root() -> &'static str {
    message::ROOT_BANNER
}

/// POST /send-sms - Forward a single SMS to the provider
///
/// A body that cannot be read as JSON is handled like an empty object, so it
/// fails validation rather than producing an extractor error page.
async fn send_sms(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SendSmsResponse>, SendError> {
    let request = match payload {
        Ok(Json(body)) => SendSmsRequest::from_body(&body),
        Err(rejection) => {
            warn!("Unreadable send-sms body: {}", rejection.body_text());
            SendSmsRequest::default()
        }
    };

    let Some((phone, text)) = request.required_fields() else {
        return Err(SendError::MissingFields);
    };

    let request_id = Uuid::new_v4();
    info!(
        "📩 Incoming SMS request: request_id={}, phone={}, message_chars={}",
        request_id,
        phone,
        text.chars().count()
    );
    debug!("SMS body for {}: {:?}", request_id, text);

    let outbound = OutboundMessage {
        to: phone,
        from: state.config.sender.clone(),
        body: text,
    };

    match state.provider.send_message(&outbound).await {
        Ok(sent) => {
            info!(
                "SMS sent successfully: request_id={}, sid={}, status={}",
                request_id,
                sent.sid,
                sent.status.as_deref().unwrap_or("unknown")
            );
            Ok(Json(SendSmsResponse::sent(sent.sid)))
        }
        Err(e) => {
            if let ProviderError::Api { status, code, .. } = &e {
                error!(
                    "❌ SMS Error: request_id={}, status={}, code={:?}: {}",
                    request_id, status, code, e
                );
            } else {
                error!("❌ SMS Error: request_id={}: {}", request_id, e);
            }
            Err(e.into())
        }
    }
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "provider": state.provider.provider_name(),
        "sender_configured": !state.config.sender.is_empty(),
    }))
}
