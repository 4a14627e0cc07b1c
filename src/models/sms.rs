//! Relay request and response models
//!
//! These are the JSON shapes accepted and returned by `POST /send-sms`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /send-sms`
///
/// Fields are kept as raw JSON values so that presence is judged the same way
/// regardless of the JSON type a client sent.
#[derive(Debug, Clone, Default)]
pub struct SendSmsRequest {
    pub phone: Option<Value>,
    pub message: Option<Value>,
}

impl SendSmsRequest {
    /// Pick the request fields out of a decoded JSON body
    ///
    /// Only object keys count; arrays and scalars yield an empty request.
    pub fn from_body(body: &Value) -> Self {
        Self {
            phone: body.get("phone").cloned(),
            message: body.get("message").cloned(),
        }
    }

    /// Destination and body, if both are present
    ///
    /// Returns `None` when either field is missing, `null`, empty, zero, or of
    /// a JSON type that carries no text.
    pub fn required_fields(&self) -> Option<(String, String)> {
        let phone = present_text(self.phone.as_ref())?;
        let message = present_text(self.message.as_ref())?;
        Some((phone, message))
    }
}

fn present_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Response of `POST /send-sms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendSmsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendSmsResponse {
    pub fn sent(sid: impl Into<String>) -> Self {
        Self {
            success: true,
            sid: Some(sid.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            sid: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> SendSmsRequest {
        SendSmsRequest::from_body(&body)
    }

    #[test]
    fn test_both_fields_present() {
        let req = request(json!({"phone": "+15551234567", "message": "Hello"}));
        assert_eq!(
            req.required_fields(),
            Some(("+15551234567".to_string(), "Hello".to_string()))
        );
    }

    #[test]
    fn test_missing_or_empty_fields() {
        assert_eq!(request(json!({})).required_fields(), None);
        assert_eq!(request(json!({"phone": "+1555"})).required_fields(), None);
        assert_eq!(request(json!({"message": "Hello"})).required_fields(), None);
        assert_eq!(
            request(json!({"phone": "", "message": "Hello"})).required_fields(),
            None
        );
        assert_eq!(
            request(json!({"phone": null, "message": "Hello"})).required_fields(),
            None
        );
        assert_eq!(
            request(json!({"phone": 0, "message": "Hello"})).required_fields(),
            None
        );
        assert_eq!(
            request(json!({"phone": true, "message": "Hello"})).required_fields(),
            None
        );
    }

    #[test]
    fn test_numeric_phone_is_forwarded_as_text() {
        let req = request(json!({"phone": 15551234567u64, "message": "Hi"}));
        assert_eq!(
            req.required_fields(),
            Some(("15551234567".to_string(), "Hi".to_string()))
        );
    }

    #[test]
    fn test_non_object_body_is_empty() {
        assert_eq!(request(json!(["+1555", "Hello"])).required_fields(), None);
        assert_eq!(request(json!("+1555")).required_fields(), None);
    }

    #[test]
    fn test_whitespace_message_is_not_rejected() {
        let req = request(json!({"phone": "+1555", "message": " "}));
        assert!(req.required_fields().is_some());
    }

    #[test]
    fn test_response_shapes() {
        assert_eq!(
            serde_json::to_value(SendSmsResponse::sent("SM123")).unwrap(),
            json!({"success": true, "sid": "SM123"})
        );
        assert_eq!(
            serde_json::to_value(SendSmsResponse::failed("boom")).unwrap(),
            json!({"success": false, "error": "boom"})
        );
    }
}
