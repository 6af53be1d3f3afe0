use crate::utils::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Incoming request body. Fields are optional so that missing ones surface as
/// field errors instead of a blanket deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub action: Option<String>,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateOrder,
    CaptureOrder,
}

impl Action {
    pub fn parse(value: &str) -> Result<Self, GatewayError> {
        match value {
            "createOrder" => Ok(Action::CreateOrder),
            "captureOrder" => Ok(Action::CaptureOrder),
            other => Err(GatewayError::InvalidField {
                field: "action".to_string(),
                value: other.to_string(),
                reason: "Expected createOrder or captureOrder".to_string(),
            }),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CreateOrder => write!(f, "createOrder"),
            Action::CaptureOrder => write!(f, "captureOrder"),
        }
    }
}

/// A validated, normalized order ready to send to the vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Two-decimal string form, e.g. "19.99".
    pub amount: String,
    /// Uppercase ISO-4217 alpha code.
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approve_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CapturedOrder {
    pub id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The uniform response envelope every invocation produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Envelope {
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            code: None,
            message: None,
            data: Some(data),
            detail: None,
        }
    }

    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            code: Some(code),
            message: Some(message.into()),
            data: None,
            detail: None,
        }
    }

    /// Status for the HTTP layer wrapping this envelope.
    pub fn http_status(&self) -> u16 {
        self.code.unwrap_or(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_parse() {
        assert_eq!(Action::parse("createOrder").unwrap(), Action::CreateOrder);
        assert_eq!(Action::parse("captureOrder").unwrap(), Action::CaptureOrder);
        assert!(Action::parse("refundOrder").is_err());
        assert!(Action::parse("").is_err());
    }

    #[test]
    fn test_success_envelope_omits_error_fields() {
        let envelope = Envelope::success(json!({"id": "5O190127TN364715T"}));
        let rendered = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            rendered,
            json!({"status": "success", "data": {"id": "5O190127TN364715T"}})
        );
        assert_eq!(envelope.http_status(), 200);
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = Envelope::error(400, "Request body is required");
        let rendered = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            rendered,
            json!({"status": "error", "code": 400, "message": "Request body is required"})
        );
        assert_eq!(envelope.http_status(), 400);
    }

    #[test]
    fn test_created_order_serializes_camel_case() {
        let order = CreatedOrder {
            id: "5O190127TN364715T".to_string(),
            status: "CREATED".to_string(),
            approve_url: Some("https://www.sandbox.paypal.com/checkoutnow?token=X".to_string()),
        };
        let rendered = serde_json::to_value(&order).unwrap();
        assert!(rendered.get("approveUrl").is_some());
        assert!(rendered.get("approve_url").is_none());
    }
}
