use crate::domain::model::Envelope;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("PayPal authentication failed: {message}")]
    Auth { message: String },

    #[error("PayPal API error ({status}): {message}")]
    Vendor {
        status: u16,
        name: Option<String>,
        message: String,
        debug_id: Option<String>,
    },
}

impl GatewayError {
    /// HTTP-like status carried in the error envelope.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Validation { .. }
            | GatewayError::MissingField { .. }
            | GatewayError::InvalidField { .. } => 400,
            // Vendor 4xx passes through unchanged; vendor 5xx and transport
            // failures surface as a bad upstream.
            GatewayError::Vendor { status, .. } if (400..500).contains(status) => *status,
            GatewayError::Vendor { .. } => 502,
            GatewayError::Http(_) => 502,
            GatewayError::Auth { .. }
            | GatewayError::Config { .. }
            | GatewayError::Serialization(_) => 500,
        }
    }

    /// Render the uniform error envelope. `detail` carries the debug rendering
    /// of the error and is suppressed in production mode.
    pub fn to_envelope(&self, production: bool) -> Envelope {
        let mut envelope = Envelope::error(self.status_code(), self.to_string());
        if !production {
            envelope.detail = Some(format!("{:?}", self));
        }
        envelope
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ResponseStatus;

    #[test]
    fn test_validation_errors_map_to_400() {
        let missing = GatewayError::MissingField {
            field: "action".to_string(),
        };
        assert_eq!(missing.status_code(), 400);

        let invalid = GatewayError::InvalidField {
            field: "amount".to_string(),
            value: "-1".to_string(),
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(invalid.status_code(), 400);
    }

    #[test]
    fn test_vendor_4xx_passes_through_and_5xx_becomes_502() {
        let unprocessable = GatewayError::Vendor {
            status: 422,
            name: Some("ORDER_ALREADY_CAPTURED".to_string()),
            message: "Order already captured".to_string(),
            debug_id: None,
        };
        assert_eq!(unprocessable.status_code(), 422);

        let upstream_down = GatewayError::Vendor {
            status: 503,
            name: None,
            message: "Service unavailable".to_string(),
            debug_id: None,
        };
        assert_eq!(upstream_down.status_code(), 502);
    }

    #[test]
    fn test_envelope_detail_only_outside_production() {
        let err = GatewayError::Validation {
            message: "Request body is required".to_string(),
        };

        let dev = err.to_envelope(false);
        assert_eq!(dev.status, ResponseStatus::Error);
        assert_eq!(dev.code, Some(400));
        assert!(dev.detail.is_some());

        let prod = err.to_envelope(true);
        assert!(prod.detail.is_none());
        assert_eq!(prod.message.as_deref(), Some("Request body is required"));
    }
}
