use crate::core::{Action, Envelope, OrderDraft, PaymentProcessor, PaymentRequest, Result};
use crate::utils::error::GatewayError;
use crate::utils::validation::{
    validate_amount, validate_currency, validate_order_id, validate_required_field,
};

pub struct OrderGateway<P: PaymentProcessor> {
    processor: P,
    production: bool,
}

impl<P: PaymentProcessor> OrderGateway<P> {
    pub fn new(processor: P, production: bool) -> Self {
        Self {
            processor,
            production,
        }
    }

    /// Handle one raw request body and always produce an envelope; errors never
    /// escape past this point.
    pub async fn handle_raw(&self, body: Option<&str>) -> Envelope {
        match self.dispatch(body).await {
            Ok(data) => Envelope::success(data),
            Err(e) => {
                tracing::warn!(code = e.status_code(), error = %e, "Request failed");
                e.to_envelope(self.production)
            }
        }
    }

    async fn dispatch(&self, body: Option<&str>) -> Result<serde_json::Value> {
        let body = body
            .filter(|b| !b.trim().is_empty())
            .ok_or_else(|| GatewayError::Validation {
                message: "Request body is required".to_string(),
            })?;

        let request: PaymentRequest =
            serde_json::from_str(body).map_err(|_| GatewayError::Validation {
                message: "Request body is not valid JSON".to_string(),
            })?;

        let action = Action::parse(validate_required_field("action", &request.action)?)?;
        let data = validate_required_field("data", &request.data)?;

        tracing::info!(action = %action, "Dispatching payment action");
        match action {
            Action::CreateOrder => self.create_order(data).await,
            Action::CaptureOrder => self.capture_order(data).await,
        }
    }

    async fn create_order(&self, data: &serde_json::Value) -> Result<serde_json::Value> {
        let amount = data.get("amount").cloned();
        let amount = validate_amount("amount", validate_required_field("amount", &amount)?)?;

        let currency = data.get("currency").cloned();
        let currency = string_field("currency", validate_required_field("currency", &currency)?)?;
        let currency = validate_currency("currency", currency)?;

        let draft = OrderDraft { amount, currency };
        let order = self.processor.create_order(&draft).await?;
        Ok(serde_json::to_value(order)?)
    }

    async fn capture_order(&self, data: &serde_json::Value) -> Result<serde_json::Value> {
        let order_id = data.get("orderId").cloned();
        let order_id = string_field("orderId", validate_required_field("orderId", &order_id)?)?;
        validate_order_id("orderId", order_id)?;

        let captured = self.processor.capture_order(order_id).await?;
        Ok(serde_json::to_value(captured)?)
    }
}

/// A field that is present but not a JSON string is invalid, not missing.
fn string_field<'a>(field_name: &str, value: &'a serde_json::Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| GatewayError::InvalidField {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Expected a string".to_string(),
    })
}
