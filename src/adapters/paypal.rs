use crate::config::Config;
use crate::domain::model::{CapturedOrder, CreatedOrder, OrderDraft};
use crate::domain::ports::PaymentProcessor;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;

// Refresh this long before the token actually expires.
const TOKEN_EXPIRY_SKEW_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Utc::now() + Duration::seconds(TOKEN_EXPIRY_SKEW_SECS) < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct OrderResource {
    id: String,
    status: String,
    #[serde(default)]
    links: Vec<LinkResource>,
}

#[derive(Debug, Deserialize)]
struct LinkResource {
    rel: String,
    href: String,
}

/// Subset of PayPal's error body; anything unparseable falls back to raw text.
#[derive(Debug, Deserialize)]
struct VendorErrorBody {
    name: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    debug_id: Option<String>,
}

pub struct PayPalClient {
    http: Client,
    base_url: String,
    client_id: String,
    secret: String,
    token: Mutex<Option<CachedToken>>,
}

impl PayPalClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            secret: config.secret.clone(),
            token: Mutex::new(None),
        })
    }

    /// Client-credentials token, reused within this instance until shortly
    /// before expiry.
    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
        }

        tracing::debug!("Requesting PayPal access token");
        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .basic_auth(&self.client_id, Some(&self.secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<VendorErrorBody>(&body)
                .ok()
                .and_then(|e| e.error_description.or(e.message))
                .unwrap_or(body);
            return Err(GatewayError::Auth {
                message: format!("token request returned {}: {}", status.as_u16(), message),
            });
        }

        let token: TokenResponse = response.json().await?;
        let access_token = token.access_token.clone();
        *cached = Some(CachedToken {
            access_token: token.access_token,
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        });

        Ok(access_token)
    }

    async fn vendor_error(response: reqwest::Response) -> GatewayError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<VendorErrorBody>(&body) {
            Ok(parsed) => GatewayError::Vendor {
                status,
                name: parsed.name,
                message: parsed
                    .message
                    .or(parsed.error_description)
                    .unwrap_or_else(|| "Unknown vendor error".to_string()),
                debug_id: parsed.debug_id,
            },
            Err(_) => GatewayError::Vendor {
                status,
                name: None,
                message: if body.is_empty() {
                    "Unknown vendor error".to_string()
                } else {
                    body
                },
                debug_id: None,
            },
        }
    }

    fn approve_url(resource: &OrderResource) -> Option<String> {
        resource
            .links
            .iter()
            .find(|link| link.rel == "approve")
            .map(|link| link.href.clone())
    }
}

#[async_trait]
impl PaymentProcessor for PayPalClient {
    async fn create_order(&self, draft: &OrderDraft) -> Result<CreatedOrder> {
        let token = self.access_token().await?;

        let body = json!({
            "intent": "CAPTURE",
            "purchase_units": [{
                "amount": {
                    "currency_code": draft.currency,
                    "value": draft.amount,
                }
            }]
        });

        tracing::debug!(amount = %draft.amount, currency = %draft.currency, "Creating PayPal order");
        let response = self
            .http
            .post(format!("{}/v2/checkout/orders", self.base_url))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::vendor_error(response).await);
        }

        let resource: OrderResource = response.json().await?;
        let approve_url = Self::approve_url(&resource);

        tracing::info!(order_id = %resource.id, status = %resource.status, "PayPal order created");
        Ok(CreatedOrder {
            id: resource.id,
            status: resource.status,
            approve_url,
        })
    }

    async fn capture_order(&self, order_id: &str) -> Result<CapturedOrder> {
        let token = self.access_token().await?;

        tracing::debug!(order_id = %order_id, "Capturing PayPal order");
        let response = self
            .http
            .post(format!(
                "{}/v2/checkout/orders/{}/capture",
                self.base_url, order_id
            ))
            .bearer_auth(&token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body("{}")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::vendor_error(response).await);
        }

        let resource: serde_json::Value = response.json().await?;
        let id = resource
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or(order_id)
            .to_string();
        let status = resource
            .get("status")
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let capture_id = resource
            .pointer("/purchase_units/0/payments/captures/0/id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        tracing::info!(order_id = %id, status = %status, "PayPal order captured");
        Ok(CapturedOrder {
            id,
            status,
            capture_id,
        })
    }
}
