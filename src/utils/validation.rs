use crate::utils::error::{GatewayError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn order_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // PayPal order tokens are uppercase alphanumeric, typically 17 characters.
    RE.get_or_init(|| Regex::new(r"^[A-Z0-9]{10,20}$").unwrap())
}

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").unwrap())
}

fn currency_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]{3}$").unwrap())
}

/// Validate an amount given as a JSON number or numeric string and normalize it
/// to the two-decimal string form PayPal expects in `amount.value`.
pub fn validate_amount(field_name: &str, value: &serde_json::Value) -> Result<String> {
    let raw = match value {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => {
            return Err(GatewayError::InvalidField {
                field: field_name.to_string(),
                value: other.to_string(),
                reason: "Amount must be a number or a numeric string".to_string(),
            })
        }
    };

    if !amount_regex().is_match(&raw) {
        return Err(GatewayError::InvalidField {
            field: field_name.to_string(),
            value: raw,
            reason: "Amount must be a positive number with at most two decimal places"
                .to_string(),
        });
    }

    let parsed: f64 = raw.parse().map_err(|_| GatewayError::InvalidField {
        field: field_name.to_string(),
        value: raw.clone(),
        reason: "Amount is not a valid number".to_string(),
    })?;

    if parsed <= 0.0 {
        return Err(GatewayError::InvalidField {
            field: field_name.to_string(),
            value: raw,
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    Ok(format!("{:.2}", parsed))
}

/// Validate a three-letter ISO-4217 alpha code, normalizing to uppercase.
pub fn validate_currency(field_name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if !currency_regex().is_match(trimmed) {
        return Err(GatewayError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Currency must be a three-letter ISO-4217 code".to_string(),
        });
    }
    Ok(trimmed.to_ascii_uppercase())
}

pub fn validate_order_id(field_name: &str, value: &str) -> Result<()> {
    if !order_id_regex().is_match(value) {
        return Err(GatewayError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Order ID must be 10-20 uppercase alphanumeric characters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GatewayError::InvalidField {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GatewayError::InvalidField {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GatewayError::InvalidField {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GatewayError::MissingField {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GatewayError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
