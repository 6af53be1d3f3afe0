use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{self, Validate};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayPalEnvironment {
    Sandbox,
    Live,
}

impl PayPalEnvironment {
    pub fn base_url(&self) -> &'static str {
        match self {
            PayPalEnvironment::Sandbox => "https://api-m.sandbox.paypal.com",
            PayPalEnvironment::Live => "https://api-m.paypal.com",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value {
            "sandbox" => Ok(PayPalEnvironment::Sandbox),
            "live" => Ok(PayPalEnvironment::Live),
            other => Err(GatewayError::InvalidField {
                field: "PAYPAL_ENVIRONMENT".to_string(),
                value: other.to_string(),
                reason: "Expected sandbox or live".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub secret: String,
    pub environment: PayPalEnvironment,
    /// REST base URL; defaults from the environment, overridable for tests.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Gates the `detail` field in error envelopes.
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let environment = match env::var("PAYPAL_ENVIRONMENT") {
            Ok(value) => PayPalEnvironment::parse(&value)?,
            Err(_) => PayPalEnvironment::Sandbox,
        };

        Ok(Self {
            client_id: env::var("PAYPAL_CLIENT_ID").map_err(|_| GatewayError::Config {
                message: "PAYPAL_CLIENT_ID environment variable is required".to_string(),
            })?,
            secret: env::var("PAYPAL_SECRET").map_err(|_| GatewayError::Config {
                message: "PAYPAL_SECRET environment variable is required".to_string(),
            })?,
            environment,
            base_url: env::var("PAYPAL_BASE_URL")
                .unwrap_or_else(|_| environment.base_url().to_string()),
            timeout_secs: env::var("PAYPAL_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            // NODE_ENV is carried over from the deployment this function
            // replaces; only "production" changes behavior.
            production: env::var("NODE_ENV")
                .map(|v| v == "production")
                .unwrap_or(false),
        })
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("client_id", &self.client_id)?;
        validation::validate_non_empty_string("secret", &self.secret)?;
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_range("timeout_secs", self.timeout_secs, 1, 60)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            client_id: "client".to_string(),
            secret: "secret".to_string(),
            environment: PayPalEnvironment::Sandbox,
            base_url: PayPalEnvironment::Sandbox.base_url().to_string(),
            timeout_secs: 10,
            production: false,
        }
    }

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(
            PayPalEnvironment::Sandbox.base_url(),
            "https://api-m.sandbox.paypal.com"
        );
        assert_eq!(PayPalEnvironment::Live.base_url(), "https://api-m.paypal.com");
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(
            PayPalEnvironment::parse("sandbox").unwrap(),
            PayPalEnvironment::Sandbox
        );
        assert_eq!(
            PayPalEnvironment::parse("live").unwrap(),
            PayPalEnvironment::Live
        );
        assert!(PayPalEnvironment::parse("staging").is_err());
    }

    #[test]
    fn test_config_validation() {
        assert!(test_config().validate().is_ok());

        let mut missing_secret = test_config();
        missing_secret.secret = " ".to_string();
        assert!(missing_secret.validate().is_err());

        let mut bad_url = test_config();
        bad_url.base_url = "not-a-url".to_string();
        assert!(bad_url.validate().is_err());

        let mut bad_timeout = test_config();
        bad_timeout.timeout_secs = 0;
        assert!(bad_timeout.validate().is_err());
    }
}
