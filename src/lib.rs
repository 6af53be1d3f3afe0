pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::paypal::PayPalClient;
pub use config::{Config, PayPalEnvironment};
pub use core::gateway::OrderGateway;
pub use domain::model::{Envelope, ResponseStatus};
pub use domain::ports::PaymentProcessor;
pub use utils::error::{GatewayError, Result};
