#[cfg(feature = "lambda")]
use aws_lambda_events::encodings::Body;
#[cfg(feature = "lambda")]
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
#[cfg(feature = "lambda")]
use aws_lambda_events::http::{header::CONTENT_TYPE, HeaderMap, HeaderValue};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use paypal_gateway::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use paypal_gateway::{Config, Envelope, OrderGateway, PayPalClient};

#[cfg(feature = "lambda")]
async fn handle(body: Option<&str>) -> Envelope {
    // Production gating has to hold even when config loading itself fails.
    let production = std::env::var("NODE_ENV")
        .map(|v| v == "production")
        .unwrap_or(false);

    let config = match Config::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            return e.to_envelope(production);
        }
    };

    let client = match PayPalClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build PayPal client: {}", e);
            return e.to_envelope(config.production);
        }
    };

    OrderGateway::new(client, config.production)
        .handle_raw(body)
        .await
}

#[cfg(feature = "lambda")]
async fn function_handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let envelope = handle(event.payload.body.as_deref()).await;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(ApiGatewayProxyResponse {
        status_code: i64::from(envelope.http_status()),
        headers,
        body: Some(Body::Text(serde_json::to_string(&envelope)?)),
        ..Default::default()
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
