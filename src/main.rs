use anyhow::Context;
use clap::Parser;
use paypal_gateway::utils::{logger, validation::Validate};
use paypal_gateway::{Config, OrderGateway, PayPalClient, ResponseStatus};
use std::io::Read;
use std::path::PathBuf;

/// Send one payment request through the gateway from the command line.
#[derive(Debug, Parser)]
#[command(name = "paypal-gateway")]
#[command(about = "Invoke the PayPal order gateway with a JSON payload")]
struct Cli {
    /// Inline JSON payload, e.g. '{"action":"createOrder","data":{...}}'
    #[arg(long, conflicts_with = "payload_file")]
    payload: Option<String>,

    /// Read the JSON payload from a file instead
    #[arg(long)]
    payload_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

impl Cli {
    fn read_payload(&self) -> anyhow::Result<String> {
        if let Some(payload) = &self.payload {
            return Ok(payload.clone());
        }
        if let Some(path) = &self.payload_file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read payload from stdin")?;
        Ok(buffer)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting paypal-gateway CLI");

    let config = match Config::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let payload = cli.read_payload()?;
    if cli.verbose {
        tracing::debug!(environment = ?config.environment, "Loaded config");
    }

    let client = PayPalClient::new(&config)?;
    let gateway = OrderGateway::new(client, config.production);
    let envelope = gateway.handle_raw(Some(&payload)).await;

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    match envelope.status {
        ResponseStatus::Success => {
            tracing::info!("✅ Request completed successfully");
            Ok(())
        }
        ResponseStatus::Error => {
            tracing::error!(
                "❌ Request failed with code {}",
                envelope.http_status()
            );
            std::process::exit(1);
        }
    }
}
