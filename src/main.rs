mod config;
mod coordinates;
mod image;
mod scope;
mod telemetry;
mod transport;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::{Config, LogLevel};
use crate::scope::ScopeStore;
use crate::telemetry::{Synchronizer, Topics};
use crate::transport::MqttTransport;

const INBOUND_CAPACITY: usize = 256;

#[derive(Parser)]
#[command(name = "wheresmyscope")]
#[command(about = "Bridge telescope telemetry from MQTT to an HTTP JSON endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    Validate { config: String },
    /// Run the bridge
    Serve {
        config: String,
        /// Override the configured log level (debug, info, warn, error)
        #[arg(long, value_parser = parse_log_level)]
        log_level: Option<LogLevel>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => validate(&config),
        Commands::Serve { config, log_level } => serve(&config, log_level).await,
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    serde_yaml::from_str(s).map_err(|_| format!("invalid log level: {}", s))
}

fn validate(path: &str) -> ExitCode {
    match Config::from_file(path) {
        Ok(config) => {
            println!("Configuration is valid");
            println!("  broker: {}", config.mqtt.broker);
            println!("  topics: {}/#", config.mqtt.prefix);
            println!("  coordinates: {}", config.telemetry.coordinate_format);
            println!("  listen: {}", config.web.bind_addr());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(path: &str, log_level: Option<LogLevel>) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::new()
        .filter_level(log_level.unwrap_or(config.log_level).into())
        .parse_default_env()
        .init();

    let store = Arc::new(ScopeStore::new());
    let (inbound_tx, inbound_rx) = mpsc::channel(INBOUND_CAPACITY);

    let transport = match MqttTransport::connect(&config.mqtt, inbound_tx).await {
        Ok(t) => t,
        Err(e) => {
            log::error!("Failed to connect to MQTT broker {}: {}", config.mqtt.broker, e);
            return ExitCode::FAILURE;
        }
    };

    let synchronizer = Synchronizer::new(
        Arc::clone(&store),
        transport.publisher(),
        Topics::new(
            config.mqtt.prefix.clone(),
            config.telemetry.coordinate_format,
        ),
        config.image.clone(),
    );
    tokio::spawn(synchronizer.run(inbound_rx));

    let server = web::run_server(&config.web, store, shutdown_signal()).await;

    if let Err(e) = transport.disconnect().await {
        log::warn!("Failed to disconnect from MQTT broker: {}", e);
    }

    match server {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
