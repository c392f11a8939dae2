//! Person Server - serves the persons REST API from memory.

use anyhow::Result;
use clap::Parser;
use person_server::{start_server, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "person-server")]
#[command(about = "In-memory persons REST backend")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging; RUST_LOG overrides the flag
    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting person server");

    let addr = start_server(Arc::new(AppState::default()), &args.host, args.port).await?;

    // Intentional stdout so scripts can discover an auto-assigned port
    println!("PERSON_SERVER_PORT={}", addr.port());

    info!("Person server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
