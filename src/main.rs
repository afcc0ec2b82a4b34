use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use waafipay_hpp_relay::{build_router, Config, HttpGateway, RelayService};

#[derive(Debug, Parser)]
#[command(name = "waafipay-hpp-relay", about = "WaafiPay HPP relay")]
struct Args {
    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Overrides the PORT environment variable.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Config::from_env().context("loading configuration")?;
    let port = args.port.unwrap_or(config.server_port);

    info!("Starting WaafiPay HPP relay, gateway at {}", config.base_url);

    let gateway = HttpGateway::new(&config).context("building gateway client")?;
    let service = Arc::new(RelayService::new(Arc::new(gateway), config.merchant.clone()));
    let app = build_router(service);

    let addr = format!("{}:{}", args.host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
