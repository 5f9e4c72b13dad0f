//! Entry point for the sysglance agent.

use std::net::SocketAddr;

use sysglance_agent::cli::parse_args;
use sysglance_agent::{router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match parse_args(std::env::args()) {
        Ok(a) => a,
        Err(msg) if msg.starts_with("Usage:") => {
            eprintln!("{msg}");
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = router(AppState::new());
    let addr = SocketAddr::new(args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "sysglance agent listening (GET /system-info)");
    axum::serve(listener, app).await?;
    Ok(())
}
