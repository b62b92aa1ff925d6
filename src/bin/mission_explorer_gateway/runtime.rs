use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mission_explorer::api::ApiClient;
use mission_explorer::config::ExplorerConfig;

use super::*;

#[derive(Parser)]
#[command(name = "mission-explorer-gateway")]
#[command(about = "Session gateway for the mission explorer", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// JSON config file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the mission database API
    #[arg(long)]
    api_base_url: Option<String>,

    /// Session lifetime in seconds
    #[arg(long)]
    session_max_age: Option<u64>,

    /// Mark the session cookie `Secure`
    #[arg(long)]
    secure_cookies: bool,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let cfg = load_config(&args)?;
    let api = ApiClient::from_config(&cfg).context("build api client")?;
    tracing::info!(api = %cfg.api_base_url, max_age = cfg.session_max_age_secs, "gateway configured");

    let app = build_router(Arc::new(AppState::new(cfg, api)));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(addr = %local_addr, "mission-explorer-gateway listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn load_config(args: &Args) -> Result<ExplorerConfig> {
    let mut cfg = match &args.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => {
            let url = args
                .api_base_url
                .clone()
                .context("either --api-base-url or --config is required")?;
            ExplorerConfig::new(url)
        }
    };
    if let Some(url) = &args.api_base_url {
        cfg.api_base_url = url.clone();
    }
    if let Some(secs) = args.session_max_age {
        cfg.session_max_age_secs = secs;
    }
    if args.secure_cookies {
        cfg.secure_cookies = true;
    }
    cfg.validated()
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
