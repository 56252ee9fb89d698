//! Agent server - HTTP surface for the LLM-driven file automation agent.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use agent::interpreter::OpenAiClient;
use agent::io::config::load_config;
use agent::io::paths::PathGuard;
use anyhow::Context;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "agent-server")]
#[command(about = "HTTP server that turns plain-language tasks into file operations")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Path to the agent config file (TOML); defaults apply if missing
    #[arg(long, default_value = "agent.toml")]
    config: PathBuf,

    /// Override the guarded data root from the config file
    #[arg(long)]
    data_root: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent::logging::init();

    let args = Args::parse();
    let config = load_config(&args.config)?;

    let data_root = args.data_root.unwrap_or(config.data_root);
    let guard = PathGuard::new(data_root);
    info!(data_root = guard.root(), "guarding file access");

    // Credential is read once here and handed to the client explicitly; no
    // ambient global.
    let api_key = std::env::var("AIPROXY_TOKEN").context("AIPROXY_TOKEN not set")?;
    let client = OpenAiClient::new(api_key, config.api_url, config.model);

    let state = AppState::new(guard, Arc::new(client));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::app(state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
