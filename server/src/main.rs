use anyhow::Result;
use clap::Parser;
use linematch_server::{build_router, load_state};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "linematch-server")]
#[command(about = "Serve best-match queries over a line corpus", long_about = None)]
struct Args {
    /// Corpus file, one document per line
    #[arg(long)]
    corpus: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let state = load_state(&args.corpus)?;
    tracing::info!(
        corpus = %args.corpus,
        num_docs = state.table.len(),
        num_words = state.index.len(),
        "corpus loaded"
    );
    let origins = std::env::var("CORS_ALLOW_ORIGIN").ok();
    let app = build_router(state, origins.as_deref());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
