//! skillicons - HTTP server for composite skill icon images.
//!
//! Serves `GET /api/icons`, designed to be placed behind a CDN for edge
//! caching.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use skillicons_serve::{AppState, Config, router};

/// skillicons - composite SVG images of technology icons.
#[derive(Parser, Debug)]
#[command(name = "skillicons-serve")]
#[command(about = "HTTP server for composite skill icon images", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,

    /// Bind address, overriding `SKILLICONS_BIND_ADDR`.
    #[arg(long)]
    bind: Option<String>,

    /// Load and validate the icon set, then exit without serving.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    let bind_addr = config.bind_addr.clone();

    // Registry is built and validated before the listener binds
    let state = AppState::new(config)?;

    if args.check {
        println!(
            "{} icons, {} base names",
            state.registry.len(),
            state.registry.base_names().count()
        );
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting icon server");

    axum::serve(listener, router(state)).await?;

    Ok(())
}
