//! ShopSecure sandbox API server.
//!
//! A deliberately vulnerable storefront for practicing XSS attack and
//! defense. Boots in vulnerable mode with an in-memory demo catalog.
//!
//! Usage:
//!   shopsecure-server --port 5000
//!
//! Keep this off public networks — vulnerable mode emits untrusted markup
//! on purpose.

use anyhow::{Context, Result};
use clap::Parser;
use shopsecure_server::{build_router, AppContext};
use shopsecure_store::{seed_demo_catalog, CommerceStore};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "shopsecure-server")]
#[command(about = "Deliberately vulnerable storefront API for XSS training")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// SQLite database path; omitted means an in-memory store
    #[arg(short, long)]
    database: Option<String>,

    /// Skip seeding the demo catalog
    #[arg(long)]
    no_seed: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let store = match &args.database {
        Some(path) => CommerceStore::new(path)
            .with_context(|| format!("failed to open store at {path}"))?,
        None => CommerceStore::open_in_memory().context("failed to open in-memory store")?,
    };
    if !args.no_seed {
        seed_demo_catalog(&store).context("failed to seed demo catalog")?;
    }

    let ctx = AppContext::new(store);
    let mode = ctx.security.mode();
    let app = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .context("failed to bind HTTP port")?;
    info!("ShopSecure API listening on port {}", args.port);

    println!("\n========================================");
    println!("  ShopSecure Sandbox Running");
    println!("========================================");
    println!("  Port:  {}", args.port);
    println!("  Mode:  {mode}");
    println!();
    println!("  This server is intentionally vulnerable.");
    println!("  Keep it off public networks.");
    println!("========================================\n");

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
