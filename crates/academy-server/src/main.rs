//! Micro-Academy Server - renders learning modules over HTTP.
//!
//! This binary wires the built-in module registry into the page resolver
//! and serves the catalog and module pages.

mod handlers;
mod server;

use academy_core::{AppConfig, SiteConfig};
use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "academy-server")]
#[command(about = "HTTP server for the Micro-Academy learning platform")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = AppConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = AppConfig::DEFAULT_HOST)]
    host: String,

    /// Locale served for routes without an explicit locale segment
    #[arg(long, default_value = "en")]
    locale: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Micro-Academy server");

    let site = SiteConfig {
        default_locale: args.locale,
        ..SiteConfig::default()
    };

    // Build the module registry once; it is immutable from here on.
    let registry = academy_modules::builtin_registry()?;

    // Start the server
    let addr = server::start_server(registry, site, &args.host, args.port).await?;

    info!("Serving on http://{}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
