//! quill CLI - starts the blog HTTP server
//!
//! Usage:
//!   quill                                 # serve on 127.0.0.1:3030
//!   quill --port 8080 --debug             # debug logging to console
//!   DATABASE_URL=sqlite://blog.db quill   # explicit database location
//!
//! Environment variables:
//!   RUST_LOG        # Log filter (default: info)
//!   DATABASE_URL    # SQLite connection string (default: sqlite://quill.db)

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quill_server::db::{migrations, pool::create_pool};
use quill_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "quill", about = "Blog HTTP server - users and posts over JSON")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3030")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://quill.db")]
    database_url: String,

    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; a missing file is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug).ok();

    info!("Opening database at {}", cli.database_url);
    let pool = create_pool(&cli.database_url)
        .await
        .context("failed to open database")?;

    migrations::run(&pool).await.context("migrations failed")?;

    let bind_addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .context("invalid bind address")?;

    run_server(pool, ServerConfig { bind_addr }).await?;
    Ok(())
}
