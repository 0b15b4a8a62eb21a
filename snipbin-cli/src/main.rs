//! snipbin - snippet-sharing web application
//!
//! Connects to Postgres, ensures the schema exists, and serves the web
//! application until shutdown. Every startup failure is fatal; there is
//! no degraded mode.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use snipbin_server::db::{create_pool, migrations};
use snipbin_server::http::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "snipbin",
    author,
    version,
    about = "Share text snippets that expire"
)]
struct Cli {
    /// HTTP network address
    #[arg(long, default_value = "127.0.0.1:4000")]
    addr: SocketAddr,

    /// Postgres data source name
    #[arg(long, env = "DATABASE_URL")]
    dsn: Option<String>,

    /// Directory of static assets served under /static
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads the environment for --dsn.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let dsn = cli
        .dsn
        .context("no data source name; set --dsn or DATABASE_URL")?;

    let pool = create_pool(&dsn)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Database pool ready");

    migrations::run(&pool)
        .await
        .context("failed to set up schema")?;

    let config = ServerConfig {
        bind_addr: cli.addr,
        static_dir: cli.static_dir,
    };

    tracing::info!("Starting server on {}", cli.addr);
    run_server(pool, config).await.context("server error")?;

    Ok(())
}
