//! wordbank binary: load config, connect, migrate, serve.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordbank_core::Config;
use wordbank_server::db;

/// Dictionary REST API over PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "wordbank", version)]
struct Cli {
    /// Address to bind, overriding BIND_ADDR
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Enable debug logging (RUST_LOG still takes precedence)
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
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let mut config = Config::from_env().context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    let pool = db::create_pool(&config.database_url)
        .await
        .context("connecting to database")?;
    db::migrations::run(&pool)
        .await
        .context("running migrations")?;

    wordbank_server::run_server(pool, &config)
        .await
        .context("running server")?;

    Ok(())
}
