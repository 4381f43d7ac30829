//! Roster API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use roster::api::{self, ApiError, Config};
use roster::db::{Database, DbError, SqliteDatabase};
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(roster::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(roster::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(roster::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "roster-api")]
#[command(author, version, about = "Roster API server", long_about = None)]
struct Cli {
    /// Host address to bind to [env: ROSTER_HOST, default: 127.0.0.1]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: ROSTER_PORT, default: 8080]
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path [env: ROSTER_DB]; in-memory when unset
    #[arg(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    api::init_tracing();
    serve(Cli::parse()).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(path) = cli.db {
        config = config.with_db_path(path);
    }

    // Create the concrete database implementation
    let db = match &config.db_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            info!(path = %path.display(), "Opening database");
            SqliteDatabase::open(path).await?
        }
        None => {
            info!("Using in-memory database");
            SqliteDatabase::in_memory().await?
        }
    };

    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    api::run(config, db).await?;

    Ok(())
}
