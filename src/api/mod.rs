//! HTTP boundary over the resource service.

mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod mod_test;

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::service::ResourceService;

pub use routes::create_router;
pub use state::AppState;

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "ROSTER_HOST";
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "ROSTER_PORT";
/// Environment variable selecting a file-backed database.
pub const DB_ENV: &str = "ROSTER_DB";

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(roster::api::bind),
        help("Is another process listening on this port? Try --port or ROSTER_PORT.")
    )]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(roster::api::serve))]
    Serve(#[source] std::io::Error),
}

/// API server configuration
///
/// Precedence: CLI flag > environment variable > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Database file; `None` keeps everything in memory
    pub db_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            db_path: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `ROSTER_HOST`, `ROSTER_PORT` and `ROSTER_DB`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var(HOST_ENV) {
            match host.parse() {
                Ok(host) => config.host = host,
                Err(e) => warn!(value = %host, error = %e, "Ignoring invalid {}", HOST_ENV),
            }
        }

        if let Ok(port) = env::var(PORT_ENV) {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(e) => warn!(value = %port, error = %e, "Ignoring invalid {}", PORT_ENV),
            }
        }

        if let Some(path) = env::var_os(DB_ENV).filter(|p| !p.is_empty()) {
            config.db_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_db_path(mut self, path: PathBuf) -> Self {
        self.db_path = Some(path);
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server over an already migrated database.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let state = AppState::new(ResourceService::new(Arc::new(db)));
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
