use std::net::SocketAddr;

use axum::serve;
use thiserror::Error;
use tracing::info;
use utils_trace::tracing_init;

use projects_voting::config::{Config, ConfigError};
use projects_voting::db::vote::queries::{provision_votes_table, ProvisionVotesTableError};
use projects_voting::db::{build_pool, BuildPoolError};
use projects_voting::endpoints::router;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("LoadConfig: {source}")]
    LoadConfig {
        #[source]
        source: ConfigError,
    },
    #[error("BuildPool: {source}")]
    BuildPool {
        #[source]
        source: BuildPoolError,
    },
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[source]
        source: r2d2::Error,
    },
    #[error("ProvisionVotesTable: {source}")]
    ProvisionVotesTable {
        #[source]
        source: ProvisionVotesTableError,
    },
    #[error("TcpListenerBind: {source}")]
    TcpListenerBind {
        #[source]
        source: std::io::Error,
    },
    #[error("Serve: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    dotenvy::dotenv().ok();

    tracing_init("info").map_err(|source| MainError::TracingInit { source })?;

    let config = Config::from_env().map_err(|source| MainError::LoadConfig { source })?;

    let pool =
        build_pool(&config.database_url()).map_err(|source| MainError::BuildPool { source })?;

    // Table provisioning is idempotent, so every startup runs it.
    {
        let mut conn = pool
            .get()
            .map_err(|source| MainError::GetConnectionFromPool { source })?;
        provision_votes_table(&mut conn)
            .map_err(|source| MainError::ProvisionVotesTable { source })?;
    }

    // Set up the router
    let app = router(pool);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| MainError::TcpListenerBind { source })?;

    info!("Server running on addr: {}", addr);

    serve(listener, app)
        .await
        .map_err(|source| MainError::Serve { source })?;

    Ok(())
}
