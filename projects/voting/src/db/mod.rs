pub mod schema;
pub mod vote;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Debug, thiserror::Error)]
pub enum BuildPoolError {
    #[error("BuildPool: {source}")]
    BuildPool {
        #[from]
        source: r2d2::Error,
    },
}

/// Constructs the connection pool handed to the API layer. The pool is the
/// only store handle in the process; it is injected, never global.
pub fn build_pool(database_url: &str) -> Result<PgPool, BuildPoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .map_err(|source| BuildPoolError::BuildPool { source })
}
