use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use thiserror::Error;
use tracing::{error, info};

use crate::db::{vote::queries::list_votes, PgPool};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error(transparent)]
    ListVotes {
        #[from]
        source: crate::db::vote::queries::ListVotesError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        error!("GET /movies failed: {self}");
        match self {
            HandlerError::GetConnectionFromPool { source } => {
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
            }
            HandlerError::ListVotes { source } => {
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
            }
        }
    }
}

/// Axum handler: GET /movies
pub async fn handler(Extension(pool): Extension<PgPool>) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
    };

    let records = match list_votes(&mut conn) {
        Ok(records) => records,
        Err(source) => return HandlerError::ListVotes { source }.into_response(),
    };

    info!("GET movies...");
    (StatusCode::OK, Json(records)).into_response()
}
