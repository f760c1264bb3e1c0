use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::db::{vote::queries::increment_vote, PgPool};

/// JSON payload expected by the endpoint. A request without `id` is rejected
/// by the extractor; `votes` falls back to a single vote. Any integer id is
/// accepted, there is no catalog to check against.
#[derive(Debug, Deserialize)]
pub struct VoteRequestBody {
    pub id: i32,
    #[serde(default = "default_increment")]
    pub votes: i32,
}

fn default_increment() -> i32 {
    1
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error(transparent)]
    IncrementVote {
        #[from]
        source: crate::db::vote::queries::IncrementVoteError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        error!("POST /movies failed: {self}");
        match self {
            HandlerError::GetConnectionFromPool { source } => {
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
            }
            HandlerError::IncrementVote { source } => {
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
            }
        }
    }
}

/// Axum handler: POST /movies
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Json(input): Json<VoteRequestBody>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
    };

    let record = match increment_vote(&mut conn, input.id, input.votes) {
        Ok(record) => record,
        Err(source) => return HandlerError::IncrementVote { source }.into_response(),
    };

    info!("Votes for movie {}", record.movie_id);
    (StatusCode::OK, Json(record)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn votes_defaults_to_one() {
        let body: VoteRequestBody = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(body.id, 1);
        assert_eq!(body.votes, 1);
    }

    #[test]
    fn explicit_votes_are_kept() {
        let body: VoteRequestBody = serde_json::from_str(r#"{"id": 1, "votes": 3}"#).unwrap();
        assert_eq!(body.votes, 3);
    }

    #[test]
    fn negative_votes_are_accepted() {
        let body: VoteRequestBody = serde_json::from_str(r#"{"id": 2, "votes": -2}"#).unwrap();
        assert_eq!(body.votes, -2);
    }

    #[test]
    fn missing_id_fails_deserialization() {
        assert!(serde_json::from_str::<VoteRequestBody>(r#"{"votes": 3}"#).is_err());
    }
}
