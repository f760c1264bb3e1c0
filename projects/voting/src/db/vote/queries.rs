use diesel::prelude::*;
use diesel::upsert::excluded;
use crate::db::{schema::movies::dsl::*, vote::models::*};

#[derive(Debug, thiserror::Error)]
pub enum ListVotesError {
    #[error("ListVotes: {source}")]
    ListVotes {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn list_votes(conn: &mut PgConnection) -> Result<Vec<VoteRecord>, ListVotesError> {
    movies
        .load::<VoteRecord>(conn)
        .map_err(|source| ListVotesError::ListVotes { source })
}

#[derive(Debug, thiserror::Error)]
pub enum IncrementVoteError {
    #[error("IncrementVote: {source}")]
    IncrementVote {
        #[from]
        source: diesel::result::Error,
    },
}

/// Adds `delta` to a movie's counter, creating the row on first vote.
/// Single statement, so concurrent calls for the same movie cannot lose
/// updates. `delta` may be negative or zero; callers decide bounds.
pub fn increment_vote(
    conn: &mut PgConnection,
    movie_id_val: i32,
    delta: i32,
) -> Result<VoteRecord, IncrementVoteError> {
    diesel::insert_into(movies)
        .values(&NewVote {
            movie_id: movie_id_val,
            votes: delta,
        })
        .on_conflict(movie_id)
        .do_update()
        .set(votes.eq(votes + excluded(votes)))
        .get_result(conn)
        .map_err(|source| IncrementVoteError::IncrementVote { source })
}

#[derive(Debug, thiserror::Error)]
pub enum ProvisionVotesTableError {
    #[error("ProvisionVotesTable: {source}")]
    ProvisionVotesTable {
        #[from]
        source: diesel::result::Error,
    },
}

/// Idempotent, runs on every startup. The primary key makes the upsert in
/// `increment_vote` well defined and keeps the table at one row per movie.
pub fn provision_votes_table(conn: &mut PgConnection) -> Result<(), ProvisionVotesTableError> {
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS movies (movie_id INTEGER PRIMARY KEY, votes INTEGER NOT NULL)",
    )
    .execute(conn)
    .map(|_| ())
    .map_err(|source| ProvisionVotesTableError::ProvisionVotesTable { source })
}
