use diesel::prelude::*;
use serde::Serialize;
use crate::db::schema::movies;

/// One persisted (movie_id, votes) counter. Created implicitly on the first
/// vote for a movie, incremented on every later one, never deleted.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = movies)]
#[diesel(primary_key(movie_id))]
pub struct VoteRecord {
    pub movie_id: i32,
    pub votes: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = movies)]
pub struct NewVote {
    pub movie_id: i32,
    pub votes: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_records_serialize_to_empty_array() {
        assert_eq!(
            serde_json::to_string(&Vec::<VoteRecord>::new()).unwrap(),
            "[]"
        );
    }

    #[test]
    fn vote_record_serializes_to_wire_shape() {
        let record = VoteRecord {
            movie_id: 7,
            votes: 42,
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({ "movie_id": 7, "votes": 42 })
        );
    }
}
