pub mod list;
pub mod vote;
