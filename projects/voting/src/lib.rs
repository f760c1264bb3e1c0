//! Movie voting service
//!
//! - REST API endpoints in `endpoints/`
//! - PostgreSQL vote store in `db/`
//! - Configured from environment variables (see `config`)

pub mod config;
pub mod db;
pub mod endpoints;
