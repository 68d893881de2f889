/// Database module for the OAuth client store
///
/// This module provides:
/// - Connection pooling for PostgreSQL
/// - Repository pattern implementation for `oauth_client_details`
/// - Database models and schema
/// - Diesel ORM integration with embedded migrations

pub mod connection;
pub mod models;
pub mod repositories;
pub mod schema;

pub use connection::{establish_connection_pool, Database, DatabaseError};
