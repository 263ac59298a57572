//! PostgreSQL connectivity for the openvtt backend.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from `DB_URL`
//!
//! ## Serialization Traits
//!
//! - [`Schema`] — Table metadata and DDL generation
//!
//! ## Table Names
//!
//! Constants for all persistent entities: users, worlds, assets.

use std::sync::Arc;
use tokio_postgres::Client;
use vtt_core::AppError;

/// Schema metadata for PostgreSQL tables.
///
/// All methods return `&'static str` to avoid runtime allocations and
/// enable compile-time string construction via [`const_format::concatcp!`].
/// This trait contains no I/O; startup migration batches the DDL of every
/// implementor.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Establishes a database connection.
///
/// Connects to PostgreSQL using the `DB_URL` environment variable.
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
///
/// # Panics
///
/// Panics if `DB_URL` is not set or if connection fails.
pub async fn db() -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .expect("set client_min_messages");
    Arc::new(client)
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Logs a storage failure and re-signals it as [`AppError::Internal`].
/// The underlying error text stays in the logs, never in a response.
pub fn storage_error(e: PgErr) -> AppError {
    log::error!("database error: {}", e);
    AppError::Internal
}

/// Whether this error is a unique-constraint violation.
pub fn unique_violation(e: &PgErr) -> bool {
    e.code() == Some(&tokio_postgres::error::SqlState::UNIQUE_VIOLATION)
}

/// Table for registered user accounts.
#[rustfmt::skip]
pub const USERS:  &str = "users";
/// Table for owned world records.
#[rustfmt::skip]
pub const WORLDS: &str = "worlds";
/// Table for binary asset metadata.
#[rustfmt::skip]
pub const ASSETS: &str = "assets";
