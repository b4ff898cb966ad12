//! PostgreSQL integration for the codebin Record Store.
//!
//! The core never talks SQL directly: repository traits live next to the
//! domain types and are implemented for `Arc<Client>` behind each crate's
//! `database` feature. This crate provides the shared plumbing those
//! implementations need.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from the startup config
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`install()`] — Applies DDL idempotently at startup
//!
//! ## Error Mapping
//!
//! - [`unique_violation()`] — Detects the store's uniqueness backstop
//! - [`storage()`] — Logs driver detail, returns a genericized [`Error`]

use cbn_core::Error;
use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
///
/// # Panics
///
/// Panics if the connection cannot be established. Startup is the only
/// caller; there is no point serving without a Record Store.
pub async fn db(url: &str) -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    Arc::new(client)
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for registered user accounts.
#[rustfmt::skip]
pub const USERS:     &str = "users";
/// Table for published snippets.
#[rustfmt::skip]
pub const PASTES:    &str = "pastes";
/// Table for the closed language lookup set.
#[rustfmt::skip]
pub const LANGUAGES: &str = "languages";

/// Schema metadata for PostgreSQL tables.
///
/// Contains no I/O; it purely describes table structure so that DDL can
/// be assembled at compile time via [`const_format::concatcp!`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Apply a table's DDL. Idempotent; run once per table at startup.
pub async fn install<T: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("installing table {}", T::name());
    client.batch_execute(T::creates()).await?;
    client.batch_execute(T::indices()).await
}

/// True when the error is the store's uniqueness constraint firing. The
/// workflow-level check-then-act lookup is only an optimization for a
/// friendly message; this signal is the source of truth.
pub fn unique_violation(e: &PgErr) -> bool {
    e.code() == Some(&tokio_postgres::error::SqlState::UNIQUE_VIOLATION)
}

/// Map a driver error to the client-safe taxonomy. Full detail is logged
/// here and nowhere else; the caller supplies the generic label the
/// client will see.
pub fn storage(label: &str, e: PgErr) -> Error {
    log::error!("{}: {}", label, e);
    Error::storage(label)
}
