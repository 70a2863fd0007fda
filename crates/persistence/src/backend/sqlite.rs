// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup.
//!
//! Version rows, reviews and organization responsibles reference their
//! parents by foreign key. `SQLite` only enforces those when the
//! `foreign_keys` pragma is on for the connection, so it is switched on
//! before migrations run and checked again once the adapter is built.
//!
//! File databases run in WAL mode with a busy timeout, which lets listings
//! read while an edit holds the write lock.
//!
//! Diesel has no pragma DSL. Pragmas are the only raw SQL in this module.

use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema for the directory, versioned entities and reviews, in `SQLite`
/// syntax.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

fn apply_pragma(conn: &mut SqliteConnection, statement: &str) -> Result<(), PersistenceError> {
    diesel::sql_query(statement)
        .execute(conn)
        .map(|_| ())
        .map_err(|e| PersistenceError::QueryFailed(format!("{statement}: {e}")))
}

/// Opens `database_url`, enables foreign keys and applies pending
/// migrations.
///
/// `database_url` is a file path or a `file:` URI such as a shared
/// in-memory database.
///
/// # Errors
///
/// Returns an error if the connection cannot be opened, the pragma fails,
/// or a migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    debug!(database_url, "Opening SQLite database");
    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    apply_pragma(&mut conn, "PRAGMA foreign_keys = ON")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    info!(database_url, "SQLite schema is up to date");

    Ok(conn)
}

/// Tunes a file database for one writer alongside concurrent readers.
///
/// # Errors
///
/// Returns an error if either pragma fails.
pub fn configure_file_database(
    conn: &mut SqliteConnection,
    busy_timeout_ms: u32,
) -> Result<(), PersistenceError> {
    apply_pragma(conn, "PRAGMA journal_mode = WAL")?;
    apply_pragma(conn, &format!("PRAGMA busy_timeout = {busy_timeout_ms}"))
}

/// Confirms that the connection enforces foreign keys.
///
/// # Errors
///
/// Returns `ForeignKeyEnforcementNotEnabled` if enforcement is off, or a
/// database error if the pragma cannot be read.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: ForeignKeysPragma = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;
    if pragma.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("SQLite foreign key enforcement is active");
    Ok(())
}
