// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Every multi-statement mutation runs inside a single Diesel transaction, so a
//! failed step leaves nothing behind.
//!
//! ## Module Organization
//!
//! - `directory`: Employees, organizations, responsibles and seeding
//! - `tenders`: Tender creation, edit and rollback
//! - `bids`: Bid creation, edit and rollback
//! - `reviews`: Review creation

pub mod bids;
pub mod directory;
pub mod reviews;
pub mod tenders;

use num_traits::ToPrimitive;
use tenderbid_domain::{EntityKind, Version};
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::warn;

use crate::error::PersistenceError;

// Re-export backend-specific mutation functions used by lib.rs
pub use bids::{
    create_bid_mysql, create_bid_sqlite, edit_bid_mysql, edit_bid_sqlite, rollback_bid_mysql,
    rollback_bid_sqlite,
};
pub use directory::{
    add_organization_responsible_mysql, add_organization_responsible_sqlite,
    create_employee_mysql, create_employee_sqlite, create_organization_mysql,
    create_organization_sqlite, seed_directory_mysql, seed_directory_sqlite,
};
pub use reviews::{add_review_mysql, add_review_sqlite};
pub use tenders::{
    create_tender_mysql, create_tender_sqlite, edit_tender_mysql, edit_tender_sqlite,
    rollback_tender_mysql, rollback_tender_sqlite,
};

/// Attempts an edit makes before giving up on a contended version number.
pub const MAX_EDIT_ATTEMPTS: u32 = 3;

/// Runs `edit` until it succeeds, fails with something other than a version
/// conflict, or has been attempted [`MAX_EDIT_ATTEMPTS`] times.
///
/// Each call of `edit` must be a complete transaction that reads the current
/// maximum version afresh.
///
/// # Errors
///
/// Returns the last `VersionConflict`, or the first other error.
pub fn retry_on_version_conflict<T, F>(mut edit: F) -> Result<T, PersistenceError>
where
    F: FnMut() -> Result<T, PersistenceError>,
{
    let mut attempt: u32 = 1;
    loop {
        match edit() {
            Err(PersistenceError::VersionConflict {
                entity,
                id,
                version,
            }) if attempt < MAX_EDIT_ATTEMPTS => {
                warn!(
                    %entity,
                    id = %id,
                    version,
                    attempt,
                    "Version number taken by a concurrent edit, retrying"
                );
                attempt += 1;
            }
            result => return result,
        }
    }
}

/// Returns the current UTC time as an RFC 3339 string with microseconds.
///
/// The fixed width keeps lexical and chronological order identical.
pub(crate) fn current_timestamp() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
        ))
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}

/// Generates a new row identifier.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Converts a version into its stored integer form.
///
/// A version beyond the storage range cannot exist, so it is reported as
/// missing.
pub(crate) fn stored_version(
    entity: EntityKind,
    id: &str,
    version: Version,
) -> Result<i32, PersistenceError> {
    version
        .value()
        .to_i32()
        .ok_or_else(|| PersistenceError::VersionNotFound {
            entity,
            id: id.to_string(),
            version: version.value(),
        })
}

/// Maps a failed version insert, turning a unique violation on
/// `(entity_id, version)` into `VersionConflict`.
pub(crate) fn version_insert_error(
    err: diesel::result::Error,
    entity: EntityKind,
    id: &str,
    version: Version,
) -> PersistenceError {
    match err {
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        ) => PersistenceError::VersionConflict {
            entity,
            id: id.to_string(),
            version: version.value(),
        },
        other => other.into(),
    }
}

/// Computes the version that follows the stored maximum.
pub(crate) fn next_version(
    entity: EntityKind,
    id: &str,
    current_max: i32,
) -> Result<Version, PersistenceError> {
    let current: Version = Version::new(i64::from(current_max)).map_err(|e| {
        PersistenceError::InvalidStoredValue(format!("{entity} {id} has version {current_max}: {e}"))
    })?;
    current.next().ok_or_else(|| {
        PersistenceError::InvalidStoredValue(format!("{entity} {id} has no version after {current}"))
    })
}
