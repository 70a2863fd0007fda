// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tender mutations: creation, edit-as-new-version and rollback.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::{EntityKind, NewTender, Tender, Version, VersionContent};
use tracing::info;

use super::{current_timestamp, new_id, next_version, stored_version, version_insert_error};
use crate::data_models::{NewTenderRow, NewTenderVersionRow, TenderHeaderRow, TenderVersionRow};
use crate::diesel_schema::{tender, tender_version};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a tender header and its version 1.
///
/// Both inserts run in one transaction.
///
/// # Errors
///
/// Returns an error if either insert fails.
pub fn create_tender(conn: &mut _, new_tender: &NewTender) -> Result<Tender, PersistenceError> {
    conn.transaction(|conn| {
        let id: String = new_id();
        let created_at: String = current_timestamp()?;
        let status: &str = new_tender.status.as_str();

        diesel::insert_into(tender::table)
            .values(&NewTenderRow {
                id: &id,
                service_type: &new_tender.service_type,
                status,
                organization_id: &new_tender.organization_id,
                creator_username: &new_tender.creator_username,
                created_at: &created_at,
            })
            .execute(conn)?;

        let version_id: String = new_id();
        diesel::insert_into(tender_version::table)
            .values(&NewTenderVersionRow {
                id: &version_id,
                tender_id: &id,
                name: &new_tender.content.name,
                description: &new_tender.content.description,
                version: 1,
                created_at: &created_at,
            })
            .execute(conn)?;

        info!(
            tender_id = %id,
            organization_id = %new_tender.organization_id,
            creator = %new_tender.creator_username,
            "Created tender"
        );

        Ok(Tender {
            id,
            name: new_tender.content.name.clone(),
            description: new_tender.content.description.clone(),
            service_type: new_tender.service_type.clone(),
            status: new_tender.status,
            organization_id: new_tender.organization_id.clone(),
            creator_username: new_tender.creator_username.clone(),
            version: Version::FIRST,
        })
    })
}
}

backend_fn! {
/// Appends version `max + 1` with `content` to tender `id`.
///
/// The result is the header merged with the supplied content, not a
/// re-read of the version table.
///
/// # Errors
///
/// Returns `TenderNotFound` if the tender or its versions are missing,
/// `VersionConflict` if the next version number was claimed concurrently,
/// or `EditFailed` if the insert wrote no row.
pub fn edit_tender(
    conn: &mut _,
    id: &str,
    content: &VersionContent,
) -> Result<Tender, PersistenceError> {
    conn.transaction(|conn| {
        let header: TenderHeaderRow = tender::table
            .find(id)
            .select(TenderHeaderRow::as_select())
            .first(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::TenderNotFound(id.to_string()))?;

        let current_max: i32 = tender_version::table
            .filter(tender_version::tender_id.eq(id))
            .select(diesel::dsl::max(tender_version::version))
            .first::<Option<i32>>(conn)?
            .ok_or_else(|| PersistenceError::TenderNotFound(id.to_string()))?;

        let next: Version = next_version(EntityKind::Tender, id, current_max)?;
        let stored_next: i32 = stored_version(EntityKind::Tender, id, next)?;
        let version_id: String = new_id();
        let created_at: String = current_timestamp()?;

        let inserted: usize = diesel::insert_into(tender_version::table)
            .values(&NewTenderVersionRow {
                id: &version_id,
                tender_id: id,
                name: &content.name,
                description: &content.description,
                version: stored_next,
                created_at: &created_at,
            })
            .execute(conn)
            .map_err(|e| version_insert_error(e, EntityKind::Tender, id, next))?;

        if inserted == 0 {
            return Err(PersistenceError::EditFailed {
                entity: EntityKind::Tender,
                id: id.to_string(),
            });
        }

        info!(tender_id = id, version = next.value(), "Edited tender");

        header.into_tender(content.clone(), stored_next)
    })
}
}

backend_fn! {
/// Rolls tender `id` back to `version`.
///
/// Deletes every version row above `version` and returns the header merged
/// with the target row. Existence check, delete and read-back share one
/// transaction.
///
/// # Errors
///
/// Returns `TenderNotFound` for an unknown tender or `VersionNotFound` if
/// the target version does not exist.
pub fn rollback_tender(
    conn: &mut _,
    id: &str,
    version: Version,
) -> Result<Tender, PersistenceError> {
    conn.transaction(|conn| {
        let header: TenderHeaderRow = tender::table
            .find(id)
            .select(TenderHeaderRow::as_select())
            .first(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::TenderNotFound(id.to_string()))?;

        let target: i32 = stored_version(EntityKind::Tender, id, version)?;

        let target_exists: bool = diesel::select(diesel::dsl::exists(
            tender_version::table
                .filter(tender_version::tender_id.eq(id))
                .filter(tender_version::version.eq(target)),
        ))
        .get_result(conn)?;
        if !target_exists {
            return Err(PersistenceError::VersionNotFound {
                entity: EntityKind::Tender,
                id: id.to_string(),
                version: version.value(),
            });
        }

        let deleted: usize = diesel::delete(
            tender_version::table
                .filter(tender_version::tender_id.eq(id))
                .filter(tender_version::version.gt(target)),
        )
        .execute(conn)?;

        let row: TenderVersionRow = tender_version::table
            .filter(tender_version::tender_id.eq(id))
            .filter(tender_version::version.eq(target))
            .select(TenderVersionRow::as_select())
            .first(conn)?;

        info!(tender_id = id, version = target, deleted, "Rolled back tender");

        header.into_tender(
            VersionContent {
                name: row.name,
                description: row.description,
            },
            row.version,
        )
    })
}
}
