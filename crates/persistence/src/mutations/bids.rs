// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bid mutations.
//!
//! Bids follow the same header plus version-row layout as tenders, keyed by
//! bid id in `bid_version`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::{Bid, EntityKind, NewBid, Version, VersionContent};
use tracing::info;

use super::{current_timestamp, new_id, next_version, stored_version, version_insert_error};
use crate::data_models::{BidHeaderRow, BidVersionRow, NewBidRow, NewBidVersionRow};
use crate::diesel_schema::{bid, bid_version, tender};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a bid header and its version 1 in one transaction.
///
/// # Errors
///
/// Returns `TenderNotFound` if the referenced tender does not exist, or an
/// error if either insert fails.
pub fn create_bid(conn: &mut _, new_bid: &NewBid) -> Result<Bid, PersistenceError> {
    conn.transaction(|conn| {
        let tender_exists: bool =
            diesel::select(diesel::dsl::exists(tender::table.find(&new_bid.tender_id)))
                .get_result(conn)?;
        if !tender_exists {
            return Err(PersistenceError::TenderNotFound(new_bid.tender_id.clone()));
        }

        let id: String = new_id();
        let created_at: String = current_timestamp()?;

        diesel::insert_into(bid::table)
            .values(&NewBidRow {
                id: &id,
                tender_id: &new_bid.tender_id,
                status: new_bid.status.as_str(),
                organization_id: &new_bid.organization_id,
                creator_username: &new_bid.creator_username,
                created_at: &created_at,
            })
            .execute(conn)?;

        let version_id: String = new_id();
        diesel::insert_into(bid_version::table)
            .values(&NewBidVersionRow {
                id: &version_id,
                bid_id: &id,
                name: &new_bid.content.name,
                description: &new_bid.content.description,
                version: 1,
                created_at: &created_at,
            })
            .execute(conn)?;

        info!(
            bid_id = %id,
            tender_id = %new_bid.tender_id,
            organization_id = %new_bid.organization_id,
            "Created bid"
        );

        Ok(Bid {
            id,
            name: new_bid.content.name.clone(),
            description: new_bid.content.description.clone(),
            status: new_bid.status,
            tender_id: new_bid.tender_id.clone(),
            organization_id: new_bid.organization_id.clone(),
            creator_username: new_bid.creator_username.clone(),
            version: Version::FIRST,
        })
    })
}
}

backend_fn! {
/// Appends version `max + 1` with `content` to bid `id`.
///
/// # Errors
///
/// Returns `BidNotFound` if the bid or its versions are missing,
/// `VersionConflict` if the next version number was claimed concurrently,
/// or `EditFailed` if the insert wrote no row.
pub fn edit_bid(
    conn: &mut _,
    id: &str,
    content: &VersionContent,
) -> Result<Bid, PersistenceError> {
    conn.transaction(|conn| {
        let header: BidHeaderRow = bid::table
            .find(id)
            .select(BidHeaderRow::as_select())
            .first(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::BidNotFound(id.to_string()))?;

        let current_max: i32 = bid_version::table
            .filter(bid_version::bid_id.eq(id))
            .select(diesel::dsl::max(bid_version::version))
            .first::<Option<i32>>(conn)?
            .ok_or_else(|| PersistenceError::BidNotFound(id.to_string()))?;

        let next: Version = next_version(EntityKind::Bid, id, current_max)?;
        let stored_next: i32 = stored_version(EntityKind::Bid, id, next)?;
        let version_id: String = new_id();
        let created_at: String = current_timestamp()?;

        let inserted: usize = diesel::insert_into(bid_version::table)
            .values(&NewBidVersionRow {
                id: &version_id,
                bid_id: id,
                name: &content.name,
                description: &content.description,
                version: stored_next,
                created_at: &created_at,
            })
            .execute(conn)
            .map_err(|e| version_insert_error(e, EntityKind::Bid, id, next))?;

        if inserted == 0 {
            return Err(PersistenceError::EditFailed {
                entity: EntityKind::Bid,
                id: id.to_string(),
            });
        }

        info!(bid_id = id, version = next.value(), "Edited bid");

        header.into_bid(content.clone(), stored_next)
    })
}
}

backend_fn! {
/// Rolls bid `id` back to `version`, deleting every later version row.
///
/// # Errors
///
/// Returns `BidNotFound` for an unknown bid or `VersionNotFound` if the
/// target version does not exist.
pub fn rollback_bid(conn: &mut _, id: &str, version: Version) -> Result<Bid, PersistenceError> {
    conn.transaction(|conn| {
        let header: BidHeaderRow = bid::table
            .find(id)
            .select(BidHeaderRow::as_select())
            .first(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::BidNotFound(id.to_string()))?;

        let target: i32 = stored_version(EntityKind::Bid, id, version)?;

        let target_exists: bool = diesel::select(diesel::dsl::exists(
            bid_version::table
                .filter(bid_version::bid_id.eq(id))
                .filter(bid_version::version.eq(target)),
        ))
        .get_result(conn)?;
        if !target_exists {
            return Err(PersistenceError::VersionNotFound {
                entity: EntityKind::Bid,
                id: id.to_string(),
                version: version.value(),
            });
        }

        let deleted: usize = diesel::delete(
            bid_version::table
                .filter(bid_version::bid_id.eq(id))
                .filter(bid_version::version.gt(target)),
        )
        .execute(conn)?;

        let row: BidVersionRow = bid_version::table
            .filter(bid_version::bid_id.eq(id))
            .filter(bid_version::version.eq(target))
            .select(BidVersionRow::as_select())
            .first(conn)?;

        info!(bid_id = id, version = target, deleted, "Rolled back bid");

        header.into_bid(
            VersionContent {
                name: row.name,
                description: row.description,
            },
            row.version,
        )
    })
}
}
