// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bid queries, mirroring the tender queries over `bid` and `bid_version`.

use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::Bid;
use tracing::debug;

use super::stored_versions_to_u32;
use crate::data_models::{BidFilter, LatestBidRow};
use crate::diesel_schema::{bid, bid_version};
use crate::error::PersistenceError;

const LIST_LATEST_BIDS_SQL: &str = "\
    SELECT b.id, v.name, v.description, b.tender_id, b.status, \
           b.organization_id, b.creator_username, v.version \
    FROM bid b \
    INNER JOIN bid_version v ON v.bid_id = b.id \
    WHERE v.version = (SELECT MAX(v2.version) FROM bid_version v2 WHERE v2.bid_id = b.id) \
      AND (? IS NULL OR b.tender_id = ?) \
      AND (? IS NULL OR b.creator_username = ?) \
    ORDER BY b.created_at ASC, b.id ASC";

const GET_LATEST_BID_SQL: &str = "\
    SELECT b.id, v.name, v.description, b.tender_id, b.status, \
           b.organization_id, b.creator_username, v.version \
    FROM bid b \
    INNER JOIN bid_version v ON v.bid_id = b.id \
    WHERE v.version = (SELECT MAX(v2.version) FROM bid_version v2 WHERE v2.bid_id = b.id) \
      AND b.id = ?";

backend_fn! {
/// Lists the latest snapshot of every bid matching `filter`, ordered by bid
/// creation time, then id.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored value is
/// invalid.
pub fn list_bids(conn: &mut _, filter: &BidFilter) -> Result<Vec<Bid>, PersistenceError> {
    debug!(?filter, "Listing bids");

    let tender_id: Option<&str> = filter.tender_id.as_deref();
    let creator_username: Option<&str> = filter.creator_username.as_deref();

    let rows: Vec<LatestBidRow> = diesel::sql_query(LIST_LATEST_BIDS_SQL)
        .bind::<Nullable<Text>, _>(tender_id)
        .bind::<Nullable<Text>, _>(tender_id)
        .bind::<Nullable<Text>, _>(creator_username)
        .bind::<Nullable<Text>, _>(creator_username)
        .load(conn)?;

    rows.into_iter().map(Bid::try_from).collect()
}
}

backend_fn! {
/// Returns the latest snapshot of bid `id`.
///
/// # Errors
///
/// Returns `BidNotFound` if the bid does not exist.
pub fn get_bid(conn: &mut _, id: &str) -> Result<Bid, PersistenceError> {
    let row: Option<LatestBidRow> = diesel::sql_query(GET_LATEST_BID_SQL)
        .bind::<Text, _>(id)
        .get_result(conn)
        .optional()?;

    row.map_or_else(
        || Err(PersistenceError::BidNotFound(id.to_string())),
        Bid::try_from,
    )
}
}

backend_fn! {
/// Lists the version numbers stored for bid `id` in ascending order.
///
/// # Errors
///
/// Returns `BidNotFound` if the bid does not exist.
pub fn list_bid_versions(conn: &mut _, id: &str) -> Result<Vec<u32>, PersistenceError> {
    let exists: bool =
        diesel::select(diesel::dsl::exists(bid::table.find(id))).get_result(conn)?;
    if !exists {
        return Err(PersistenceError::BidNotFound(id.to_string()));
    }

    let versions: Vec<i32> = bid_version::table
        .filter(bid_version::bid_id.eq(id))
        .select(bid_version::version)
        .order(bid_version::version.asc())
        .load(conn)?;

    stored_versions_to_u32(versions)
}
}
