// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tender queries.
//!
//! Listings join every header with exactly its highest version row through a
//! correlated `MAX` subquery. The query is written as raw SQL because the
//! correlated subquery has no portable Diesel DSL form across both backends;
//! every value is still passed as a bind parameter.

use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::Tender;
use tracing::debug;

use super::stored_versions_to_u32;
use crate::data_models::{LatestTenderRow, TenderFilter};
use crate::diesel_schema::{tender, tender_version};
use crate::error::PersistenceError;

/// Latest snapshot of each tender, filtered by optional service type and
/// creator. A `NULL` bind disables its filter.
const LIST_LATEST_TENDERS_SQL: &str = "\
    SELECT t.id, v.name, v.description, t.service_type, t.status, \
           t.organization_id, t.creator_username, v.version \
    FROM tender t \
    INNER JOIN tender_version v ON v.tender_id = t.id \
    WHERE v.version = (SELECT MAX(v2.version) FROM tender_version v2 WHERE v2.tender_id = t.id) \
      AND (? IS NULL OR t.service_type = ?) \
      AND (? IS NULL OR t.creator_username = ?) \
    ORDER BY t.created_at ASC, t.id ASC";

/// Latest snapshot of one tender.
const GET_LATEST_TENDER_SQL: &str = "\
    SELECT t.id, v.name, v.description, t.service_type, t.status, \
           t.organization_id, t.creator_username, v.version \
    FROM tender t \
    INNER JOIN tender_version v ON v.tender_id = t.id \
    WHERE v.version = (SELECT MAX(v2.version) FROM tender_version v2 WHERE v2.tender_id = t.id) \
      AND t.id = ?";

backend_fn! {
/// Lists the latest snapshot of every tender matching `filter`.
///
/// Results are ordered by tender creation time, then id. No match yields an
/// empty list.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored value is
/// invalid.
pub fn list_tenders(conn: &mut _, filter: &TenderFilter) -> Result<Vec<Tender>, PersistenceError> {
    debug!(?filter, "Listing tenders");

    let service_type: Option<&str> = filter.service_type.as_deref();
    let creator_username: Option<&str> = filter.creator_username.as_deref();

    let rows: Vec<LatestTenderRow> = diesel::sql_query(LIST_LATEST_TENDERS_SQL)
        .bind::<Nullable<Text>, _>(service_type)
        .bind::<Nullable<Text>, _>(service_type)
        .bind::<Nullable<Text>, _>(creator_username)
        .bind::<Nullable<Text>, _>(creator_username)
        .load(conn)?;

    rows.into_iter().map(Tender::try_from).collect()
}
}

backend_fn! {
/// Returns the latest snapshot of tender `id`.
///
/// # Errors
///
/// Returns `TenderNotFound` if the tender does not exist.
pub fn get_tender(conn: &mut _, id: &str) -> Result<Tender, PersistenceError> {
    let row: Option<LatestTenderRow> = diesel::sql_query(GET_LATEST_TENDER_SQL)
        .bind::<Text, _>(id)
        .get_result(conn)
        .optional()?;

    row.map_or_else(
        || Err(PersistenceError::TenderNotFound(id.to_string())),
        Tender::try_from,
    )
}
}

backend_fn! {
/// Lists the version numbers stored for tender `id` in ascending order.
///
/// # Errors
///
/// Returns `TenderNotFound` if the tender does not exist.
pub fn list_tender_versions(conn: &mut _, id: &str) -> Result<Vec<u32>, PersistenceError> {
    let exists: bool =
        diesel::select(diesel::dsl::exists(tender::table.find(id))).get_result(conn)?;
    if !exists {
        return Err(PersistenceError::TenderNotFound(id.to_string()));
    }

    let versions: Vec<i32> = tender_version::table
        .filter(tender_version::tender_id.eq(id))
        .select(tender_version::version)
        .order(tender_version::version.asc())
        .load(conn)?;

    stored_versions_to_u32(versions)
}
}
