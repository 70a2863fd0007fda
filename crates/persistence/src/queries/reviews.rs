// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::Review;
use tracing::debug;

use crate::data_models::{ReviewQuery, ReviewRow};
use crate::diesel_schema::{bid, review};
use crate::error::PersistenceError;

backend_fn! {
/// Lists reviews authored by `query.author_username` on bids that
/// `query.organization_id` placed against `query.tender_id`.
///
/// Reviews are ordered by creation time, then id.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn query_reviews(conn: &mut _, query: &ReviewQuery) -> Result<Vec<Review>, PersistenceError> {
    debug!(?query, "Querying reviews");

    let rows: Vec<ReviewRow> = review::table
        .inner_join(bid::table)
        .filter(bid::tender_id.eq(&query.tender_id))
        .filter(bid::organization_id.eq(&query.organization_id))
        .filter(review::creator_username.eq(&query.author_username))
        .select(ReviewRow::as_select())
        .order((review::created_at.asc(), review::id.asc()))
        .load(conn)?;

    Ok(rows.into_iter().map(Review::from).collect())
}
}
