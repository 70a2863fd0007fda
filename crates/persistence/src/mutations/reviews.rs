// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::Review;
use tracing::info;

use super::{current_timestamp, new_id};
use crate::data_models::NewReviewRow;
use crate::diesel_schema::{bid, employee, review};
use crate::error::PersistenceError;

backend_fn! {
/// Leaves a review on a bid.
///
/// Reviews are append-only and carry no version history.
///
/// # Errors
///
/// Returns `BidNotFound` if the bid does not exist, `EmployeeNotFound` if
/// no employee has `creator_username`, or a database error if the insert
/// fails.
pub fn add_review(
    conn: &mut _,
    bid_id: &str,
    creator_username: &str,
    comment: &str,
) -> Result<Review, PersistenceError> {
    conn.transaction(|conn| {
        let bid_exists: bool =
            diesel::select(diesel::dsl::exists(bid::table.find(bid_id))).get_result(conn)?;
        if !bid_exists {
            return Err(PersistenceError::BidNotFound(bid_id.to_string()));
        }

        let employee_exists: bool = diesel::select(diesel::dsl::exists(
            employee::table.filter(employee::username.eq(creator_username)),
        ))
        .get_result(conn)?;
        if !employee_exists {
            return Err(PersistenceError::EmployeeNotFound(
                creator_username.to_string(),
            ));
        }

        let id: String = new_id();
        let created_at: String = current_timestamp()?;

        diesel::insert_into(review::table)
            .values(&NewReviewRow {
                id: &id,
                bid_id,
                creator_username,
                comment,
                created_at: &created_at,
            })
            .execute(conn)?;

        info!(review_id = %id, bid_id, creator = creator_username, "Added review");

        Ok(Review {
            id,
            bid_id: bid_id.to_string(),
            creator_username: creator_username.to_string(),
            comment: comment.to_string(),
            created_at,
        })
    })
}
}
