// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The creator authorization check.
//!
//! An employee may create tenders and bids for an organization only while an
//! `organization_responsible` row links the two. The check is two lookups;
//! the membership lookup is skipped when the username is unknown.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::{CreatorAuthorization, NotAuthorizedReason};
use tracing::debug;

use crate::diesel_schema::{employee, organization_responsible};
use crate::error::PersistenceError;

backend_fn! {
/// Checks whether `username` is a responsible of `organization_id`.
///
/// # Errors
///
/// Returns an error only if a lookup fails.
pub fn check_creator_authorization(
    conn: &mut _,
    username: &str,
    organization_id: &str,
) -> Result<CreatorAuthorization, PersistenceError> {
    let Some(user_id) = employee::table
        .filter(employee::username.eq(username))
        .select(employee::id)
        .first::<String>(conn)
        .optional()?
    else {
        debug!(username, "Authorization check: unknown employee");
        return Ok(CreatorAuthorization::NotAuthorized(
            NotAuthorizedReason::UnknownEmployee,
        ));
    };

    let is_responsible: bool = diesel::select(diesel::dsl::exists(
        organization_responsible::table
            .filter(organization_responsible::organization_id.eq(organization_id))
            .filter(organization_responsible::user_id.eq(&user_id)),
    ))
    .get_result(conn)?;

    if is_responsible {
        debug!(username, organization_id, "Authorization check: responsible");
        Ok(CreatorAuthorization::Authorized)
    } else {
        debug!(username, organization_id, "Authorization check: not responsible");
        Ok(CreatorAuthorization::NotAuthorized(
            NotAuthorizedReason::NotResponsible,
        ))
    }
}
}
