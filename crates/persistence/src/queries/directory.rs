// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::Employee;
use tracing::debug;

use crate::data_models::EmployeeRow;
use crate::diesel_schema::employee;
use crate::error::PersistenceError;

backend_fn! {
/// Looks up an employee by username.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn get_employee_by_username(
    conn: &mut _,
    username: &str,
) -> Result<Option<Employee>, PersistenceError> {
    debug!(username, "Looking up employee");

    let row: Option<EmployeeRow> = employee::table
        .filter(employee::username.eq(username))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Employee::from))
}
}
