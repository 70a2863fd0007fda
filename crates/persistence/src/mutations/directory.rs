// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory mutations.
//!
//! Employees, organizations and responsibles are created out of band: by
//! tests, or by the seed document loaded at server startup. No HTTP route
//! writes to these tables.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tenderbid_domain::{Employee, Organization, OrganizationType};
use tracing::{debug, info};

use super::{current_timestamp, new_id};
use crate::data_models::{
    DirectorySeed, NewEmployeeRow, NewOrganizationResponsibleRow, NewOrganizationRow,
    SeededDirectory,
};
use crate::diesel_schema::{employee, organization, organization_responsible};
use crate::error::PersistenceError;

backend_fn! {
/// Registers an employee.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The unique username
/// * `first_name` - Optional first name
/// * `last_name` - Optional last name
///
/// # Errors
///
/// Returns an error if the username already exists or the insert fails.
pub fn create_employee(
    conn: &mut _,
    username: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Employee, PersistenceError> {
    let id: String = new_id();
    let created_at: String = current_timestamp()?;

    diesel::insert_into(employee::table)
        .values(&NewEmployeeRow {
            id: &id,
            username,
            first_name,
            last_name,
            created_at: &created_at,
        })
        .execute(conn)?;

    info!(employee_id = %id, username, "Created employee");

    Ok(Employee {
        id,
        username: username.to_string(),
        first_name: first_name.map(str::to_string),
        last_name: last_name.map(str::to_string),
    })
}
}

backend_fn! {
/// Registers an organization.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_organization(
    conn: &mut _,
    name: &str,
    description: Option<&str>,
    organization_type: OrganizationType,
) -> Result<Organization, PersistenceError> {
    let id: String = new_id();
    let created_at: String = current_timestamp()?;

    diesel::insert_into(organization::table)
        .values(&NewOrganizationRow {
            id: &id,
            name,
            description,
            organization_type: organization_type.as_str(),
            created_at: &created_at,
        })
        .execute(conn)?;

    info!(organization_id = %id, name, %organization_type, "Created organization");

    Ok(Organization {
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        organization_type,
    })
}
}

backend_fn! {
/// Makes an employee a responsible of an organization.
///
/// # Errors
///
/// Returns `EmployeeNotFound` if no employee has `username`,
/// `OrganizationNotFound` if the organization does not exist, or a database
/// error if the membership already exists.
pub fn add_organization_responsible(
    conn: &mut _,
    organization_id: &str,
    username: &str,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        let user_id: String = employee::table
            .filter(employee::username.eq(username))
            .select(employee::id)
            .first::<String>(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::EmployeeNotFound(username.to_string()))?;

        let organization_exists: bool =
            diesel::select(diesel::dsl::exists(organization::table.find(organization_id)))
                .get_result(conn)?;
        if !organization_exists {
            return Err(PersistenceError::OrganizationNotFound(
                organization_id.to_string(),
            ));
        }

        let id: String = new_id();
        diesel::insert_into(organization_responsible::table)
            .values(&NewOrganizationResponsibleRow {
                id: &id,
                organization_id,
                user_id: &user_id,
            })
            .execute(conn)?;

        debug!(organization_id, username, "Added organization responsible");
        Ok(())
    })
}
}

backend_fn! {
/// Loads a directory seed.
///
/// Employees are inserted first so that responsibles can refer to them by
/// username. The whole seed is one transaction.
///
/// # Errors
///
/// Returns `EmployeeNotFound` if a responsible names a username that is
/// neither seeded nor already registered, or a database error if any insert
/// fails.
pub fn seed_directory(
    conn: &mut _,
    seed: &DirectorySeed,
) -> Result<SeededDirectory, PersistenceError> {
    conn.transaction(|conn| {
        let created_at: String = current_timestamp()?;
        let mut seeded = SeededDirectory::default();

        for entry in &seed.employees {
            let id: String = new_id();
            diesel::insert_into(employee::table)
                .values(&NewEmployeeRow {
                    id: &id,
                    username: &entry.username,
                    first_name: entry.first_name.as_deref(),
                    last_name: entry.last_name.as_deref(),
                    created_at: &created_at,
                })
                .execute(conn)?;
            seeded.employees.push(Employee {
                id,
                username: entry.username.clone(),
                first_name: entry.first_name.clone(),
                last_name: entry.last_name.clone(),
            });
        }

        for entry in &seed.organizations {
            let organization_id: String = new_id();
            diesel::insert_into(organization::table)
                .values(&NewOrganizationRow {
                    id: &organization_id,
                    name: &entry.name,
                    description: entry.description.as_deref(),
                    organization_type: entry.organization_type.as_str(),
                    created_at: &created_at,
                })
                .execute(conn)?;

            for username in &entry.responsibles {
                let user_id: String = employee::table
                    .filter(employee::username.eq(username))
                    .select(employee::id)
                    .first::<String>(conn)
                    .optional()?
                    .ok_or_else(|| PersistenceError::EmployeeNotFound(username.clone()))?;
                let id: String = new_id();
                diesel::insert_into(organization_responsible::table)
                    .values(&NewOrganizationResponsibleRow {
                        id: &id,
                        organization_id: &organization_id,
                        user_id: &user_id,
                    })
                    .execute(conn)?;
                seeded.responsible_count += 1;
            }

            seeded.organizations.push(Organization {
                id: organization_id,
                name: entry.name.clone(),
                description: entry.description.clone(),
                organization_type: entry.organization_type,
            });
        }

        info!(
            employees = seeded.employees.len(),
            organizations = seeded.organizations.len(),
            responsibles = seeded.responsible_count,
            "Seeded directory"
        );

        Ok(seeded)
    })
}
}
