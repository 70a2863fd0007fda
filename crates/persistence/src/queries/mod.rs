// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `directory`: Employee lookups
//! - `authorization`: The creator authorization check
//! - `tenders`: Latest-version tender listings and version history
//! - `bids`: Latest-version bid listings and version history
//! - `reviews`: Filtered review queries
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod authorization;
pub mod bids;
pub mod directory;
pub mod reviews;
pub mod tenders;

use num_traits::ToPrimitive;

use crate::error::PersistenceError;

// Re-export backend-specific query functions used by lib.rs
pub use authorization::{check_creator_authorization_mysql, check_creator_authorization_sqlite};
pub use bids::{
    get_bid_mysql, get_bid_sqlite, list_bid_versions_mysql, list_bid_versions_sqlite,
    list_bids_mysql, list_bids_sqlite,
};
pub use directory::{get_employee_by_username_mysql, get_employee_by_username_sqlite};
pub use reviews::{query_reviews_mysql, query_reviews_sqlite};
pub use tenders::{
    get_tender_mysql, get_tender_sqlite, list_tender_versions_mysql, list_tender_versions_sqlite,
    list_tenders_mysql, list_tenders_sqlite,
};

/// Converts stored version numbers to their unsigned form.
pub(crate) fn stored_versions_to_u32(versions: Vec<i32>) -> Result<Vec<u32>, PersistenceError> {
    versions
        .into_iter()
        .map(|v| {
            v.to_u32()
                .ok_or_else(|| PersistenceError::InvalidStoredValue(format!("version {v}")))
        })
        .collect()
}
