// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the tender/bid backend.
//!
//! Tenders and bids are versioned entities: an immutable header plus an
//! append-only sequence of `(name, description)` version rows. This crate
//! holds the plain data types shared by every layer, the closed
//! enumerations stored in the database, and the pure field validation
//! applied before anything reaches storage.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod authorization;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use authorization::{CreatorAuthorization, NotAuthorizedReason};
pub use error::DomainError;
pub use types::{
    Bid, Employee, EntityKind, EntityStatus, NewBid, NewTender, Organization, OrganizationType,
    Review, Tender, Version, VersionContent,
};
pub use validation::{
    MAX_COMMENT_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_SERVICE_TYPE_LENGTH,
    MAX_USERNAME_LENGTH, validate_identifier, validate_new_bid, validate_new_tender,
    validate_review_comment, validate_service_type, validate_username, validate_version_content,
};
