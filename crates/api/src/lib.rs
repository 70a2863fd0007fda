// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the tender/bid backend.
//!
//! This crate sits between the HTTP shell and the persistence layer. It
//! validates request DTOs, runs the creator authorization check before any
//! creation, and translates domain and persistence errors into [`ApiError`].
//! Every operation takes the persistence adapter explicitly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod edit_payload;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use edit_payload::{ALLOWED_EDIT_FIELDS, EditPayloadError, parse_edit_body, parse_edit_payload};
pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    add_review, create_bid, create_tender, edit_bid, edit_tender, list_bids_by_tender,
    list_bids_by_user, list_tenders, list_tenders_by_user, query_reviews, rollback_bid,
    rollback_tender,
};
pub use request_response::{
    CreateBidRequest, CreateReviewRequest, CreateTenderRequest, EditEntityRequest,
    ReviewQueryRequest,
};
