// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request data transfer objects.
//!
//! Responses are the domain snapshots themselves (`Tender`, `Bid`, `Review`),
//! which already serialize in the wire shape.

use serde::{Deserialize, Serialize};
use tenderbid_domain::EntityStatus;

/// API request to create a tender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenderRequest {
    /// The initial tender name.
    pub name: String,
    /// The initial tender description.
    #[serde(default)]
    pub description: String,
    /// The kind of service being procured.
    pub service_type: String,
    /// The initial status. Defaults to `CREATED`.
    #[serde(default)]
    pub status: Option<EntityStatus>,
    /// The publishing organization.
    pub organization_id: String,
    /// The employee creating the tender.
    pub creator_username: String,
}

/// API request to create a bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidRequest {
    /// The initial bid name.
    pub name: String,
    /// The initial bid description.
    #[serde(default)]
    pub description: String,
    /// The tender the bid answers.
    pub tender_id: String,
    /// The initial status. Defaults to `CREATED`.
    #[serde(default)]
    pub status: Option<EntityStatus>,
    /// The bidding organization.
    pub organization_id: String,
    /// The employee placing the bid.
    pub creator_username: String,
}

/// The only fields an edit may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEntityRequest {
    pub name: String,
    pub description: String,
}

/// API request to leave a review on a bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// The reviewing employee.
    pub creator_username: String,
    /// The review text.
    pub comment: String,
}

/// API request selecting reviews.
///
/// All three fields are required. They are optional here so that a missing
/// one is reported as a validation error naming the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQueryRequest {
    pub tender_id: Option<String>,
    pub organization_id: Option<String>,
    pub author_username: Option<String>,
}
