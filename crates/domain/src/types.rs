// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status carried in the immutable header of tenders and bids.
///
/// The status is fixed at creation time. Edits and rollbacks only touch the
/// versioned `(name, description)` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    /// Freshly created, not yet visible to other organizations.
    #[default]
    Created,
    /// Published and open for bids or review.
    Published,
    /// Withdrawn by its owner.
    Canceled,
}

impl EntityStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Published => "PUBLISHED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl FromStr for EntityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(Self::Created),
            "PUBLISHED" => Ok(Self::Published),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Legal form of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationType {
    /// Individual entrepreneur.
    #[serde(rename = "IE")]
    IndividualEntrepreneur,
    /// Limited liability company.
    #[serde(rename = "LLC")]
    LimitedLiabilityCompany,
    /// Joint stock company.
    #[serde(rename = "JSC")]
    JointStockCompany,
}

impl OrganizationType {
    /// Converts this organization type to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IndividualEntrepreneur => "IE",
            Self::LimitedLiabilityCompany => "LLC",
            Self::JointStockCompany => "JSC",
        }
    }
}

impl FromStr for OrganizationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IE" => Ok(Self::IndividualEntrepreneur),
            "LLC" => Ok(Self::LimitedLiabilityCompany),
            "JSC" => Ok(Self::JointStockCompany),
            _ => Err(DomainError::InvalidOrganizationType(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two kinds of versioned entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Tender,
    Bid,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tender => "tender",
            Self::Bid => "bid",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A version number of a versioned entity.
///
/// Versions of one entity form the dense sequence `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u32);

impl Version {
    /// The version assigned at creation.
    pub const FIRST: Self = Self(1);

    /// Creates a version from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVersion` if `raw` is below 1 or does not
    /// fit a `u32`.
    pub fn new(raw: i64) -> Result<Self, DomainError> {
        match u32::try_from(raw) {
            Ok(value) if value >= 1 => Ok(Self(value)),
            _ => Err(DomainError::InvalidVersion(raw)),
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the version that follows this one, or `None` on overflow.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mutable, versioned part of a tender or bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionContent {
    pub name: String,
    pub description: String,
}

impl VersionContent {
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// A registered employee. Created out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// An organization that publishes tenders or places bids. Created out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub organization_type: OrganizationType,
}

/// Header fields and initial content of a tender about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTender {
    pub service_type: String,
    pub status: EntityStatus,
    pub organization_id: String,
    pub creator_username: String,
    pub content: VersionContent,
}

/// The current snapshot of a tender: its header merged with one version row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: String,
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub status: EntityStatus,
    pub organization_id: String,
    pub creator_username: String,
    pub version: Version,
}

/// Header fields and initial content of a bid about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBid {
    pub tender_id: String,
    pub status: EntityStatus,
    pub organization_id: String,
    pub creator_username: String,
    pub content: VersionContent,
}

/// The current snapshot of a bid: its header merged with one version row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: EntityStatus,
    pub tender_id: String,
    pub organization_id: String,
    pub creator_username: String,
    pub version: Version,
}

/// A review left on a bid. Reviews are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub bid_id: String,
    pub creator_username: String,
    pub comment: String,
    pub created_at: String,
}
