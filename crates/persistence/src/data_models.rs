// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use serde::Deserialize;
use tenderbid_domain::{
    Bid, Employee, EntityStatus, Organization, OrganizationType, Review, Tender, Version,
    VersionContent,
};

use crate::diesel_schema::{
    bid, bid_version, employee, organization, organization_responsible, review, tender,
    tender_version,
};
use crate::error::PersistenceError;

/// Filter for listing the latest snapshot of tenders.
///
/// `None` fields do not restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenderFilter {
    pub service_type: Option<String>,
    pub creator_username: Option<String>,
}

/// Filter for listing the latest snapshot of bids.
///
/// `None` fields do not restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidFilter {
    pub tender_id: Option<String>,
    pub creator_username: Option<String>,
}

/// Reviews authored by `author_username` on bids that `organization_id`
/// placed against `tender_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    pub tender_id: String,
    pub organization_id: String,
    pub author_username: String,
}

/// Out-of-band directory content loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySeed {
    #[serde(default)]
    pub employees: Vec<EmployeeSeed>,
    #[serde(default)]
    pub organizations: Vec<OrganizationSeed>,
}

impl DirectorySeed {
    /// Parses a seed document.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InitializationError` if the document is not
    /// a valid seed.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSeed {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSeed {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub organization_type: OrganizationType,
    /// Usernames of the employees responsible for this organization.
    #[serde(default)]
    pub responsibles: Vec<String>,
}

/// What a seed created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeededDirectory {
    pub employees: Vec<Employee>,
    pub organizations: Vec<Organization>,
    pub responsible_count: usize,
}

// ============================================================================
// Directory rows
// ============================================================================

#[derive(Insertable)]
#[diesel(table_name = employee)]
pub struct NewEmployeeRow<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub created_at: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = employee)]
pub struct EmployeeRow {
    pub id: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = organization)]
pub struct NewOrganizationRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub organization_type: &'a str,
    pub created_at: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = organization)]
pub struct OrganizationRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub organization_type: String,
}

impl TryFrom<OrganizationRow> for Organization {
    type Error = PersistenceError;

    fn try_from(row: OrganizationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            organization_type: OrganizationType::from_str(&row.organization_type)
                .map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))?,
            id: row.id,
            name: row.name,
            description: row.description,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = organization_responsible)]
pub struct NewOrganizationResponsibleRow<'a> {
    pub id: &'a str,
    pub organization_id: &'a str,
    pub user_id: &'a str,
}

// ============================================================================
// Versioned entity rows
// ============================================================================

#[derive(Insertable)]
#[diesel(table_name = tender)]
pub struct NewTenderRow<'a> {
    pub id: &'a str,
    pub service_type: &'a str,
    pub status: &'a str,
    pub organization_id: &'a str,
    pub creator_username: &'a str,
    pub created_at: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = tender_version)]
pub struct NewTenderVersionRow<'a> {
    pub id: &'a str,
    pub tender_id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub version: i32,
    pub created_at: &'a str,
}

/// Immutable header of a tender.
#[derive(Queryable, Selectable)]
#[diesel(table_name = tender)]
pub struct TenderHeaderRow {
    pub id: String,
    pub service_type: String,
    pub status: String,
    pub organization_id: String,
    pub creator_username: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = tender_version)]
pub struct TenderVersionRow {
    pub name: String,
    pub description: String,
    pub version: i32,
}

impl TenderHeaderRow {
    /// Merges the header with one version's content.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidStoredValue` if the stored status or
    /// version is out of range.
    pub fn into_tender(
        self,
        content: VersionContent,
        version: i32,
    ) -> Result<Tender, PersistenceError> {
        Ok(Tender {
            status: parse_status(&self.status)?,
            version: parse_version(version)?,
            id: self.id,
            name: content.name,
            description: content.description,
            service_type: self.service_type,
            organization_id: self.organization_id,
            creator_username: self.creator_username,
        })
    }
}

/// One row of the latest-version listing: a header joined with its
/// highest version row.
#[derive(QueryableByName)]
pub struct LatestTenderRow {
    #[diesel(sql_type = Text)]
    pub id: String,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub description: String,
    #[diesel(sql_type = Text)]
    pub service_type: String,
    #[diesel(sql_type = Text)]
    pub status: String,
    #[diesel(sql_type = Text)]
    pub organization_id: String,
    #[diesel(sql_type = Text)]
    pub creator_username: String,
    #[diesel(sql_type = Integer)]
    pub version: i32,
}

impl TryFrom<LatestTenderRow> for Tender {
    type Error = PersistenceError;

    fn try_from(row: LatestTenderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_status(&row.status)?,
            version: parse_version(row.version)?,
            id: row.id,
            name: row.name,
            description: row.description,
            service_type: row.service_type,
            organization_id: row.organization_id,
            creator_username: row.creator_username,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = bid)]
pub struct NewBidRow<'a> {
    pub id: &'a str,
    pub tender_id: &'a str,
    pub status: &'a str,
    pub organization_id: &'a str,
    pub creator_username: &'a str,
    pub created_at: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = bid_version)]
pub struct NewBidVersionRow<'a> {
    pub id: &'a str,
    pub bid_id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub version: i32,
    pub created_at: &'a str,
}

/// Immutable header of a bid.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bid)]
pub struct BidHeaderRow {
    pub id: String,
    pub tender_id: String,
    pub status: String,
    pub organization_id: String,
    pub creator_username: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = bid_version)]
pub struct BidVersionRow {
    pub name: String,
    pub description: String,
    pub version: i32,
}

impl BidHeaderRow {
    /// Merges the header with one version's content.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidStoredValue` if the stored status or
    /// version is out of range.
    pub fn into_bid(self, content: VersionContent, version: i32) -> Result<Bid, PersistenceError> {
        Ok(Bid {
            status: parse_status(&self.status)?,
            version: parse_version(version)?,
            id: self.id,
            name: content.name,
            description: content.description,
            tender_id: self.tender_id,
            organization_id: self.organization_id,
            creator_username: self.creator_username,
        })
    }
}

#[derive(QueryableByName)]
pub struct LatestBidRow {
    #[diesel(sql_type = Text)]
    pub id: String,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub description: String,
    #[diesel(sql_type = Text)]
    pub tender_id: String,
    #[diesel(sql_type = Text)]
    pub status: String,
    #[diesel(sql_type = Text)]
    pub organization_id: String,
    #[diesel(sql_type = Text)]
    pub creator_username: String,
    #[diesel(sql_type = Integer)]
    pub version: i32,
}

impl TryFrom<LatestBidRow> for Bid {
    type Error = PersistenceError;

    fn try_from(row: LatestBidRow) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_status(&row.status)?,
            version: parse_version(row.version)?,
            id: row.id,
            name: row.name,
            description: row.description,
            tender_id: row.tender_id,
            organization_id: row.organization_id,
            creator_username: row.creator_username,
        })
    }
}

// ============================================================================
// Review rows
// ============================================================================

#[derive(Insertable)]
#[diesel(table_name = review)]
pub struct NewReviewRow<'a> {
    pub id: &'a str,
    pub bid_id: &'a str,
    pub creator_username: &'a str,
    pub comment: &'a str,
    pub created_at: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = review)]
pub struct ReviewRow {
    pub id: String,
    pub bid_id: String,
    pub creator_username: String,
    pub comment: String,
    pub created_at: String,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            bid_id: row.bid_id,
            creator_username: row.creator_username,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}

fn parse_status(status: &str) -> Result<EntityStatus, PersistenceError> {
    EntityStatus::from_str(status).map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))
}

fn parse_version(version: i32) -> Result<Version, PersistenceError> {
    Version::new(i64::from(version)).map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))
}
