// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler takes the persistence adapter explicitly. Creation
//! handlers run the creator authorization check before anything is written.

use tenderbid_domain::{
    Bid, CreatorAuthorization, Employee, NewBid, NewTender, Review, Tender, Version,
    VersionContent, validate_identifier, validate_new_bid, validate_new_tender,
    validate_review_comment, validate_username, validate_version_content,
};
use tenderbid_persistence::{BidFilter, Persistence, PersistenceError, ReviewQuery, TenderFilter};
use tracing::{debug, error, warn};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    CreateBidRequest, CreateReviewRequest, CreateTenderRequest, EditEntityRequest,
    ReviewQueryRequest,
};

/// Translates a persistence error, logging anything that will surface as
/// an internal error.
fn storage_failure(err: PersistenceError) -> ApiError {
    let api_error: ApiError = translate_persistence_error(err);
    if let ApiError::Internal { message } = &api_error {
        error!(%message, "Storage operation failed");
    }
    api_error
}

/// Runs the creator authorization check.
///
/// A refusal becomes `Unauthorized`. A failed lookup becomes `Internal`
/// and is never reported as a refusal.
fn authorize_creator(
    persistence: &mut Persistence,
    username: &str,
    organization_id: &str,
) -> Result<(), ApiError> {
    match persistence.check_creator_authorization(username, organization_id) {
        Ok(CreatorAuthorization::Authorized) => Ok(()),
        Ok(CreatorAuthorization::NotAuthorized(reason)) => {
            warn!(
                username,
                organization_id,
                %reason,
                "Rejected creation by non-responsible employee"
            );
            Err(ApiError::Unauthorized {
                username: username.to_string(),
                organization_id: organization_id.to_string(),
            })
        }
        Err(e) => {
            error!(username, organization_id, error = %e, "Authorization check failed");
            Err(ApiError::Internal {
                message: format!("Authorization check failed: {e}"),
            })
        }
    }
}

/// Resolves a `username` query parameter to a registered employee.
///
/// An absent or blank username is a validation error. An unknown one is a
/// not-found error.
fn require_employee(
    persistence: &mut Persistence,
    username: Option<&str>,
) -> Result<Employee, ApiError> {
    let username: &str = match username {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            return Err(ApiError::InvalidInput {
                field: String::from("username"),
                message: String::from("No `username` param"),
            });
        }
    };
    validate_username(username).map_err(translate_domain_error)?;

    let employee: Option<Employee> = persistence
        .get_employee_by_username(username)
        .map_err(storage_failure)?;

    employee.ok_or_else(|| {
        debug!(username, "Username does not resolve to an employee");
        ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: String::from("User not found"),
        }
    })
}

fn edit_content(request: &EditEntityRequest) -> Result<VersionContent, ApiError> {
    let content: VersionContent = VersionContent::new(&request.name, &request.description);
    validate_version_content(&content).map_err(translate_domain_error)?;
    Ok(content)
}

// ============================================================================
// Tenders
// ============================================================================

/// Creates a tender on behalf of an organization.
///
/// The status defaults to `CREATED` when the request omits it.
///
/// # Errors
///
/// Returns an error if:
/// - A field fails validation
/// - The creator is not a responsible of the organization
/// - The tender cannot be stored
pub fn create_tender(
    persistence: &mut Persistence,
    request: CreateTenderRequest,
) -> Result<Tender, ApiError> {
    let new_tender: NewTender = NewTender {
        service_type: request.service_type,
        status: request.status.unwrap_or_default(),
        organization_id: request.organization_id,
        creator_username: request.creator_username,
        content: VersionContent::new(&request.name, &request.description),
    };
    validate_new_tender(&new_tender).map_err(translate_domain_error)?;

    authorize_creator(persistence, &new_tender.creator_username, &new_tender.organization_id)?;

    persistence.create_tender(&new_tender).map_err(storage_failure)
}

/// Edits a tender by appending a new version.
///
/// # Errors
///
/// Returns an error if the content is invalid, the tender does not exist,
/// or the version cannot be stored.
pub fn edit_tender(
    persistence: &mut Persistence,
    tender_id: &str,
    request: &EditEntityRequest,
) -> Result<Tender, ApiError> {
    validate_identifier("tenderId", tender_id).map_err(translate_domain_error)?;
    let content: VersionContent = edit_content(request)?;

    persistence.edit_tender(tender_id, &content).map_err(storage_failure)
}

/// Rolls a tender back to an earlier version.
///
/// # Errors
///
/// Returns an error if:
/// - `version` is not a positive integer
/// - The tender does not exist
/// - The target version does not exist
pub fn rollback_tender(
    persistence: &mut Persistence,
    tender_id: &str,
    version: i64,
) -> Result<Tender, ApiError> {
    validate_identifier("tenderId", tender_id).map_err(translate_domain_error)?;
    let target: Version = Version::new(version).map_err(translate_domain_error)?;

    persistence.rollback_tender(tender_id, target).map_err(storage_failure)
}

/// Lists the latest snapshot of every tender.
///
/// An absent or empty `service_type` does not restrict the listing.
///
/// # Errors
///
/// Returns an error if the tenders cannot be read.
pub fn list_tenders(
    persistence: &mut Persistence,
    service_type: Option<&str>,
) -> Result<Vec<Tender>, ApiError> {
    let filter: TenderFilter = TenderFilter {
        service_type: service_type
            .filter(|value| !value.is_empty())
            .map(String::from),
        creator_username: None,
    };

    let tenders: Vec<Tender> = persistence.list_tenders(&filter).map_err(storage_failure)?;
    debug!(count = tenders.len(), service_type = ?filter.service_type, "Listed tenders");
    Ok(tenders)
}

/// Lists the latest snapshot of every tender created by `username`.
///
/// # Errors
///
/// Returns an error if the username is missing or unknown, or the tenders
/// cannot be read.
pub fn list_tenders_by_user(
    persistence: &mut Persistence,
    username: Option<&str>,
) -> Result<Vec<Tender>, ApiError> {
    let employee: Employee = require_employee(persistence, username)?;

    let filter: TenderFilter = TenderFilter {
        service_type: None,
        creator_username: Some(employee.username),
    };
    let tenders: Vec<Tender> = persistence.list_tenders(&filter).map_err(storage_failure)?;
    debug!(count = tenders.len(), "Listed tenders for user");
    Ok(tenders)
}

// ============================================================================
// Bids
// ============================================================================

/// Places a bid on a tender on behalf of an organization.
///
/// # Errors
///
/// Returns an error if:
/// - A field fails validation
/// - The creator is not a responsible of the bidding organization
/// - The tender does not exist
/// - The bid cannot be stored
pub fn create_bid(
    persistence: &mut Persistence,
    request: CreateBidRequest,
) -> Result<Bid, ApiError> {
    let new_bid: NewBid = NewBid {
        tender_id: request.tender_id,
        status: request.status.unwrap_or_default(),
        organization_id: request.organization_id,
        creator_username: request.creator_username,
        content: VersionContent::new(&request.name, &request.description),
    };
    validate_new_bid(&new_bid).map_err(translate_domain_error)?;

    authorize_creator(persistence, &new_bid.creator_username, &new_bid.organization_id)?;

    persistence.create_bid(&new_bid).map_err(storage_failure)
}

/// Edits a bid by appending a new version.
///
/// # Errors
///
/// Returns an error if the content is invalid, the bid does not exist, or
/// the version cannot be stored.
pub fn edit_bid(
    persistence: &mut Persistence,
    bid_id: &str,
    request: &EditEntityRequest,
) -> Result<Bid, ApiError> {
    validate_identifier("bidId", bid_id).map_err(translate_domain_error)?;
    let content: VersionContent = edit_content(request)?;

    persistence.edit_bid(bid_id, &content).map_err(storage_failure)
}

/// Rolls a bid back to an earlier version.
///
/// # Errors
///
/// Returns an error if `version` is not a positive integer, the bid does
/// not exist, or the target version does not exist.
pub fn rollback_bid(
    persistence: &mut Persistence,
    bid_id: &str,
    version: i64,
) -> Result<Bid, ApiError> {
    validate_identifier("bidId", bid_id).map_err(translate_domain_error)?;
    let target: Version = Version::new(version).map_err(translate_domain_error)?;

    persistence.rollback_bid(bid_id, target).map_err(storage_failure)
}

/// Lists the latest snapshot of every bid placed on a tender.
///
/// # Errors
///
/// Returns an error if the tender does not exist or the bids cannot be read.
pub fn list_bids_by_tender(
    persistence: &mut Persistence,
    tender_id: &str,
) -> Result<Vec<Bid>, ApiError> {
    validate_identifier("tenderId", tender_id).map_err(translate_domain_error)?;
    persistence.get_tender(tender_id).map_err(storage_failure)?;

    let filter: BidFilter = BidFilter {
        tender_id: Some(tender_id.to_string()),
        creator_username: None,
    };
    let bids: Vec<Bid> = persistence.list_bids(&filter).map_err(storage_failure)?;
    debug!(tender_id, count = bids.len(), "Listed bids for tender");
    Ok(bids)
}

/// Lists the latest snapshot of every bid created by `username`.
///
/// # Errors
///
/// Returns an error if the username is missing or unknown, or the bids
/// cannot be read.
pub fn list_bids_by_user(
    persistence: &mut Persistence,
    username: Option<&str>,
) -> Result<Vec<Bid>, ApiError> {
    let employee: Employee = require_employee(persistence, username)?;

    let filter: BidFilter = BidFilter {
        tender_id: None,
        creator_username: Some(employee.username),
    };
    let bids: Vec<Bid> = persistence.list_bids(&filter).map_err(storage_failure)?;
    debug!(count = bids.len(), "Listed bids for user");
    Ok(bids)
}

// ============================================================================
// Reviews
// ============================================================================

/// Leaves a review on a bid.
///
/// # Errors
///
/// Returns an error if a field fails validation, or the bid or reviewer
/// does not exist.
pub fn add_review(
    persistence: &mut Persistence,
    bid_id: &str,
    request: &CreateReviewRequest,
) -> Result<Review, ApiError> {
    validate_identifier("bidId", bid_id).map_err(translate_domain_error)?;
    validate_username(&request.creator_username).map_err(translate_domain_error)?;
    validate_review_comment(&request.comment).map_err(translate_domain_error)?;

    persistence
        .add_review(bid_id, &request.creator_username, &request.comment)
        .map_err(storage_failure)
}

/// Lists reviews written by an author on bids that an organization placed
/// against a tender.
///
/// # Errors
///
/// Returns an error if any of the three parameters is missing, or the
/// reviews cannot be read.
pub fn query_reviews(
    persistence: &mut Persistence,
    request: &ReviewQueryRequest,
) -> Result<Vec<Review>, ApiError> {
    let query: ReviewQuery = ReviewQuery {
        tender_id: required_param("tenderId", request.tender_id.as_deref())?,
        organization_id: required_param("organizationId", request.organization_id.as_deref())?,
        author_username: required_param("authorUsername", request.author_username.as_deref())?,
    };

    let reviews: Vec<Review> = persistence.query_reviews(&query).map_err(storage_failure)?;
    debug!(
        tender_id = %query.tender_id,
        organization_id = %query.organization_id,
        count = reviews.len(),
        "Queried reviews"
    );
    Ok(reviews)
}

fn required_param(field: &str, value: Option<&str>) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Missing required parameter '{field}'"),
        }),
    }
}
