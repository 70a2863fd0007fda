// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{NewBid, NewTender, VersionContent};

/// Maximum length of a tender or bid name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum length of a tender or bid description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
/// Maximum length of a tender service type, in characters.
pub const MAX_SERVICE_TYPE_LENGTH: usize = 50;
/// Maximum length of an employee username, in characters.
pub const MAX_USERNAME_LENGTH: usize = 50;
/// Maximum length of a review comment, in characters.
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// Validates the versioned `(name, description)` pair.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or blank
/// - The name exceeds `MAX_NAME_LENGTH` characters
/// - The description exceeds `MAX_DESCRIPTION_LENGTH` characters
pub fn validate_version_content(content: &VersionContent) -> Result<(), DomainError> {
    if content.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    if content.name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName(format!(
            "Name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }

    if content.description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::InvalidDescription(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validates a tender service type.
///
/// # Errors
///
/// Returns an error if the service type is blank or exceeds
/// `MAX_SERVICE_TYPE_LENGTH` characters.
pub fn validate_service_type(service_type: &str) -> Result<(), DomainError> {
    if service_type.trim().is_empty() {
        return Err(DomainError::InvalidServiceType(String::from(
            "Service type cannot be empty",
        )));
    }
    if service_type.chars().count() > MAX_SERVICE_TYPE_LENGTH {
        return Err(DomainError::InvalidServiceType(format!(
            "Service type cannot exceed {MAX_SERVICE_TYPE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates an employee username.
///
/// # Errors
///
/// Returns an error if the username is blank or exceeds
/// `MAX_USERNAME_LENGTH` characters.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.trim().is_empty() {
        return Err(DomainError::InvalidUsername(String::from(
            "Username cannot be empty",
        )));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(DomainError::InvalidUsername(format!(
            "Username cannot exceed {MAX_USERNAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates a review comment.
///
/// # Errors
///
/// Returns an error if the comment is blank or exceeds
/// `MAX_COMMENT_LENGTH` characters.
pub fn validate_review_comment(comment: &str) -> Result<(), DomainError> {
    if comment.trim().is_empty() {
        return Err(DomainError::InvalidComment(String::from(
            "Comment cannot be empty",
        )));
    }
    if comment.chars().count() > MAX_COMMENT_LENGTH {
        return Err(DomainError::InvalidComment(format!(
            "Comment cannot exceed {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates that an identifier is present.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` if `value` is blank.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidIdentifier { field });
    }
    Ok(())
}

/// Validates every field of a tender before creation.
///
/// # Errors
///
/// Returns the first field violation found.
pub fn validate_new_tender(tender: &NewTender) -> Result<(), DomainError> {
    validate_service_type(&tender.service_type)?;
    validate_identifier("organizationId", &tender.organization_id)?;
    validate_username(&tender.creator_username)?;
    validate_version_content(&tender.content)
}

/// Validates every field of a bid before creation.
///
/// # Errors
///
/// Returns the first field violation found.
pub fn validate_new_bid(bid: &NewBid) -> Result<(), DomainError> {
    validate_identifier("tenderId", &bid.tender_id)?;
    validate_identifier("organizationId", &bid.organization_id)?;
    validate_username(&bid.creator_username)?;
    validate_version_content(&bid.content)
}
