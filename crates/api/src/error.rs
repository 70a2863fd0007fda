// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use tenderbid_domain::DomainError;
use tenderbid_persistence::PersistenceError;

use crate::edit_payload::EditPayloadError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. The HTTP shell maps each variant to one status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The creator is not a responsible of the organization.
    Unauthorized {
        /// The username that attempted the creation.
        username: String,
        /// The organization the creation was attempted for.
        organization_id: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The rollback target version does not exist.
    VersionNotFound {
        /// A human-readable description of the missing version.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Unauthorized {
                username,
                organization_id,
            } => {
                write!(
                    f,
                    "Unauthorized: '{username}' is not responsible for organization '{organization_id}'"
                )
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::VersionNotFound { message } => write!(f, "{message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<EditPayloadError> for ApiError {
    fn from(err: EditPayloadError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidDescription(msg) => ApiError::InvalidInput {
            field: String::from("description"),
            message: msg,
        },
        DomainError::InvalidServiceType(msg) => ApiError::InvalidInput {
            field: String::from("serviceType"),
            message: msg,
        },
        DomainError::InvalidUsername(msg) => ApiError::InvalidInput {
            field: String::from("username"),
            message: msg,
        },
        DomainError::InvalidComment(msg) => ApiError::InvalidInput {
            field: String::from("comment"),
            message: msg,
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::InvalidOrganizationType(_) => ApiError::InvalidInput {
            field: String::from("type"),
            message: err.to_string(),
        },
        DomainError::InvalidVersion(_) => ApiError::InvalidInput {
            field: String::from("version"),
            message: err.to_string(),
        },
        DomainError::InvalidIdentifier { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Missing entities become `ResourceNotFound` and a missing rollback target
/// becomes `VersionNotFound`. Every other failure is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::TenderNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Tender"),
            message: format!("Tender '{id}' does not exist"),
        },
        PersistenceError::BidNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Bid"),
            message: format!("Bid '{id}' does not exist"),
        },
        PersistenceError::EmployeeNotFound(username) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("No employee with username '{username}'"),
        },
        PersistenceError::OrganizationNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Organization"),
            message: format!("Organization '{id}' does not exist"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message: msg,
        },
        PersistenceError::VersionNotFound { .. } => ApiError::VersionNotFound {
            message: err.to_string(),
        },
        PersistenceError::DatabaseError(_)
        | PersistenceError::DatabaseConnectionFailed(_)
        | PersistenceError::MigrationFailed(_)
        | PersistenceError::QueryFailed(_)
        | PersistenceError::InitializationError(_)
        | PersistenceError::ForeignKeyEnforcementNotEnabled
        | PersistenceError::EditFailed { .. }
        | PersistenceError::VersionConflict { .. }
        | PersistenceError::InvalidStoredValue(_)
        | PersistenceError::Other(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
