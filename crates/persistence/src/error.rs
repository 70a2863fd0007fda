// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tenderbid_domain::EntityKind;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// No tender header exists with this id.
    TenderNotFound(String),
    /// No bid header exists with this id.
    BidNotFound(String),
    /// No employee is registered under this username.
    EmployeeNotFound(String),
    /// No organization exists with this id.
    OrganizationNotFound(String),
    /// The rollback target version does not exist for the entity.
    VersionNotFound {
        entity: EntityKind,
        id: String,
        version: u32,
    },
    /// The version insert of an edit affected no rows.
    EditFailed { entity: EntityKind, id: String },
    /// A concurrent edit claimed the same version number first.
    VersionConflict {
        entity: EntityKind,
        id: String,
        version: u32,
    },
    /// A stored value could not be converted into its domain type.
    InvalidStoredValue(String),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::TenderNotFound(id) => write!(f, "Tender not found: {id}"),
            Self::BidNotFound(id) => write!(f, "Bid not found: {id}"),
            Self::EmployeeNotFound(username) => write!(f, "Employee not found: {username}"),
            Self::OrganizationNotFound(id) => write!(f, "Organization not found: {id}"),
            Self::VersionNotFound {
                entity,
                id,
                version,
            } => {
                write!(f, "Version {version} does not exist for {entity} {id}")
            }
            Self::EditFailed { entity, id } => {
                write!(f, "Edit of {entity} {id} inserted no version row")
            }
            Self::VersionConflict {
                entity,
                id,
                version,
            } => {
                write!(
                    f,
                    "Version {version} of {entity} {id} was written by a concurrent edit"
                )
            }
            Self::InvalidStoredValue(msg) => write!(f, "Invalid stored value: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::InitializationError(format!("Invalid directory seed: {err}"))
    }
}
