// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Entity name is empty or too long.
    InvalidName(String),
    /// Entity description is too long.
    InvalidDescription(String),
    /// Tender service type is empty or too long.
    InvalidServiceType(String),
    /// Username is empty or too long.
    InvalidUsername(String),
    /// Review comment is empty or too long.
    InvalidComment(String),
    /// Status string is not one of the known entity statuses.
    InvalidStatus(String),
    /// Organization type string is not one of the known organization types.
    InvalidOrganizationType(String),
    /// Version numbers start at 1.
    InvalidVersion(i64),
    /// A required identifier is empty.
    InvalidIdentifier {
        /// The field that carried the identifier.
        field: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::InvalidServiceType(msg) => write!(f, "Invalid service type: {msg}"),
            Self::InvalidUsername(msg) => write!(f, "Invalid username: {msg}"),
            Self::InvalidComment(msg) => write!(f, "Invalid comment: {msg}"),
            Self::InvalidStatus(status) => write!(
                f,
                "Invalid status '{status}'. Must be one of CREATED, PUBLISHED, CANCELED"
            ),
            Self::InvalidOrganizationType(kind) => write!(
                f,
                "Invalid organization type '{kind}'. Must be one of IE, LLC, JSC"
            ),
            Self::InvalidVersion(version) => {
                write!(f, "Invalid version {version}. Versions start at 1")
            }
            Self::InvalidIdentifier { field } => write!(f, "Identifier '{field}' cannot be empty"),
        }
    }
}

impl std::error::Error for DomainError {}
