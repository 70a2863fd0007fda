// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Why a creator was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotAuthorizedReason {
    /// No employee is registered under the username.
    UnknownEmployee,
    /// The employee exists but is not a responsible of the organization.
    NotResponsible,
}

impl std::fmt::Display for NotAuthorizedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEmployee => write!(f, "no employee is registered under this username"),
            Self::NotResponsible => {
                write!(f, "employee is not responsible for this organization")
            }
        }
    }
}

/// Outcome of the creator authorization check.
///
/// A failed storage lookup is not a refusal: the persistence layer returns
/// it as an error, so callers see three distinct outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorAuthorization {
    Authorized,
    NotAuthorized(NotAuthorizedReason),
}

impl CreatorAuthorization {
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}
