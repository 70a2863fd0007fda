// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the version-conflict retry loop and next-version arithmetic.

use tenderbid_domain::{EntityKind, Version};

use crate::mutations::next_version;
use crate::{MAX_EDIT_ATTEMPTS, PersistenceError, retry_on_version_conflict};

fn conflict() -> PersistenceError {
    PersistenceError::VersionConflict {
        entity: EntityKind::Tender,
        id: String::from("t1"),
        version: 2,
    }
}

#[test]
fn test_retry_succeeds_after_a_conflict() {
    let mut calls: u32 = 0;

    let result = retry_on_version_conflict(|| {
        calls += 1;
        if calls == 1 { Err(conflict()) } else { Ok(calls) }
    });

    assert_eq!(result, Ok(2));
}

#[test]
fn test_retry_gives_up_after_max_attempts() {
    let mut calls: u32 = 0;

    let result: Result<(), PersistenceError> = retry_on_version_conflict(|| {
        calls += 1;
        Err(conflict())
    });

    assert_eq!(result, Err(conflict()));
    assert_eq!(calls, MAX_EDIT_ATTEMPTS);
}

#[test]
fn test_other_errors_are_not_retried() {
    let mut calls: u32 = 0;

    let result: Result<(), PersistenceError> = retry_on_version_conflict(|| {
        calls += 1;
        Err(PersistenceError::TenderNotFound(String::from("t1")))
    });

    assert_eq!(
        result,
        Err(PersistenceError::TenderNotFound(String::from("t1")))
    );
    assert_eq!(calls, 1);
}

#[test]
fn test_next_version_follows_stored_maximum() {
    let next: Version = next_version(EntityKind::Tender, "t1", 3).unwrap();

    assert_eq!(next.value(), 4);
}

#[test]
fn test_next_version_rejects_non_positive_stored_maximum() {
    let result = next_version(EntityKind::Bid, "b1", 0);

    assert!(matches!(result, Err(PersistenceError::InvalidStoredValue(_))));
}

#[test]
fn test_next_version_after_first_is_second() {
    let next: Version = next_version(EntityKind::Bid, "b1", 1).unwrap();

    assert_eq!(Some(next), Version::FIRST.next());
}
