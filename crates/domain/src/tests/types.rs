// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{
    CreatorAuthorization, DomainError, EntityStatus, NotAuthorizedReason, OrganizationType,
    Tender, Version,
};

#[test]
fn test_entity_status_parses_stored_values() {
    assert_eq!(EntityStatus::from_str("CREATED"), Ok(EntityStatus::Created));
    assert_eq!(
        EntityStatus::from_str("PUBLISHED"),
        Ok(EntityStatus::Published)
    );
    assert_eq!(EntityStatus::from_str("CANCELED"), Ok(EntityStatus::Canceled));
}

#[test]
fn test_entity_status_rejects_unknown_and_lowercase_values() {
    assert!(matches!(
        EntityStatus::from_str("created"),
        Err(DomainError::InvalidStatus(_))
    ));
    assert!(matches!(
        EntityStatus::from_str("CLOSED"),
        Err(DomainError::InvalidStatus(_))
    ));
}

#[test]
fn test_entity_status_defaults_to_created() {
    assert_eq!(EntityStatus::default(), EntityStatus::Created);
}

#[test]
fn test_organization_type_string_representation() {
    for kind in [
        OrganizationType::IndividualEntrepreneur,
        OrganizationType::LimitedLiabilityCompany,
        OrganizationType::JointStockCompany,
    ] {
        assert_eq!(OrganizationType::from_str(kind.as_str()), Ok(kind));
    }
    assert!(OrganizationType::from_str("LLP").is_err());
}

#[test]
fn test_version_rejects_zero_and_negative() {
    assert_eq!(Version::new(0), Err(DomainError::InvalidVersion(0)));
    assert_eq!(Version::new(-3), Err(DomainError::InvalidVersion(-3)));
    assert_eq!(Version::new(1), Ok(Version::FIRST));
}

#[test]
fn test_version_next_increments_by_one() {
    let version: Version = Version::new(41).unwrap();
    assert_eq!(version.next().unwrap().value(), 42);
    assert!(Version::new(i64::from(u32::MAX)).unwrap().next().is_none());
}

#[test]
fn test_tender_serializes_with_camel_case_keys() {
    let tender: Tender = Tender {
        id: String::from("t-1"),
        name: String::from("Road works"),
        description: String::from("Phase 1"),
        service_type: String::from("Construction"),
        status: EntityStatus::Published,
        organization_id: String::from("o-1"),
        creator_username: String::from("alice"),
        version: Version::FIRST,
    };

    let json: serde_json::Value = serde_json::to_value(&tender).unwrap();
    assert_eq!(json["serviceType"], "Construction");
    assert_eq!(json["organizationId"], "o-1");
    assert_eq!(json["creatorUsername"], "alice");
    assert_eq!(json["status"], "PUBLISHED");
    assert_eq!(json["version"], 1);
}

#[test]
fn test_creator_authorization_is_authorized() {
    assert!(CreatorAuthorization::Authorized.is_authorized());
    assert!(
        !CreatorAuthorization::NotAuthorized(NotAuthorizedReason::NotResponsible).is_authorized()
    );
}
