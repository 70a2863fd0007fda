// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tenderbid_domain::{CreatorAuthorization, NotAuthorizedReason, OrganizationType};

use super::setup;

#[test]
fn test_responsible_employee_is_authorized() {
    let mut fixture = setup();
    let organization_id = fixture.organization.id.clone();

    let result = fixture
        .persistence
        .check_creator_authorization("alice", &organization_id)
        .unwrap();

    assert_eq!(result, CreatorAuthorization::Authorized);
    assert!(result.is_authorized());
}

#[test]
fn test_unknown_username_is_not_authorized() {
    let mut fixture = setup();
    let organization_id = fixture.organization.id.clone();

    let result = fixture
        .persistence
        .check_creator_authorization("mallory", &organization_id)
        .unwrap();

    assert_eq!(
        result,
        CreatorAuthorization::NotAuthorized(NotAuthorizedReason::UnknownEmployee)
    );
}

#[test]
fn test_employee_of_other_organization_is_not_authorized() {
    let mut fixture = setup();
    fixture
        .persistence
        .create_employee("bob", Some("Bob"), None)
        .unwrap();
    let other = fixture
        .persistence
        .create_organization("Other", None, OrganizationType::JointStockCompany)
        .unwrap();
    fixture
        .persistence
        .add_organization_responsible(&other.id, "bob")
        .unwrap();
    let organization_id = fixture.organization.id.clone();

    let result = fixture
        .persistence
        .check_creator_authorization("bob", &organization_id)
        .unwrap();

    assert_eq!(
        result,
        CreatorAuthorization::NotAuthorized(NotAuthorizedReason::NotResponsible)
    );
    assert!(
        fixture
            .persistence
            .check_creator_authorization("bob", &other.id)
            .unwrap()
            .is_authorized()
    );
}

#[test]
fn test_unknown_organization_is_not_authorized() {
    let mut fixture = setup();

    let result = fixture
        .persistence
        .check_creator_authorization("alice", "missing")
        .unwrap();

    assert_eq!(
        result,
        CreatorAuthorization::NotAuthorized(NotAuthorizedReason::NotResponsible)
    );
}
