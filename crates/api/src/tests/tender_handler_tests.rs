// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tenderbid_domain::{EntityStatus, Version};

use crate::ApiError;
use crate::handlers::{
    create_tender, edit_tender, list_tenders, list_tenders_by_user, rollback_tender,
};
use crate::tests::helpers::{
    OUTSIDER_USER, PUBLISHER_USER, create_test_tender, edit_request, setup, tender_request,
};

#[test]
fn test_create_tender_defaults_to_created_status() {
    let mut fixture = setup();
    let request = tender_request(&fixture.publisher, "Road works");

    let tender = create_tender(&mut fixture.persistence, request).unwrap();

    assert_eq!(tender.name, "Road works");
    assert_eq!(tender.status, EntityStatus::Created);
    assert_eq!(tender.version, Version::FIRST);
    assert_eq!(tender.creator_username, PUBLISHER_USER);
}

#[test]
fn test_create_tender_keeps_requested_status() {
    let mut fixture = setup();
    let mut request = tender_request(&fixture.publisher, "Road works");
    request.status = Some(EntityStatus::Published);

    let tender = create_tender(&mut fixture.persistence, request).unwrap();

    assert_eq!(tender.status, EntityStatus::Published);
}

#[test]
fn test_create_tender_with_blank_name_is_invalid_input() {
    let mut fixture = setup();
    let request = tender_request(&fixture.publisher, "   ");

    let result = create_tender(&mut fixture.persistence, request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "name"
    ));
}

#[test]
fn test_create_tender_with_empty_service_type_is_invalid_input() {
    let mut fixture = setup();
    let mut request = tender_request(&fixture.publisher, "Road works");
    request.service_type = String::new();

    let result = create_tender(&mut fixture.persistence, request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "serviceType"
    ));
}

#[test]
fn test_create_tender_by_outsider_is_unauthorized() {
    let mut fixture = setup();
    let mut request = tender_request(&fixture.publisher, "Road works");
    request.creator_username = String::from(OUTSIDER_USER);

    let result = create_tender(&mut fixture.persistence, request);

    assert_eq!(
        result,
        Err(ApiError::Unauthorized {
            username: String::from(OUTSIDER_USER),
            organization_id: fixture.publisher.id.clone(),
        })
    );
    assert!(list_tenders(&mut fixture.persistence, None).unwrap().is_empty());
}

#[test]
fn test_edit_then_rollback_scenario() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");

    let edited = edit_tender(
        &mut fixture.persistence,
        &tender.id,
        &edit_request("Road works", "Phase 2"),
    )
    .unwrap();
    assert_eq!(edited.version.value(), 2);

    let edited = edit_tender(
        &mut fixture.persistence,
        &tender.id,
        &edit_request("Road works", "Phase 3"),
    )
    .unwrap();
    assert_eq!(edited.version.value(), 3);

    let rolled_back = rollback_tender(&mut fixture.persistence, &tender.id, 1).unwrap();
    assert_eq!(rolled_back.description, "Phase 1");
    assert_eq!(rolled_back.version, Version::FIRST);

    let listed = list_tenders(&mut fixture.persistence, None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].description, "Phase 1");

    let edited = edit_tender(
        &mut fixture.persistence,
        &tender.id,
        &edit_request("Road works", "Phase 2b"),
    )
    .unwrap();
    assert_eq!(edited.version.value(), 2);
}

#[test]
fn test_edit_unknown_tender_is_not_found() {
    let mut fixture = setup();

    let result = edit_tender(
        &mut fixture.persistence,
        "missing",
        &edit_request("Road works", "Phase 2"),
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_edit_with_overlong_description_is_invalid_input() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");

    let result = edit_tender(
        &mut fixture.persistence,
        &tender.id,
        &edit_request("Road works", &"x".repeat(501)),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "description"
    ));
}

#[test]
fn test_rollback_to_missing_version_is_version_not_found() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");

    let result = rollback_tender(&mut fixture.persistence, &tender.id, 4);

    assert!(matches!(result, Err(ApiError::VersionNotFound { .. })));
}

#[test]
fn test_rollback_to_zero_is_invalid_input() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");

    let result = rollback_tender(&mut fixture.persistence, &tender.id, 0);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "version"
    ));
}

#[test]
fn test_list_tenders_filters_by_service_type() {
    let mut fixture = setup();
    create_test_tender(&mut fixture, "Road works");
    let mut request = tender_request(&fixture.publisher, "Office cleaning");
    request.service_type = String::from("Delivery");
    create_tender(&mut fixture.persistence, request).unwrap();

    let construction = list_tenders(&mut fixture.persistence, Some("Construction")).unwrap();
    assert_eq!(construction.len(), 1);
    assert_eq!(construction[0].name, "Road works");

    assert_eq!(list_tenders(&mut fixture.persistence, Some("")).unwrap().len(), 2);
    assert!(
        list_tenders(&mut fixture.persistence, Some("Manufacture"))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_list_tenders_by_user() {
    let mut fixture = setup();
    create_test_tender(&mut fixture, "Road works");

    let mine = list_tenders_by_user(&mut fixture.persistence, Some(PUBLISHER_USER)).unwrap();
    assert_eq!(mine.len(), 1);

    let none = list_tenders_by_user(&mut fixture.persistence, Some(OUTSIDER_USER)).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_list_tenders_by_user_requires_username() {
    let mut fixture = setup();

    for username in [None, Some("")] {
        let result = list_tenders_by_user(&mut fixture.persistence, username);
        assert_eq!(
            result,
            Err(ApiError::InvalidInput {
                field: String::from("username"),
                message: String::from("No `username` param"),
            })
        );
    }
}

#[test]
fn test_list_tenders_by_unknown_user_is_not_found() {
    let mut fixture = setup();

    let result = list_tenders_by_user(&mut fixture.persistence, Some("nobody"));

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Employee"
    ));
}
