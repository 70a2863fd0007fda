// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tenderbid_domain::{EntityStatus, Version};
use tenderbid_persistence::BidFilter;

use crate::ApiError;
use crate::handlers::{create_bid, edit_bid, list_bids_by_tender, list_bids_by_user, rollback_bid};
use crate::tests::helpers::{
    BIDDER_USER, OUTSIDER_USER, PUBLISHER_USER, bid_request, create_test_tender, edit_request,
    setup,
};

#[test]
fn test_create_bid_on_tender() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    let request = bid_request(&fixture.bidder, &tender.id, "Asphalt offer");

    let bid = create_bid(&mut fixture.persistence, request).unwrap();

    assert_eq!(bid.tender_id, tender.id);
    assert_eq!(bid.organization_id, fixture.bidder.id);
    assert_eq!(bid.status, EntityStatus::Created);
    assert_eq!(bid.version, Version::FIRST);
}

#[test]
fn test_create_bid_by_non_responsible_inserts_nothing() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    let mut request = bid_request(&fixture.bidder, &tender.id, "Asphalt offer");
    request.creator_username = String::from(PUBLISHER_USER);

    let result = create_bid(&mut fixture.persistence, request);

    assert_eq!(
        result,
        Err(ApiError::Unauthorized {
            username: String::from(PUBLISHER_USER),
            organization_id: fixture.bidder.id.clone(),
        })
    );
    let stored = fixture
        .persistence
        .list_bids(&BidFilter::default())
        .unwrap();
    assert!(stored.is_empty());
}

#[test]
fn test_create_bid_by_unknown_employee_is_unauthorized() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    let mut request = bid_request(&fixture.bidder, &tender.id, "Asphalt offer");
    request.creator_username = String::from("ghost");

    let result = create_bid(&mut fixture.persistence, request);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_create_bid_on_unknown_tender_is_not_found() {
    let mut fixture = setup();
    let request = bid_request(&fixture.bidder, "no-such-tender", "Asphalt offer");

    let result = create_bid(&mut fixture.persistence, request);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Tender"
    ));
}

#[test]
fn test_create_bid_without_tender_id_is_invalid_input() {
    let mut fixture = setup();
    let request = bid_request(&fixture.bidder, "", "Asphalt offer");

    let result = create_bid(&mut fixture.persistence, request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "tenderId"
    ));
}

#[test]
fn test_edit_and_rollback_bid() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    let bid = create_bid(
        &mut fixture.persistence,
        bid_request(&fixture.bidder, &tender.id, "Asphalt offer"),
    )
    .unwrap();

    let edited = edit_bid(
        &mut fixture.persistence,
        &bid.id,
        &edit_request("Asphalt offer", "Discounted"),
    )
    .unwrap();
    assert_eq!(edited.version.value(), 2);
    assert_eq!(edited.description, "Discounted");
    assert_eq!(edited.tender_id, tender.id);

    let rolled_back = rollback_bid(&mut fixture.persistence, &bid.id, 1).unwrap();
    assert_eq!(rolled_back.description, "Fixed price");
    assert_eq!(
        fixture.persistence.list_bid_versions(&bid.id).unwrap(),
        vec![1]
    );
}

#[test]
fn test_rollback_bid_to_missing_version_keeps_history() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    let bid = create_bid(
        &mut fixture.persistence,
        bid_request(&fixture.bidder, &tender.id, "Asphalt offer"),
    )
    .unwrap();
    edit_bid(
        &mut fixture.persistence,
        &bid.id,
        &edit_request("Asphalt offer", "Discounted"),
    )
    .unwrap();

    let result = rollback_bid(&mut fixture.persistence, &bid.id, 7);

    assert!(matches!(result, Err(ApiError::VersionNotFound { .. })));
    assert_eq!(
        fixture.persistence.list_bid_versions(&bid.id).unwrap(),
        vec![1, 2]
    );
}

#[test]
fn test_list_bids_by_tender_returns_latest_versions() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    let other = create_test_tender(&mut fixture, "Bridge repair");
    let bid = create_bid(
        &mut fixture.persistence,
        bid_request(&fixture.bidder, &tender.id, "Asphalt offer"),
    )
    .unwrap();
    create_bid(
        &mut fixture.persistence,
        bid_request(&fixture.bidder, &other.id, "Steel offer"),
    )
    .unwrap();
    edit_bid(
        &mut fixture.persistence,
        &bid.id,
        &edit_request("Asphalt offer v2", "Discounted"),
    )
    .unwrap();

    let bids = list_bids_by_tender(&mut fixture.persistence, &tender.id).unwrap();

    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].name, "Asphalt offer v2");
    assert_eq!(bids[0].version.value(), 2);
}

#[test]
fn test_list_bids_by_unknown_tender_is_not_found() {
    let mut fixture = setup();

    let result = list_bids_by_tender(&mut fixture.persistence, "no-such-tender");

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_list_bids_by_user() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    create_bid(
        &mut fixture.persistence,
        bid_request(&fixture.bidder, &tender.id, "Asphalt offer"),
    )
    .unwrap();

    let mine = list_bids_by_user(&mut fixture.persistence, Some(BIDDER_USER)).unwrap();
    assert_eq!(mine.len(), 1);
    assert!(
        list_bids_by_user(&mut fixture.persistence, Some(OUTSIDER_USER))
            .unwrap()
            .is_empty()
    );
    assert!(matches!(
        list_bids_by_user(&mut fixture.persistence, Some("nobody")),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
