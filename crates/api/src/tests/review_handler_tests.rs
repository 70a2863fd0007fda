// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::handlers::{add_review, create_bid, query_reviews};
use crate::tests::helpers::{PUBLISHER_USER, bid_request, create_test_tender, setup};
use crate::{ApiError, CreateReviewRequest, ReviewQueryRequest};

fn review(author: &str, comment: &str) -> CreateReviewRequest {
    CreateReviewRequest {
        creator_username: author.to_string(),
        comment: comment.to_string(),
    }
}

#[test]
fn test_query_reviews_selects_by_tender_organization_and_author() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    let other_tender = create_test_tender(&mut fixture, "Bridge repair");
    let bid = create_bid(
        &mut fixture.persistence,
        bid_request(&fixture.bidder, &tender.id, "Asphalt offer"),
    )
    .unwrap();
    let other_bid = create_bid(
        &mut fixture.persistence,
        bid_request(&fixture.bidder, &other_tender.id, "Steel offer"),
    )
    .unwrap();

    add_review(
        &mut fixture.persistence,
        &bid.id,
        &review(PUBLISHER_USER, "Good price"),
    )
    .unwrap();
    add_review(
        &mut fixture.persistence,
        &other_bid.id,
        &review(PUBLISHER_USER, "Too slow"),
    )
    .unwrap();

    let reviews = query_reviews(
        &mut fixture.persistence,
        &ReviewQueryRequest {
            tender_id: Some(tender.id.clone()),
            organization_id: Some(fixture.bidder.id.clone()),
            author_username: Some(String::from(PUBLISHER_USER)),
        },
    )
    .unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].comment, "Good price");
    assert_eq!(reviews[0].bid_id, bid.id);
}

#[test]
fn test_query_reviews_requires_every_parameter() {
    let mut fixture = setup();

    let result = query_reviews(
        &mut fixture.persistence,
        &ReviewQueryRequest {
            tender_id: Some(String::from("t1")),
            organization_id: None,
            author_username: Some(String::from(PUBLISHER_USER)),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "organizationId"
    ));
}

#[test]
fn test_add_review_on_unknown_bid_is_not_found() {
    let mut fixture = setup();

    let result = add_review(
        &mut fixture.persistence,
        "no-such-bid",
        &review(PUBLISHER_USER, "Good price"),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Bid"
    ));
}

#[test]
fn test_add_review_with_empty_comment_is_invalid_input() {
    let mut fixture = setup();
    let tender = create_test_tender(&mut fixture, "Road works");
    let bid = create_bid(
        &mut fixture.persistence,
        bid_request(&fixture.bidder, &tender.id, "Asphalt offer"),
    )
    .unwrap();

    let result = add_review(&mut fixture.persistence, &bid.id, &review(PUBLISHER_USER, ""));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "comment"
    ));
}
