// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use tenderbid_domain::{Organization, OrganizationType, Tender};
use tenderbid_persistence::Persistence;

use crate::handlers::create_tender;
use crate::{CreateBidRequest, CreateTenderRequest, EditEntityRequest};

/// Two organizations with one responsible each, plus an employee who is
/// responsible for neither.
pub struct Fixture {
    pub persistence: Persistence,
    pub publisher: Organization,
    pub bidder: Organization,
}

pub const PUBLISHER_USER: &str = "alice";
pub const BIDDER_USER: &str = "bob";
pub const OUTSIDER_USER: &str = "mallory";

pub fn setup() -> Fixture {
    let mut persistence = Persistence::new_in_memory().unwrap();
    for username in [PUBLISHER_USER, BIDDER_USER, OUTSIDER_USER] {
        persistence.create_employee(username, None, None).unwrap();
    }

    let publisher = persistence
        .create_organization("City Works", None, OrganizationType::JointStockCompany)
        .unwrap();
    let bidder = persistence
        .create_organization(
            "Asphalt Ltd",
            Some("Paving contractor"),
            OrganizationType::LimitedLiabilityCompany,
        )
        .unwrap();
    persistence
        .add_organization_responsible(&publisher.id, PUBLISHER_USER)
        .unwrap();
    persistence
        .add_organization_responsible(&bidder.id, BIDDER_USER)
        .unwrap();

    Fixture {
        persistence,
        publisher,
        bidder,
    }
}

pub fn tender_request(publisher: &Organization, name: &str) -> CreateTenderRequest {
    CreateTenderRequest {
        name: name.to_string(),
        description: String::from("Phase 1"),
        service_type: String::from("Construction"),
        status: None,
        organization_id: publisher.id.clone(),
        creator_username: String::from(PUBLISHER_USER),
    }
}

pub fn bid_request(bidder: &Organization, tender_id: &str, name: &str) -> CreateBidRequest {
    CreateBidRequest {
        name: name.to_string(),
        description: String::from("Fixed price"),
        tender_id: tender_id.to_string(),
        status: None,
        organization_id: bidder.id.clone(),
        creator_username: String::from(BIDDER_USER),
    }
}

pub fn edit_request(name: &str, description: &str) -> EditEntityRequest {
    EditEntityRequest {
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub fn create_test_tender(fixture: &mut Fixture, name: &str) -> Tender {
    let request = tender_request(&fixture.publisher, name);
    create_tender(&mut fixture.persistence, request).unwrap()
}
