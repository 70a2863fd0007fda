// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod authorization_tests;
mod retry_tests;

use tenderbid_domain::{
    EntityStatus, NewBid, NewTender, Organization, OrganizationType, Tender, VersionContent,
};

use crate::Persistence;

/// A fresh database with one organization and its responsible employee.
pub struct Fixture {
    pub persistence: Persistence,
    pub organization: Organization,
    pub responsible: String,
}

pub fn setup() -> Fixture {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_employee("alice", Some("Alice"), Some("Smith"))
        .unwrap();
    let organization = persistence
        .create_organization(
            "Acme",
            Some("Road construction"),
            OrganizationType::LimitedLiabilityCompany,
        )
        .unwrap();
    persistence
        .add_organization_responsible(&organization.id, "alice")
        .unwrap();

    Fixture {
        persistence,
        organization,
        responsible: String::from("alice"),
    }
}

pub fn new_tender(fixture: &Fixture, name: &str, description: &str) -> NewTender {
    NewTender {
        service_type: String::from("Construction"),
        status: EntityStatus::Created,
        organization_id: fixture.organization.id.clone(),
        creator_username: fixture.responsible.clone(),
        content: VersionContent::new(name, description),
    }
}

pub fn create_tender(fixture: &mut Fixture, name: &str, description: &str) -> Tender {
    let tender = new_tender(fixture, name, description);
    fixture.persistence.create_tender(&tender).unwrap()
}

pub fn new_bid(fixture: &Fixture, tender_id: &str, name: &str, description: &str) -> NewBid {
    NewBid {
        tender_id: tender_id.to_string(),
        status: EntityStatus::Created,
        organization_id: fixture.organization.id.clone(),
        creator_username: fixture.responsible.clone(),
        content: VersionContent::new(name, description),
    }
}
