// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FormStore, Transition};
use po_form_domain::{
    HeaderEdit, JobId, PoType, Requisition, RosterTalent, StaticCatalog, TalentEdit, TalentId,
    TalentStage,
};

fn roster_talent(id: &str, name: &str, stage: &str) -> RosterTalent {
    RosterTalent {
        id: String::from(id),
        name: String::from(name),
        stage: TalentStage::new(stage),
    }
}

pub fn create_test_catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_client("c1", "Collabera - Collabera Inc", &["r1", "r2"])
        .with_client("c2", "Acme Corp", &["r3"])
        .with_requisition(
            "r1",
            Requisition {
                id: String::from("OWNAI_234"),
                title: String::from("Application Development"),
                talents: vec![
                    roster_talent("t1", "Monika Goyal Test", "moved"),
                    roster_talent("t2", "shaili khatri", "moved"),
                    roster_talent("t3", "Mehul Patel", "screening"),
                ],
            },
        )
        .with_requisition(
            "r2",
            Requisition {
                id: String::from("CLK_12880"),
                title: String::from("Business Administrator"),
                talents: vec![
                    roster_talent("t4", "Amit Kumar", "moved"),
                    roster_talent("t5", "Priya Singh", "moved"),
                ],
            },
        )
        .with_requisition(
            "r3",
            Requisition {
                id: String::from("REQ_3001"),
                title: String::from("QA Engineer"),
                talents: vec![roster_talent("t6", "Ravi Sharma", "moved")],
            },
        )
}

pub fn create_test_store() -> FormStore<StaticCatalog> {
    FormStore::new(create_test_catalog())
}

/// Fills every header field with a valid value for client `c1`.
pub fn fill_valid_header(store: &mut FormStore<StaticCatalog>, po_type: PoType) {
    store.set_client(Some("c1")).unwrap();
    for edit in [
        HeaderEdit::PoType(Some(po_type)),
        HeaderEdit::PoNumber(String::from("PO-1001")),
        HeaderEdit::ReceivedOn(String::from("2025-04-20")),
        HeaderEdit::ReceivedFromName(String::from("Sam Lee")),
        HeaderEdit::ReceivedFromEmail(String::from("sam.lee@example.com")),
        HeaderEdit::PoStartDate(String::from("2025-05-01")),
        HeaderEdit::PoEndDate(String::from("2025-10-31")),
        HeaderEdit::Budget(String::from("25000")),
    ] {
        store.set_header_field(edit).unwrap();
    }
}

pub fn first_job_id(store: &FormStore<StaticCatalog>) -> JobId {
    store.state().jobs[0].id
}

/// Adds a manual talent with a name, duration "6" and bill rate "50".
pub fn add_complete_manual_talent(
    store: &mut FormStore<StaticCatalog>,
    job_id: JobId,
    name: &str,
) -> TalentId {
    let Transition::TalentAdded { talent_id, .. } = store.add_talent(job_id, None).unwrap() else {
        panic!("talent was not added");
    };
    for edit in [
        TalentEdit::Name(String::from(name)),
        TalentEdit::ContractDuration(String::from("6")),
        TalentEdit::BillRate(String::from("50")),
    ] {
        store.set_talent_field(job_id, talent_id, edit).unwrap();
    }
    talent_id
}
