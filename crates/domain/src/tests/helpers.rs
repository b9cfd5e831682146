// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    FormState, Job, JobId, PoType, PurchaseOrderHeader, Requisition, RosterTalent,
    StaticCatalog, Talent, TalentId, TalentStage,
};

pub fn create_roster_talent(id: &str, name: &str, stage: &str) -> RosterTalent {
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
                    create_roster_talent("t1", "Monika Goyal Test", "moved"),
                    create_roster_talent("t2", "shaili khatri", "moved"),
                    create_roster_talent("t3", "Mehul Patel", "screening"),
                ],
            },
        )
        .with_requisition(
            "r2",
            Requisition {
                id: String::from("CLK_12880"),
                title: String::from("Business Administrator"),
                talents: vec![create_roster_talent("t4", "Amit Kumar", "moved")],
            },
        )
        .with_requisition(
            "r3",
            Requisition {
                id: String::from("REQ_3001"),
                title: String::from("QA Engineer"),
                talents: vec![create_roster_talent("t6", "Ravi Sharma", "moved")],
            },
        )
}

pub fn create_valid_header(po_type: PoType) -> PurchaseOrderHeader {
    PurchaseOrderHeader {
        client_id: Some(String::from("c1")),
        po_type: Some(po_type),
        po_number: String::from("PO-1001"),
        received_on: String::from("2025-04-20"),
        received_from_name: String::from("Sam Lee"),
        received_from_email: String::from("sam.lee@example.com"),
        po_start_date: String::from("2025-05-01"),
        po_end_date: String::from("2025-10-31"),
        budget: String::from("25000"),
        ..PurchaseOrderHeader::default()
    }
}

pub fn create_complete_talent(id: u64, name: &str) -> Talent {
    let mut talent: Talent = Talent::manual(TalentId::new(id), crate::Currency::Usd);
    talent.name = String::from(name);
    talent.contract_duration = String::from("6");
    talent.bill_rate = String::from("50");
    talent
}

pub fn create_job_with_talents(id: u64, talents: Vec<Talent>) -> Job {
    let mut job: Job = Job::new(JobId::new(id));
    job.requisition_key = Some(String::from("r1"));
    job.requisition_id = String::from("OWNAI_234");
    job.talents = talents;
    job
}

/// A complete Individual PO with one manual talent "Jane Doe".
pub fn create_valid_individual_state() -> FormState {
    let mut state: FormState = FormState::new(JobId::new(1));
    state.header = create_valid_header(PoType::Individual);
    state.jobs = vec![create_job_with_talents(
        1,
        vec![create_complete_talent(2, "Jane Doe")],
    )];
    state
}
