// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_complete_talent, create_roster_talent};
use crate::{
    Currency, FormMode, FormState, HeaderEdit, Job, JobId, PurchaseOrderHeader, Talent,
    TalentEdit, TalentId, TalentSource, digits_only,
};

#[test]
fn test_new_form_state_is_initial() {
    let state: FormState = FormState::new(JobId::new(1));

    assert!(state.is_initial());
    assert_eq!(state.jobs.len(), 1);
    assert_eq!(state.mode, FormMode::Editable);
    assert_eq!(state.header.currency, Currency::Usd);
    assert_eq!(state.total_talents(), 0);
}

#[test]
fn test_digits_only_strips_everything_else() {
    assert_eq!(digits_only("abc123"), "123");
    assert_eq!(digits_only("1,250.75"), "125075");
    assert_eq!(digits_only("\u{0661}2"), "2");
    assert_eq!(digits_only(""), "");
}

#[test]
fn test_budget_edit_is_coerced_to_digits() {
    let mut header: PurchaseOrderHeader = PurchaseOrderHeader::default();

    header.apply_edit(HeaderEdit::Budget(String::from("$12 000")));

    assert_eq!(header.budget, "12000");
}

#[test]
fn test_other_header_edits_are_stored_verbatim() {
    let mut header: PurchaseOrderHeader = PurchaseOrderHeader::default();

    header.apply_edit(HeaderEdit::PoNumber(String::from(" PO 7 ")));
    header.apply_edit(HeaderEdit::Currency(Currency::Inr));

    assert_eq!(header.po_number, " PO 7 ");
    assert_eq!(header.currency, Currency::Inr);
    assert_eq!(HeaderEdit::PoEndDate(String::new()).field_name(), "poEndDate");
}

#[test]
fn test_manual_talent_starts_with_header_currency() {
    let talent: Talent = Talent::manual(TalentId::new(4), Currency::Inr);

    assert!(talent.is_manual());
    assert!(talent.source_id().is_none());
    assert!(talent.name.is_empty());
    assert_eq!(talent.currency, Currency::Inr);
    assert_eq!(talent.standard_currency, Currency::Inr);
    assert_eq!(talent.overtime_currency, Currency::Inr);
}

#[test]
fn test_roster_talent_copies_name_and_source() {
    let roster = create_roster_talent("t1", "Monika Goyal Test", "moved");

    let talent: Talent = Talent::from_roster(TalentId::new(5), &roster, Currency::Usd);

    assert!(!talent.is_manual());
    assert_eq!(talent.source_id(), Some("t1"));
    assert_eq!(talent.name, "Monika Goyal Test");
}

#[test]
fn test_rate_edits_strip_non_digits() {
    let mut talent: Talent = Talent::manual(TalentId::new(1), Currency::Usd);

    assert!(talent.apply_edit(TalentEdit::BillRate(String::from("45/hr"))));
    assert!(talent.apply_edit(TalentEdit::StandardRate(String::from("4.5"))));
    assert!(talent.apply_edit(TalentEdit::OvertimeRate(String::from("x60"))));
    assert!(talent.apply_edit(TalentEdit::ContractDuration(String::from("6 months"))));

    assert_eq!(talent.bill_rate, "45");
    assert_eq!(talent.standard_rate, "45");
    assert_eq!(talent.overtime_rate, "60");
    assert_eq!(talent.contract_duration, "6 months");
}

#[test]
fn test_name_edit_is_refused_for_roster_bound_talent() {
    let roster = create_roster_talent("t1", "Monika Goyal Test", "moved");
    let mut talent: Talent = Talent::from_roster(TalentId::new(1), &roster, Currency::Usd);

    assert!(!talent.apply_edit(TalentEdit::Name(String::from("Someone Else"))));
    assert_eq!(talent.name, "Monika Goyal Test");
}

#[test]
fn test_switching_to_manual_clears_source_and_name() {
    let roster = create_roster_talent("t1", "Monika Goyal Test", "moved");
    let mut talent: Talent = Talent::from_roster(TalentId::new(1), &roster, Currency::Usd);

    talent.switch_to_manual();

    assert_eq!(talent.source, TalentSource::Manual);
    assert!(talent.name.is_empty());
}

#[test]
fn test_clearing_selection_keeps_roster_binding_without_source() {
    let mut talent: Talent = create_complete_talent(1, "Jane Doe");

    talent.clear_selection();

    assert!(!talent.is_manual());
    assert!(talent.source_id().is_none());
    assert!(talent.name.is_empty());
}

#[test]
fn test_select_requisition_clears_talents() {
    let mut job: Job = Job::new(JobId::new(1));
    job.talents.push(create_complete_talent(2, "Jane Doe"));

    job.select_requisition(Some(String::from("r2")), String::from("CLK_12880"));

    assert!(job.talents.is_empty());
    assert_eq!(job.requisition_key.as_deref(), Some("r2"));
    assert!(!job.is_blank());
}
