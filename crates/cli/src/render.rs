// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text view of the form.

use po_form::{FormStore, IdGenerator};
use po_form_domain::{
    FieldPath, FormState, HeaderKey, Job, PurchaseOrderHeader, ReferenceCatalog, Talent, TalentKey,
    TalentSource, ValidationErrors,
};
use std::fmt::{self, Display, Formatter};

/// Renders a store's form, with inline errors and the saved indicator.
pub struct FormView<'a, C, G> {
    store: &'a FormStore<C, G>,
}

impl<'a, C, G> FormView<'a, C, G> {
    #[must_use]
    pub const fn new(store: &'a FormStore<C, G>) -> Self {
        Self { store }
    }
}

fn show(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn field(
    f: &mut Formatter<'_>,
    indent: &str,
    label: &str,
    value: &str,
    errors: &ValidationErrors,
    path: FieldPath,
) -> fmt::Result {
    writeln!(f, "{indent}{label:<20} {}", show(value))?;
    if let Some(error) = errors.get(&path) {
        writeln!(f, "{indent}  ! {error}")?;
    }
    Ok(())
}

fn header(
    f: &mut Formatter<'_>,
    header: &PurchaseOrderHeader,
    client_name: &str,
    errors: &ValidationErrors,
) -> fmt::Result {
    let po_type: &str = header.po_type.map_or("", |t| t.as_str());
    let rows: [(&str, &str, HeaderKey); 9] = [
        ("Client", client_name, HeaderKey::ClientId),
        ("PO Type", po_type, HeaderKey::PoType),
        ("PO Number", header.po_number.as_str(), HeaderKey::PoNumber),
        ("Received On", header.received_on.as_str(), HeaderKey::ReceivedOn),
        (
            "Received From",
            header.received_from_name.as_str(),
            HeaderKey::ReceivedFromName,
        ),
        ("Email", header.received_from_email.as_str(), HeaderKey::ReceivedFromEmail),
        ("Start Date", header.po_start_date.as_str(), HeaderKey::PoStartDate),
        ("End Date", header.po_end_date.as_str(), HeaderKey::PoEndDate),
        ("Budget", header.budget.as_str(), HeaderKey::Budget),
    ];
    for (label, value, key) in rows {
        field(f, "", label, value, errors, FieldPath::Header(key))?;
    }
    writeln!(f, "{:<20} {}", "Currency", header.currency)
}

fn talent(
    f: &mut Formatter<'_>,
    talent: &Talent,
    job_index: usize,
    talent_index: usize,
    errors: &ValidationErrors,
) -> fmt::Result {
    let source: &str = match &talent.source {
        TalentSource::Manual => "manual",
        TalentSource::Unselected => "unselected",
        TalentSource::Roster(id) => id,
    };
    writeln!(f, "    Talent {} [{source}]", talent_index + 1)?;

    let path = |field: TalentKey| FieldPath::Talent {
        job: job_index,
        talent: talent_index,
        field,
    };
    field(f, "      ", "Name", &talent.name, errors, path(TalentKey::Name))?;
    field(
        f,
        "      ",
        "Contract Duration",
        &talent.contract_duration,
        errors,
        path(TalentKey::Duration),
    )?;
    field(
        f,
        "      ",
        "Bill Rate",
        &format!("{} {}", show(&talent.bill_rate), talent.currency.code()),
        errors,
        path(TalentKey::BillRate),
    )?;
    writeln!(
        f,
        "      {:<20} {} {}",
        "Standard Rate",
        show(&talent.standard_rate),
        talent.standard_currency.code()
    )?;
    writeln!(
        f,
        "      {:<20} {} {}",
        "Overtime Rate",
        show(&talent.overtime_rate),
        talent.overtime_currency.code()
    )
}

fn job(f: &mut Formatter<'_>, job: &Job, index: usize, errors: &ValidationErrors) -> fmt::Result {
    let requisition: &str = job.requisition_key.as_deref().unwrap_or("");
    writeln!(f, "  Job {} ({})", index + 1, job.id)?;
    field(
        f,
        "    ",
        "Job/REQ",
        requisition,
        errors,
        FieldPath::Job(index),
    )?;
    for (talent_index, t) in job.talents.iter().enumerate() {
        talent(f, t, index, talent_index, errors)?;
    }
    Ok(())
}

fn form(f: &mut Formatter<'_>, state: &FormState, client_name: &str) -> fmt::Result {
    let errors: &ValidationErrors = &state.errors;

    header(f, &state.header, client_name, errors)?;
    writeln!(f, "Jobs")?;
    if let Some(error) = errors.get(&FieldPath::Jobs) {
        writeln!(f, "  ! {error}")?;
    }
    for (index, j) in state.jobs.iter().enumerate() {
        job(f, j, index, errors)?;
    }
    for path in [FieldPath::Individual, FieldPath::Group] {
        if let Some(error) = errors.get(&path) {
            writeln!(f, "! {error}")?;
        }
    }
    Ok(())
}

impl<C: ReferenceCatalog, G: IdGenerator> Display for FormView<'_, C, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state: &FormState = self.store.state();
        writeln!(f, "Purchase Order")?;
        writeln!(f, "==============")?;
        form(f, state, self.store.client_name())?;
        writeln!(f, "Total talents: {}", self.store.total_talents())?;
        if self.store.is_locked() {
            writeln!(f, "Saved")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use po_form::{RecordingSink, SubmitOutcome};
    use po_form_domain::{Requisition, RosterTalent, StaticCatalog, TalentStage};

    fn create_test_store() -> FormStore<StaticCatalog> {
        let requisition: Requisition = Requisition {
            id: String::from("REQ-1"),
            title: String::from("Engineer"),
            talents: vec![RosterTalent {
                id: String::from("t1"),
                name: String::from("Ada"),
                stage: TalentStage::new(TalentStage::MOVED),
            }],
        };
        let catalog: StaticCatalog = StaticCatalog::new()
            .with_client("c1", "Acme", &["r1"])
            .with_requisition("r1", requisition);
        FormStore::new(catalog)
    }

    #[test]
    fn test_rejected_submit_shows_inline_errors() {
        let mut store: FormStore<StaticCatalog> = create_test_store();
        let mut sink: RecordingSink = RecordingSink::new();

        let outcome: SubmitOutcome = store.submit(&mut sink);
        let text: String = FormView::new(&store).to_string();

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert!(text.contains("! Client is required."));
        assert!(text.contains("! Select Job/REQ for this job."));
        assert!(!text.contains("Saved"));
    }

    #[test]
    fn test_roster_talent_is_listed_under_its_job() {
        let mut store: FormStore<StaticCatalog> = create_test_store();
        store.set_client(Some("c1")).unwrap();
        let job_id = store.state().jobs[0].id;
        store.set_job_requisition(job_id, Some("r1")).unwrap();
        store.add_first_roster_talent(job_id).unwrap();

        let text: String = FormView::new(&store).to_string();

        assert!(text.contains("Acme"));
        assert!(text.contains("Talent 1 [t1]"));
        assert!(text.contains("Ada"));
        assert!(text.contains("Total talents: 1"));
    }
}
