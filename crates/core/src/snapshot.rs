// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use po_form_domain::{Currency, FormState, Job, PoType, ReferenceCatalog, Talent};
use serde::Serialize;

/// The normalized record handed to the submission sink.
///
/// Header fields are copied verbatim; the client display name is resolved
/// from the catalog at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderSnapshot {
    /// The selected client identifier.
    pub client_id: String,
    /// The selected client display name.
    pub client_name: String,
    /// The PO type.
    pub po_type: Option<PoType>,
    /// The PO number.
    pub po_number: String,
    /// The received-on date.
    pub received_on: String,
    /// The received-from name.
    pub received_from_name: String,
    /// The received-from email.
    pub received_from_email: String,
    /// The PO start date.
    pub po_start_date: String,
    /// The PO end date.
    pub po_end_date: String,
    /// The budget.
    pub budget: String,
    /// The budget currency.
    pub currency: Currency,
    /// The job lines.
    pub jobs: Vec<JobSnapshot>,
}

/// A job line in a submitted purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSnapshot {
    /// The requisition key.
    pub requisition_key: String,
    /// The requisition display identifier.
    pub requisition_id: String,
    /// The talents on this job.
    pub talents: Vec<TalentSnapshot>,
}

/// A talent in a submitted purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentSnapshot {
    /// The roster talent this talent was picked from, `null` for manual entries.
    pub source_id: Option<String>,
    /// The display name.
    pub name: String,
    /// The contract duration.
    pub contract_duration: String,
    /// The bill rate.
    pub bill_rate: String,
    /// The bill rate currency.
    pub currency: Currency,
    /// The standard rate.
    pub standard_rate: String,
    /// The standard rate currency.
    pub standard_currency: Currency,
    /// The overtime rate.
    pub overtime_rate: String,
    /// The overtime rate currency.
    pub overtime_currency: Currency,
}

impl PurchaseOrderSnapshot {
    /// Builds the snapshot of a form.
    #[must_use]
    pub fn from_state<C>(state: &FormState, catalog: &C) -> Self
    where
        C: ReferenceCatalog + ?Sized,
    {
        let header = &state.header;
        let client_id: String = header.client_id.clone().unwrap_or_default();
        let client_name: String = catalog
            .client(&client_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        Self {
            client_id,
            client_name,
            po_type: header.po_type,
            po_number: header.po_number.clone(),
            received_on: header.received_on.clone(),
            received_from_name: header.received_from_name.clone(),
            received_from_email: header.received_from_email.clone(),
            po_start_date: header.po_start_date.clone(),
            po_end_date: header.po_end_date.clone(),
            budget: header.budget.clone(),
            currency: header.currency,
            jobs: state.jobs.iter().map(JobSnapshot::from).collect(),
        }
    }
}

impl From<&Job> for JobSnapshot {
    fn from(job: &Job) -> Self {
        Self {
            requisition_key: job.requisition_key.clone().unwrap_or_default(),
            requisition_id: job.requisition_id.clone(),
            talents: job.talents.iter().map(TalentSnapshot::from).collect(),
        }
    }
}

impl From<&Talent> for TalentSnapshot {
    fn from(talent: &Talent) -> Self {
        Self {
            source_id: talent.source_id().map(ToString::to_string),
            name: talent.name.clone(),
            contract_duration: talent.contract_duration.clone(),
            bill_rate: talent.bill_rate.clone(),
            currency: talent.currency,
            standard_rate: talent.standard_rate.clone(),
            standard_currency: talent.standard_currency,
            overtime_rate: talent.overtime_rate.clone(),
            overtime_currency: talent.overtime_currency,
        }
    }
}
