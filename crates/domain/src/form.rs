// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::RosterTalent;
use crate::sanitize::digits_only;
use crate::types::{Currency, FormMode, JobId, PoType, TalentId};
use crate::validation::ValidationErrors;

/// Header fields of a purchase order.
///
/// Dates are kept as entered (`YYYY-MM-DD`); they are only interpreted
/// during validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseOrderHeader {
    /// The selected client, if any.
    pub client_id: Option<String>,
    /// The PO type, if chosen.
    pub po_type: Option<PoType>,
    /// The PO number.
    pub po_number: String,
    /// The date the PO was received.
    pub received_on: String,
    /// Name of the person the PO was received from.
    pub received_from_name: String,
    /// Email of the person the PO was received from.
    pub received_from_email: String,
    /// First day the PO covers.
    pub po_start_date: String,
    /// Last day the PO covers.
    pub po_end_date: String,
    /// Budget, digits only.
    pub budget: String,
    /// Currency of the budget, also the default for new talents.
    pub currency: Currency,
}

/// A single header field change.
///
/// The client is not a header edit: changing it resets the jobs and is
/// handled by its own command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEdit {
    /// Set or clear the PO type.
    PoType(Option<PoType>),
    /// Set the PO number.
    PoNumber(String),
    /// Set the received-on date.
    ReceivedOn(String),
    /// Set the received-from name.
    ReceivedFromName(String),
    /// Set the received-from email.
    ReceivedFromEmail(String),
    /// Set the PO start date.
    PoStartDate(String),
    /// Set the PO end date.
    PoEndDate(String),
    /// Set the budget. Non-digits are stripped.
    Budget(String),
    /// Set the header currency.
    Currency(Currency),
}

impl HeaderEdit {
    /// Returns the name of the field this edit targets.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::PoType(_) => "poType",
            Self::PoNumber(_) => "poNumber",
            Self::ReceivedOn(_) => "receivedOn",
            Self::ReceivedFromName(_) => "receivedFromName",
            Self::ReceivedFromEmail(_) => "receivedFromEmail",
            Self::PoStartDate(_) => "poStartDate",
            Self::PoEndDate(_) => "poEndDate",
            Self::Budget(_) => "budget",
            Self::Currency(_) => "currency",
        }
    }
}

impl PurchaseOrderHeader {
    /// Applies a single field edit.
    pub fn apply_edit(&mut self, edit: HeaderEdit) {
        match edit {
            HeaderEdit::PoType(po_type) => self.po_type = po_type,
            HeaderEdit::PoNumber(value) => self.po_number = value,
            HeaderEdit::ReceivedOn(value) => self.received_on = value,
            HeaderEdit::ReceivedFromName(value) => self.received_from_name = value,
            HeaderEdit::ReceivedFromEmail(value) => self.received_from_email = value,
            HeaderEdit::PoStartDate(value) => self.po_start_date = value,
            HeaderEdit::PoEndDate(value) => self.po_end_date = value,
            HeaderEdit::Budget(value) => self.budget = digits_only(&value),
            HeaderEdit::Currency(currency) => self.currency = currency,
        }
    }
}

/// How a talent's name is determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalentSource {
    /// Free-text name.
    Manual,
    /// Bound to the roster selector with nothing picked yet.
    Unselected,
    /// Bound to a roster talent of the job's requisition.
    Roster(String),
}

/// A talent placed on a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talent {
    /// The talent identifier.
    pub id: TalentId,
    /// Where the name comes from.
    pub source: TalentSource,
    /// The display name.
    pub name: String,
    /// Contract duration in months, free text.
    pub contract_duration: String,
    /// Bill rate, digits only.
    pub bill_rate: String,
    /// Currency of the bill rate.
    pub currency: Currency,
    /// Standard hourly rate, digits only.
    pub standard_rate: String,
    /// Currency of the standard rate.
    pub standard_currency: Currency,
    /// Overtime rate, digits only.
    pub overtime_rate: String,
    /// Currency of the overtime rate.
    pub overtime_currency: Currency,
}

/// A single talent field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalentEdit {
    /// Set the free-text name. Only honoured for manual talents.
    Name(String),
    /// Switch the name selector between manual entry and roster talents.
    Source(TalentSource),
    /// Set the contract duration.
    ContractDuration(String),
    /// Set the bill rate. Non-digits are stripped.
    BillRate(String),
    /// Set the bill rate currency.
    Currency(Currency),
    /// Set the standard rate. Non-digits are stripped.
    StandardRate(String),
    /// Set the standard rate currency.
    StandardCurrency(Currency),
    /// Set the overtime rate. Non-digits are stripped.
    OvertimeRate(String),
    /// Set the overtime rate currency.
    OvertimeCurrency(Currency),
}

impl Talent {
    /// Creates a manual talent with an empty name.
    #[must_use]
    pub const fn manual(id: TalentId, currency: Currency) -> Self {
        Self::blank(id, TalentSource::Manual, String::new(), currency)
    }

    /// Creates a talent bound to a roster entry, copying its name.
    #[must_use]
    pub fn from_roster(id: TalentId, roster: &RosterTalent, currency: Currency) -> Self {
        Self::blank(
            id,
            TalentSource::Roster(roster.id.clone()),
            roster.name.clone(),
            currency,
        )
    }

    const fn blank(id: TalentId, source: TalentSource, name: String, currency: Currency) -> Self {
        Self {
            id,
            source,
            name,
            contract_duration: String::new(),
            bill_rate: String::new(),
            currency,
            standard_rate: String::new(),
            standard_currency: currency,
            overtime_rate: String::new(),
            overtime_currency: currency,
        }
    }

    /// Returns whether the name is free text.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        matches!(self.source, TalentSource::Manual)
    }

    /// Returns the roster talent this talent was picked from, if any.
    #[must_use]
    pub fn source_id(&self) -> Option<&str> {
        match &self.source {
            TalentSource::Roster(id) => Some(id),
            TalentSource::Manual | TalentSource::Unselected => None,
        }
    }

    /// Switches to free-text entry, clearing the name.
    pub fn switch_to_manual(&mut self) {
        self.source = TalentSource::Manual;
        self.name.clear();
    }

    /// Binds to the roster selector with nothing picked, clearing the name.
    pub fn clear_selection(&mut self) {
        self.source = TalentSource::Unselected;
        self.name.clear();
    }

    /// Binds to a roster entry, copying its name.
    pub fn bind_to_roster(&mut self, roster: &RosterTalent) {
        self.source = TalentSource::Roster(roster.id.clone());
        self.name.clone_from(&roster.name);
    }

    /// Applies a field edit that needs no reference data.
    ///
    /// Returns `false` when the edit does not apply: a name edit on a
    /// roster-bound talent, or a source change (which needs the roster).
    pub fn apply_edit(&mut self, edit: TalentEdit) -> bool {
        match edit {
            TalentEdit::Name(name) => {
                if !self.is_manual() {
                    return false;
                }
                self.name = name;
            }
            TalentEdit::Source(_) => return false,
            TalentEdit::ContractDuration(value) => self.contract_duration = value,
            TalentEdit::BillRate(value) => self.bill_rate = digits_only(&value),
            TalentEdit::Currency(currency) => self.currency = currency,
            TalentEdit::StandardRate(value) => self.standard_rate = digits_only(&value),
            TalentEdit::StandardCurrency(currency) => self.standard_currency = currency,
            TalentEdit::OvertimeRate(value) => self.overtime_rate = digits_only(&value),
            TalentEdit::OvertimeCurrency(currency) => self.overtime_currency = currency,
        }
        true
    }
}

/// A job line on the purchase order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// The job identifier.
    pub id: JobId,
    /// Key of the selected requisition, if any.
    pub requisition_key: Option<String>,
    /// Display identifier of the selected requisition, copied at selection time.
    pub requisition_id: String,
    /// Talents placed on this job, in entry order.
    pub talents: Vec<Talent>,
}

impl Job {
    /// Creates a job with no requisition and no talents.
    #[must_use]
    pub const fn new(id: JobId) -> Self {
        Self {
            id,
            requisition_key: None,
            requisition_id: String::new(),
            talents: Vec::new(),
        }
    }

    /// Returns whether the job carries no selection and no talents.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.requisition_key.is_none() && self.requisition_id.is_empty() && self.talents.is_empty()
    }

    /// Selects (or clears) the requisition. Always empties the talent list.
    pub fn select_requisition(&mut self, key: Option<String>, requisition_id: String) {
        self.requisition_key = key;
        self.requisition_id = requisition_id;
        self.talents.clear();
    }

    /// Finds a talent by identifier.
    #[must_use]
    pub fn talent_mut(&mut self, talent_id: TalentId) -> Option<&mut Talent> {
        self.talents.iter_mut().find(|t| t.id == talent_id)
    }
}

/// The aggregate root of the purchase order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Header fields.
    pub header: PurchaseOrderHeader,
    /// Job lines, in display order.
    pub jobs: Vec<Job>,
    /// Whether the form accepts edits.
    pub mode: FormMode,
    /// Errors from the last rejected submit.
    pub errors: ValidationErrors,
}

impl FormState {
    /// Creates the initial form: default header, one blank job, editable,
    /// no errors.
    #[must_use]
    pub fn new(first_job: JobId) -> Self {
        Self {
            header: PurchaseOrderHeader::default(),
            jobs: vec![Job::new(first_job)],
            mode: FormMode::Editable,
            errors: ValidationErrors::new(),
        }
    }

    /// Returns whether this is the initial form, ignoring identifier values.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.header == PurchaseOrderHeader::default()
            && self.jobs.len() == 1
            && self.jobs.iter().all(Job::is_blank)
            && self.mode == FormMode::Editable
            && self.errors.is_empty()
    }

    /// Counts talents across all jobs.
    #[must_use]
    pub fn total_talents(&self) -> usize {
        self.jobs.iter().map(|j| j.talents.len()).sum()
    }

    /// Finds a job by identifier.
    #[must_use]
    pub fn job(&self, job_id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == job_id)
    }

    /// Finds a job by identifier for mutation.
    #[must_use]
    pub fn job_mut(&mut self, job_id: JobId) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|j| j.id == job_id)
    }
}
