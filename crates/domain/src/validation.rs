// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-form validation.
//!
//! Every rule runs on every call; a rule never suppresses another rule's
//! key. The result is an error map keyed by field path.

use crate::form::{FormState, Job, PurchaseOrderHeader, Talent};
use crate::types::PoType;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use time::Date;
use time::macros::format_description;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("literal pattern"));

#[allow(clippy::expect_used)]
static BUDGET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,5}$").expect("literal pattern"));

/// A header field that carries its own validation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeaderKey {
    /// The client selector.
    ClientId,
    /// The PO type selector.
    PoType,
    /// The PO number.
    PoNumber,
    /// The received-on date.
    ReceivedOn,
    /// The received-from name.
    ReceivedFromName,
    /// The received-from email.
    ReceivedFromEmail,
    /// The PO start date.
    PoStartDate,
    /// The PO end date.
    PoEndDate,
    /// The budget.
    Budget,
}

impl HeaderKey {
    /// Returns the error map key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClientId => "clientId",
            Self::PoType => "poType",
            Self::PoNumber => "poNumber",
            Self::ReceivedOn => "receivedOn",
            Self::ReceivedFromName => "receivedFromName",
            Self::ReceivedFromEmail => "receivedFromEmail",
            Self::PoStartDate => "poStartDate",
            Self::PoEndDate => "poEndDate",
            Self::Budget => "budget",
        }
    }

    /// Returns the label used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ClientId => "Client",
            Self::PoType => "Purchase Order Type",
            Self::PoNumber => "PO Number",
            Self::ReceivedOn => "Received On date",
            Self::ReceivedFromName => "Received From name",
            Self::ReceivedFromEmail => "Received From email",
            Self::PoStartDate => "PO Start Date",
            Self::PoEndDate => "PO End Date",
            Self::Budget => "Budget",
        }
    }
}

/// A talent field that carries its own validation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TalentKey {
    /// The talent name.
    Name,
    /// The contract duration.
    Duration,
    /// The bill rate.
    BillRate,
}

impl TalentKey {
    /// Returns the key suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Duration => "duration",
            Self::BillRate => "billRate",
        }
    }
}

/// Where a validation error is shown.
///
/// Job and talent paths are positional, matching the order on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    /// A header field.
    Header(HeaderKey),
    /// The job list as a whole.
    Jobs,
    /// The requisition selector of a job.
    Job(usize),
    /// A field of a talent on a job.
    Talent {
        /// Position of the job.
        job: usize,
        /// Position of the talent within the job.
        talent: usize,
        /// The talent field.
        field: TalentKey,
    },
    /// The Individual PO talent count.
    Individual,
    /// The Group PO talent count.
    Group,
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header(key) => write!(f, "{}", key.as_str()),
            Self::Jobs => write!(f, "jobs"),
            Self::Job(job) => write!(f, "job_{job}"),
            Self::Talent { job, talent, field } => {
                write!(f, "job_{job}_talent_{talent}_{}", field.as_str())
            }
            Self::Individual => write!(f, "individual"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// A required header field is empty.
    Required(HeaderKey),
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
    /// A date is present but not a `YYYY-MM-DD` calendar date.
    InvalidDate,
    /// The end date falls before the start date.
    EndBeforeStart,
    /// The budget is not 1 to 5 digits.
    InvalidBudget,
    /// The form has no jobs.
    NoJobs,
    /// A job has no requisition selected.
    RequisitionRequired,
    /// A talent name is blank.
    TalentNameRequired,
    /// A talent has no contract duration.
    ContractDurationRequired,
    /// A talent has no bill rate.
    BillRateRequired,
    /// An Individual PO has no talent.
    IndividualMissingTalent,
    /// An Individual PO has more than one talent.
    IndividualTooManyTalents,
    /// A Group PO has fewer than two talents.
    GroupTooFewTalents,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required(key) => write!(f, "{} is required.", key.label()),
            Self::InvalidEmail => write!(f, "Enter a valid email."),
            Self::InvalidDate => write!(f, "Enter a valid date (YYYY-MM-DD)."),
            Self::EndBeforeStart => write!(f, "End date cannot be before start date."),
            Self::InvalidBudget => write!(f, "Enter numeric budget up to 5 digits."),
            Self::NoJobs => write!(f, "At least one job is required."),
            Self::RequisitionRequired => write!(f, "Select Job/REQ for this job."),
            Self::TalentNameRequired => write!(f, "Talent name is required."),
            Self::ContractDurationRequired => write!(f, "Contract duration required."),
            Self::BillRateRequired => write!(f, "Bill rate required."),
            Self::IndividualMissingTalent => {
                write!(f, "Individual PO requires exactly one talent.")
            }
            Self::IndividualTooManyTalents => write!(f, "Individual PO allows only one talent."),
            Self::GroupTooFewTalents => {
                write!(f, "Group PO requires at least two talents selected.")
            }
        }
    }
}

/// Validation errors keyed by the field they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldPath, ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records an error, replacing any earlier error for the same field.
    pub fn insert(&mut self, path: FieldPath, error: ValidationError) {
        self.errors.insert(path, error);
    }

    /// Returns the error recorded for a field.
    #[must_use]
    pub fn get(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    /// Returns the error recorded under a rendered key such as `job_0`.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|(path, _)| path.to_string() == key)
            .map(|(_, error)| error)
    }

    /// Returns whether a rendered key has an error.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get_key(key).is_some()
    }

    /// Returns whether no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &ValidationError)> {
        self.errors.iter()
    }

    /// Renders the map as key → message strings.
    #[must_use]
    pub fn to_messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(path, error)| (path.to_string(), error.to_string()))
            .collect()
    }
}

/// Validates the whole form.
///
/// This function is pure: the same state always yields the same map.
/// Submission is acceptable iff the returned map is empty.
#[must_use]
pub fn validate(state: &FormState) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();

    validate_header(&state.header, &mut errors);

    if state.jobs.is_empty() {
        errors.insert(FieldPath::Jobs, ValidationError::NoJobs);
    }
    for (job_index, job) in state.jobs.iter().enumerate() {
        validate_job(job_index, job, &mut errors);
    }

    validate_talent_count(state.header.po_type, state.total_talents(), &mut errors);

    errors
}

fn validate_header(header: &PurchaseOrderHeader, errors: &mut ValidationErrors) {
    if header.client_id.as_deref().is_none_or(str::is_empty) {
        required(HeaderKey::ClientId, errors);
    }
    if header.po_type.is_none() {
        required(HeaderKey::PoType, errors);
    }
    if header.po_number.is_empty() {
        required(HeaderKey::PoNumber, errors);
    }
    check_date(HeaderKey::ReceivedOn, &header.received_on, errors);
    if header.received_from_name.is_empty() {
        required(HeaderKey::ReceivedFromName, errors);
    }

    // Rule: email is required and must look like local@domain.tld
    if header.received_from_email.is_empty() {
        required(HeaderKey::ReceivedFromEmail, errors);
    } else if !EMAIL_PATTERN.is_match(&header.received_from_email) {
        errors.insert(
            FieldPath::Header(HeaderKey::ReceivedFromEmail),
            ValidationError::InvalidEmail,
        );
    }

    let start: Option<Date> = check_date(HeaderKey::PoStartDate, &header.po_start_date, errors);
    let end: Option<Date> = check_date(HeaderKey::PoEndDate, &header.po_end_date, errors);
    if start.zip(end).is_some_and(|(start, end)| end < start) {
        errors.insert(
            FieldPath::Header(HeaderKey::PoEndDate),
            ValidationError::EndBeforeStart,
        );
    }

    // Rule: budget is required and must be 1-5 digits
    if header.budget.is_empty() {
        required(HeaderKey::Budget, errors);
    } else if !BUDGET_PATTERN.is_match(&header.budget) {
        errors.insert(
            FieldPath::Header(HeaderKey::Budget),
            ValidationError::InvalidBudget,
        );
    }
}

fn validate_job(job_index: usize, job: &Job, errors: &mut ValidationErrors) {
    if job.requisition_key.as_deref().is_none_or(str::is_empty) {
        errors.insert(
            FieldPath::Job(job_index),
            ValidationError::RequisitionRequired,
        );
    }
    for (talent_index, talent) in job.talents.iter().enumerate() {
        validate_talent(job_index, talent_index, talent, errors);
    }
}

fn validate_talent(
    job_index: usize,
    talent_index: usize,
    talent: &Talent,
    errors: &mut ValidationErrors,
) {
    let path = |field: TalentKey| FieldPath::Talent {
        job: job_index,
        talent: talent_index,
        field,
    };
    if talent.name.trim().is_empty() {
        errors.insert(path(TalentKey::Name), ValidationError::TalentNameRequired);
    }
    if talent.contract_duration.is_empty() {
        errors.insert(
            path(TalentKey::Duration),
            ValidationError::ContractDurationRequired,
        );
    }
    if talent.bill_rate.is_empty() {
        errors.insert(path(TalentKey::BillRate), ValidationError::BillRateRequired);
    }
}

fn validate_talent_count(po_type: Option<PoType>, total: usize, errors: &mut ValidationErrors) {
    match po_type {
        Some(PoType::Individual) if total == 0 => {
            errors.insert(
                FieldPath::Individual,
                ValidationError::IndividualMissingTalent,
            );
        }
        Some(PoType::Individual) if total > 1 => {
            errors.insert(
                FieldPath::Individual,
                ValidationError::IndividualTooManyTalents,
            );
        }
        Some(PoType::Group) if total < 2 => {
            errors.insert(FieldPath::Group, ValidationError::GroupTooFewTalents);
        }
        _ => {}
    }
}

fn required(key: HeaderKey, errors: &mut ValidationErrors) {
    errors.insert(FieldPath::Header(key), ValidationError::Required(key));
}

/// Checks a required date field and returns the parsed date when valid.
fn check_date(key: HeaderKey, value: &str, errors: &mut ValidationErrors) -> Option<Date> {
    if value.is_empty() {
        required(key, errors);
        return None;
    }
    let parsed = Date::parse(value, format_description!("[year]-[month]-[day]")).ok();
    if parsed.is_none() {
        errors.insert(FieldPath::Header(key), ValidationError::InvalidDate);
    }
    parsed
}
