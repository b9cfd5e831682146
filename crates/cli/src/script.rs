// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scripted user actions.
//!
//! Jobs and talents are addressed by position, as on screen; positions are
//! resolved to identifiers against the form at the time each step runs.

use color_eyre::eyre::{Result, eyre};
use po_form::Command;
use po_form_domain::{
    Currency, FormState, HeaderEdit, JobId, PoType, TalentEdit, TalentId, TalentSource,
};
use serde::Deserialize;

/// Value of the roster selector that switches a talent to manual entry.
const MANUAL_OPTION: &str = "manual";

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Select or clear the client.
    SetClient {
        /// Client identifier; `null` or empty clears it.
        client: Option<String>,
    },
    /// Change a header field by name (`poType`, `budget`, ...).
    SetHeader {
        /// The field name.
        field: String,
        /// The value as typed.
        value: String,
    },
    /// Append a job.
    AddJob,
    /// Remove the job at a position.
    RemoveJob {
        /// Job position.
        job: usize,
    },
    /// Select or clear a job's requisition.
    SetRequisition {
        /// Job position.
        job: usize,
        /// Requisition key; `null` or empty clears it.
        requisition: Option<String>,
    },
    /// Append a manual talent, or a roster talent when `source` is given.
    AddTalent {
        /// Job position.
        job: usize,
        /// Roster talent identifier.
        #[serde(default)]
        source: Option<String>,
    },
    /// Append the first selectable roster talent.
    AddRosterTalent {
        /// Job position.
        job: usize,
    },
    /// Remove the talent at a position.
    RemoveTalent {
        /// Job position.
        job: usize,
        /// Talent position within the job.
        talent: usize,
    },
    /// Change a talent field by name (`name`, `billRate`, `source`, ...).
    SetTalent {
        /// Job position.
        job: usize,
        /// Talent position within the job.
        talent: usize,
        /// The field name.
        field: String,
        /// The value as typed or selected.
        value: String,
    },
    /// Attempt to submit.
    Submit,
    /// Discard the form.
    Reset,
}

/// Parses a header field assignment.
///
/// # Errors
///
/// Returns an error for unknown field names and unparseable enum values.
pub fn header_edit(field: &str, value: &str) -> Result<HeaderEdit> {
    let value: String = value.to_string();
    let edit: HeaderEdit = match field {
        "poType" if value.is_empty() => HeaderEdit::PoType(None),
        "poType" => HeaderEdit::PoType(Some(value.parse::<PoType>()?)),
        "poNumber" => HeaderEdit::PoNumber(value),
        "receivedOn" => HeaderEdit::ReceivedOn(value),
        "receivedFromName" => HeaderEdit::ReceivedFromName(value),
        "receivedFromEmail" => HeaderEdit::ReceivedFromEmail(value),
        "poStartDate" => HeaderEdit::PoStartDate(value),
        "poEndDate" => HeaderEdit::PoEndDate(value),
        "budget" => HeaderEdit::Budget(value),
        "currency" => HeaderEdit::Currency(value.parse::<Currency>()?),
        _ => return Err(eyre!("Unknown header field '{field}'")),
    };
    Ok(edit)
}

/// Parses a talent field assignment.
///
/// # Errors
///
/// Returns an error for unknown field names and unparseable currencies.
pub fn talent_edit(field: &str, value: &str) -> Result<TalentEdit> {
    let value: String = value.to_string();
    let edit: TalentEdit = match field {
        "name" => TalentEdit::Name(value),
        "source" if value == MANUAL_OPTION => TalentEdit::Source(TalentSource::Manual),
        "source" if value.is_empty() => TalentEdit::Source(TalentSource::Unselected),
        "source" => TalentEdit::Source(TalentSource::Roster(value)),
        "contractDuration" => TalentEdit::ContractDuration(value),
        "billRate" => TalentEdit::BillRate(value),
        "currency" => TalentEdit::Currency(value.parse::<Currency>()?),
        "standardRate" => TalentEdit::StandardRate(value),
        "standardCurrency" => TalentEdit::StandardCurrency(value.parse::<Currency>()?),
        "overtimeRate" => TalentEdit::OvertimeRate(value),
        "overtimeCurrency" => TalentEdit::OvertimeCurrency(value.parse::<Currency>()?),
        _ => return Err(eyre!("Unknown talent field '{field}'")),
    };
    Ok(edit)
}

/// Resolves a job position.
///
/// # Errors
///
/// Returns an error if there is no job at that position.
pub fn job_at(state: &FormState, job: usize) -> Result<JobId> {
    state
        .jobs
        .get(job)
        .map(|j| j.id)
        .ok_or_else(|| eyre!("No job #{}", job + 1))
}

/// Resolves a talent position within a job position.
///
/// # Errors
///
/// Returns an error if there is no job or talent at those positions.
pub fn talent_at(state: &FormState, job: usize, talent: usize) -> Result<(JobId, TalentId)> {
    let job_id: JobId = job_at(state, job)?;
    let talent_id: TalentId = state.jobs[job]
        .talents
        .get(talent)
        .map(|t| t.id)
        .ok_or_else(|| eyre!("No talent #{} on job #{}", talent + 1, job + 1))?;
    Ok((job_id, talent_id))
}

impl Step {
    /// Converts a form-editing step into a store command.
    ///
    /// Returns `Ok(None)` for steps that are not commands (submit, reset and
    /// the roster shortcut).
    ///
    /// # Errors
    ///
    /// Returns an error if the step addresses a missing row or names an
    /// unknown field.
    pub fn to_command(&self, state: &FormState) -> Result<Option<Command>> {
        let command: Command = match self {
            Self::SetClient { client } => Command::SetClient {
                client_id: client.clone(),
            },
            Self::SetHeader { field, value } => Command::SetHeaderField {
                edit: header_edit(field, value)?,
            },
            Self::AddJob => Command::AddJob,
            Self::RemoveJob { job } => Command::RemoveJob {
                job_id: job_at(state, *job)?,
            },
            Self::SetRequisition { job, requisition } => Command::SetJobRequisition {
                job_id: job_at(state, *job)?,
                requisition_key: requisition.clone(),
            },
            Self::AddTalent { job, source } => Command::AddTalent {
                job_id: job_at(state, *job)?,
                source_talent_id: source.clone(),
            },
            Self::RemoveTalent { job, talent } => {
                let (job_id, talent_id) = talent_at(state, *job, *talent)?;
                Command::RemoveTalent { job_id, talent_id }
            }
            Self::SetTalent {
                job,
                talent,
                field,
                value,
            } => {
                let (job_id, talent_id) = talent_at(state, *job, *talent)?;
                Command::SetTalentField {
                    job_id,
                    talent_id,
                    edit: talent_edit(field, value)?,
                }
            }
            Self::AddRosterTalent { .. } | Self::Submit | Self::Reset => return Ok(None),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_deserialize_from_script() {
        let json: &str = r#"[
            { "set_client": { "client": "c1" } },
            "add_job",
            { "add_talent": { "job": 1 } },
            { "set_talent": { "job": 0, "talent": 0, "field": "billRate", "value": "5" } },
            "submit",
            "reset"
        ]"#;

        let steps: Vec<Step> = serde_json::from_str(json).unwrap();

        assert_eq!(steps.len(), 6);
        assert_eq!(
            steps[0],
            Step::SetClient {
                client: Some(String::from("c1"))
            }
        );
        assert_eq!(steps[1], Step::AddJob);
        assert_eq!(
            steps[2],
            Step::AddTalent {
                job: 1,
                source: None
            }
        );
        assert_eq!(steps[5], Step::Reset);
    }

    #[test]
    fn test_header_edit_parses_po_type_and_currency() {
        assert_eq!(
            header_edit("poType", "Group").unwrap(),
            HeaderEdit::PoType(Some(PoType::Group))
        );
        assert_eq!(header_edit("poType", "").unwrap(), HeaderEdit::PoType(None));
        assert_eq!(
            header_edit("currency", "INR").unwrap(),
            HeaderEdit::Currency(Currency::Inr)
        );
        assert!(header_edit("poType", "Solo").is_err());
        assert!(header_edit("colour", "red").is_err());
    }

    #[test]
    fn test_talent_source_values_follow_roster_selector() {
        assert_eq!(
            talent_edit("source", "manual").unwrap(),
            TalentEdit::Source(TalentSource::Manual)
        );
        assert_eq!(
            talent_edit("source", "").unwrap(),
            TalentEdit::Source(TalentSource::Unselected)
        );
        assert_eq!(
            talent_edit("source", "t2").unwrap(),
            TalentEdit::Source(TalentSource::Roster(String::from("t2")))
        );
    }

    #[test]
    fn test_positions_resolve_against_current_form() {
        let state: FormState = FormState::new(JobId::new(7));

        let command: Option<Command> = Step::RemoveJob { job: 0 }.to_command(&state).unwrap();

        assert_eq!(
            command,
            Some(Command::RemoveJob {
                job_id: JobId::new(7)
            })
        );
        assert!(Step::RemoveJob { job: 1 }.to_command(&state).is_err());
        assert!(
            Step::RemoveTalent { job: 0, talent: 0 }
                .to_command(&state)
                .is_err()
        );
        assert_eq!(Step::Submit.to_command(&state).unwrap(), None);
    }
}
