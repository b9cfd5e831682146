// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::ids::IdGenerator;
use crate::state::{IgnoreReason, Transition, TransitionResult};
use po_form_domain::{
    Currency, DomainError, FormState, Job, JobId, PoType, ReferenceCatalog, RosterTalent, Talent,
    TalentEdit, TalentId, TalentSource,
};

/// Applies a command to the current form, producing the next form.
///
/// The input state is never modified. Commands that cannot take effect
/// (locked form, unknown job or talent, the Individual talent cap) yield
/// `Transition::Ignored` with an unchanged copy of the state. New
/// identifiers are drawn from `ids` only when a job or talent is created.
///
/// # Arguments
///
/// * `catalog` - The reference data the form draws on
/// * `state` - The current form (immutable)
/// * `command` - The command to apply
/// * `ids` - The identifier generator
///
/// # Errors
///
/// Returns an error if the command references data the catalog does not
/// allow:
/// - An unknown client
/// - A requisition that is unknown or not offered to the selected client
/// - A roster talent that is missing or not in the `moved` stage
pub fn apply<C, G>(
    catalog: &C,
    state: &FormState,
    command: Command,
    ids: &mut G,
) -> Result<TransitionResult, CoreError>
where
    C: ReferenceCatalog + ?Sized,
    G: IdGenerator + ?Sized,
{
    if state.mode.is_locked() {
        return Ok(ignored(state, IgnoreReason::Locked));
    }

    let mut new_state: FormState = state.clone();

    let transition: Transition = match command {
        Command::SetClient { client_id } => {
            let client_id: Option<String> = client_id.filter(|id| !id.is_empty());
            if let Some(unknown) = client_id
                .as_deref()
                .filter(|id| catalog.client(id).is_none())
            {
                return Err(DomainError::ClientNotFound(unknown.to_string()).into());
            }
            new_state.header.client_id = client_id;

            // Requisitions belong to a client, so every job is stale now
            let job_id: JobId = ids.next_job_id();
            new_state.jobs = vec![Job::new(job_id)];
            Transition::JobAdded(job_id)
        }
        Command::SetHeaderField { edit } => {
            new_state.header.apply_edit(edit);
            Transition::Applied
        }
        Command::AddJob => {
            let job_id: JobId = ids.next_job_id();
            new_state.jobs.push(Job::new(job_id));
            Transition::JobAdded(job_id)
        }
        Command::RemoveJob { job_id } => {
            let Some(index) = new_state.jobs.iter().position(|j| j.id == job_id) else {
                return Ok(ignored(state, IgnoreReason::JobNotFound(job_id)));
            };
            new_state.jobs.remove(index);
            Transition::Applied
        }
        Command::SetJobRequisition {
            job_id,
            requisition_key,
        } => {
            if state.job(job_id).is_none() {
                return Ok(ignored(state, IgnoreReason::JobNotFound(job_id)));
            }
            let requisition_key: Option<String> = requisition_key.filter(|k| !k.is_empty());
            let requisition_id: String = match &requisition_key {
                Some(key) => lookup_requisition_id(catalog, &new_state, key)?,
                None => String::new(),
            };
            let Some(job) = new_state.job_mut(job_id) else {
                return Ok(ignored(state, IgnoreReason::JobNotFound(job_id)));
            };
            job.select_requisition(requisition_key, requisition_id);
            Transition::Applied
        }
        Command::AddTalent {
            job_id,
            source_talent_id,
        } => {
            let Some(job) = state.job(job_id) else {
                return Ok(ignored(state, IgnoreReason::JobNotFound(job_id)));
            };

            // Rule: an Individual PO carries at most one talent; extra adds are dropped
            if state.header.po_type == Some(PoType::Individual) && state.total_talents() >= 1 {
                return Ok(ignored(state, IgnoreReason::IndividualTalentLimit));
            }

            let roster: Option<&RosterTalent> = match &source_talent_id {
                Some(talent_id) => Some(resolve_roster_talent(
                    catalog,
                    job.requisition_key.as_deref(),
                    talent_id,
                )?),
                None => None,
            };

            let currency: Currency = state.header.currency;
            let talent_id: TalentId = ids.next_talent_id();
            let talent: Talent = match roster {
                Some(roster) => Talent::from_roster(talent_id, roster, currency),
                None => Talent::manual(talent_id, currency),
            };
            if let Some(job) = new_state.job_mut(job_id) {
                job.talents.push(talent);
            }
            Transition::TalentAdded { job_id, talent_id }
        }
        Command::RemoveTalent { job_id, talent_id } => {
            let Some(job) = new_state.job_mut(job_id) else {
                return Ok(ignored(state, IgnoreReason::JobNotFound(job_id)));
            };
            let Some(index) = job.talents.iter().position(|t| t.id == talent_id) else {
                return Ok(ignored(
                    state,
                    IgnoreReason::TalentNotFound { job_id, talent_id },
                ));
            };
            job.talents.remove(index);
            Transition::Applied
        }
        Command::SetTalentField {
            job_id,
            talent_id,
            edit,
        } => {
            let Some(job) = new_state.job_mut(job_id) else {
                return Ok(ignored(state, IgnoreReason::JobNotFound(job_id)));
            };
            let requisition_key: Option<String> = job.requisition_key.clone();
            let Some(talent) = job.talent_mut(talent_id) else {
                return Ok(ignored(
                    state,
                    IgnoreReason::TalentNotFound { job_id, talent_id },
                ));
            };

            match edit {
                TalentEdit::Source(TalentSource::Manual) => talent.switch_to_manual(),
                TalentEdit::Source(TalentSource::Unselected) => talent.clear_selection(),
                TalentEdit::Source(TalentSource::Roster(roster_id)) => {
                    let roster: &RosterTalent =
                        resolve_roster_talent(catalog, requisition_key.as_deref(), &roster_id)?;
                    talent.bind_to_roster(roster);
                }
                edit => {
                    if !talent.apply_edit(edit) {
                        return Ok(ignored(state, IgnoreReason::RosterBoundName));
                    }
                }
            }
            Transition::Applied
        }
    };

    Ok(TransitionResult {
        new_state,
        transition,
    })
}

fn ignored(state: &FormState, reason: IgnoreReason) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        transition: Transition::Ignored(reason),
    }
}

/// Checks a requisition against the selected client and returns its display id.
fn lookup_requisition_id<C>(
    catalog: &C,
    state: &FormState,
    requisition_key: &str,
) -> Result<String, DomainError>
where
    C: ReferenceCatalog + ?Sized,
{
    let requisition = catalog
        .get_requisition(requisition_key)
        .ok_or_else(|| DomainError::RequisitionNotFound(requisition_key.to_string()))?;

    let client_id: Option<&str> = state.header.client_id.as_deref();
    if !client_id.is_some_and(|c| catalog.client_has_requisition(c, requisition_key)) {
        return Err(DomainError::RequisitionNotForClient {
            requisition_key: requisition_key.to_string(),
            client_id: client_id.map(ToString::to_string),
        });
    }

    Ok(requisition.id.clone())
}

/// Finds a selectable roster talent on the job's requisition.
fn resolve_roster_talent<'c, C>(
    catalog: &'c C,
    requisition_key: Option<&str>,
    talent_id: &str,
) -> Result<&'c RosterTalent, DomainError>
where
    C: ReferenceCatalog + ?Sized,
{
    let requisition_key: &str = requisition_key.ok_or(DomainError::NoRequisitionSelected)?;
    let requisition = catalog
        .get_requisition(requisition_key)
        .ok_or_else(|| DomainError::RequisitionNotFound(requisition_key.to_string()))?;
    let roster: &RosterTalent =
        requisition
            .talent(talent_id)
            .ok_or_else(|| DomainError::RosterTalentNotFound {
                requisition_key: requisition_key.to_string(),
                talent_id: talent_id.to_string(),
            })?;

    // Rule: only talents moved forward in the pipeline can be placed on a PO
    if !roster.stage.is_selectable() {
        return Err(DomainError::RosterTalentNotSelectable {
            talent_id: talent_id.to_string(),
            stage: roster.stage.value().to_string(),
        });
    }

    Ok(roster)
}
