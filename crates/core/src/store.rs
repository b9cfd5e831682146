// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::ids::{IdGenerator, SequentialIds};
use crate::sink::SubmissionSink;
use crate::snapshot::PurchaseOrderSnapshot;
use crate::state::{Transition, TransitionResult};
use po_form_domain::{
    FormMode, FormState, HeaderEdit, JobId, ReferenceCatalog, RequisitionOption, RosterTalent,
    TalentEdit, TalentId, ValidationErrors, validate,
};
use tracing::{debug, info};

/// The result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid, is now locked, and the sink received it.
    Accepted,
    /// The form is invalid and stays editable. The errors are also stored
    /// on the form for display.
    Rejected(ValidationErrors),
    /// The form was already locked; the sink was not called.
    AlreadyLocked,
}

/// Owns the form for one editing session.
///
/// All changes go through [`Command`]s, applied with [`crate::apply`].
/// The catalog and the identifier generator are injected at construction.
#[derive(Debug)]
pub struct FormStore<C, G = SequentialIds> {
    catalog: C,
    ids: G,
    state: FormState,
}

impl<C: ReferenceCatalog> FormStore<C> {
    /// Creates a store with sequential identifiers.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_id_generator(catalog, SequentialIds::new())
    }
}

impl<C: ReferenceCatalog, G: IdGenerator> FormStore<C, G> {
    /// Creates a store drawing identifiers from `ids`.
    #[must_use]
    pub fn with_id_generator(catalog: C, mut ids: G) -> Self {
        let state: FormState = FormState::new(ids.next_job_id());
        Self {
            catalog,
            ids,
            state,
        }
    }

    /// Returns the current form.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the reference catalog.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns whether the form has been submitted and locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.state.mode.is_locked()
    }

    /// Returns the errors from the last rejected submit.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    /// Applies a command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command references data the catalog does
    /// not allow. The form is unchanged in that case.
    pub fn apply(&mut self, command: Command) -> Result<Transition, CoreError> {
        let name: &'static str = command.name();
        let result: TransitionResult = apply(&self.catalog, &self.state, command, &mut self.ids)
            .inspect_err(|e| debug!(command = name, "Command rejected: {e}"))?;

        match &result.transition {
            Transition::Ignored(reason) => debug!(command = name, %reason, "Command ignored"),
            transition => debug!(command = name, ?transition, "Command applied"),
        }

        self.state = result.new_state;
        Ok(result.transition)
    }

    /// Selects or clears the client, replacing all jobs with one blank job.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not in the catalog.
    pub fn set_client(&mut self, client_id: Option<&str>) -> Result<Transition, CoreError> {
        self.apply(Command::SetClient {
            client_id: client_id.map(ToString::to_string),
        })
    }

    /// Changes a single header field.
    ///
    /// # Errors
    ///
    /// Header edits do not fail; the `Result` matches the other operations.
    pub fn set_header_field(&mut self, edit: HeaderEdit) -> Result<Transition, CoreError> {
        self.apply(Command::SetHeaderField { edit })
    }

    /// Appends a blank job.
    ///
    /// # Errors
    ///
    /// Adding a job does not fail; the `Result` matches the other operations.
    pub fn add_job(&mut self) -> Result<Transition, CoreError> {
        self.apply(Command::AddJob)
    }

    /// Removes a job. Unknown jobs are ignored.
    ///
    /// # Errors
    ///
    /// Removing a job does not fail; the `Result` matches the other operations.
    pub fn remove_job(&mut self, job_id: JobId) -> Result<Transition, CoreError> {
        self.apply(Command::RemoveJob { job_id })
    }

    /// Selects or clears a job's requisition, emptying its talents.
    ///
    /// # Errors
    ///
    /// Returns an error if the requisition is unknown or not offered to the
    /// selected client.
    pub fn set_job_requisition(
        &mut self,
        job_id: JobId,
        requisition_key: Option<&str>,
    ) -> Result<Transition, CoreError> {
        self.apply(Command::SetJobRequisition {
            job_id,
            requisition_key: requisition_key.map(ToString::to_string),
        })
    }

    /// Appends a manual talent, or a roster talent when `source_talent_id` is given.
    ///
    /// Ignored when the PO type is Individual and a talent already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster talent is not a selectable talent of
    /// the job's requisition.
    pub fn add_talent(
        &mut self,
        job_id: JobId,
        source_talent_id: Option<&str>,
    ) -> Result<Transition, CoreError> {
        self.apply(Command::AddTalent {
            job_id,
            source_talent_id: source_talent_id.map(ToString::to_string),
        })
    }

    /// Appends the first selectable roster talent of the job's requisition.
    ///
    /// Returns `Ok(None)` when the job is unknown or has nothing selectable.
    ///
    /// # Errors
    ///
    /// See [`Self::add_talent`].
    pub fn add_first_roster_talent(
        &mut self,
        job_id: JobId,
    ) -> Result<Option<Transition>, CoreError> {
        let Some(first) = self.available_talents(job_id).first().map(|t| t.id.clone()) else {
            return Ok(None);
        };
        self.add_talent(job_id, Some(&first)).map(Some)
    }

    /// Removes a talent from a job. Unknown jobs or talents are ignored.
    ///
    /// # Errors
    ///
    /// Removing a talent does not fail; the `Result` matches the other operations.
    pub fn remove_talent(
        &mut self,
        job_id: JobId,
        talent_id: TalentId,
    ) -> Result<Transition, CoreError> {
        self.apply(Command::RemoveTalent { job_id, talent_id })
    }

    /// Changes a single talent field.
    ///
    /// # Errors
    ///
    /// Returns an error if a roster selection is not a selectable talent of
    /// the job's requisition.
    pub fn set_talent_field(
        &mut self,
        job_id: JobId,
        talent_id: TalentId,
        edit: TalentEdit,
    ) -> Result<Transition, CoreError> {
        self.apply(Command::SetTalentField {
            job_id,
            talent_id,
            edit,
        })
    }

    /// Discards everything and returns to the initial form.
    ///
    /// Works in every mode. The new blank job gets a fresh identifier.
    pub fn reset(&mut self) {
        self.state = FormState::new(self.ids.next_job_id());
        info!("Form reset");
    }

    /// Validates the form and, if it is valid, locks it and hands it to `sink`.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        if self.is_locked() {
            debug!("Submit ignored: form is locked");
            return SubmitOutcome::AlreadyLocked;
        }

        let errors: ValidationErrors = validate(&self.state);
        if !errors.is_empty() {
            debug!(error_count = errors.len(), "Submit rejected");
            self.state.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        self.state.errors = ValidationErrors::new();
        self.state.mode = FormMode::Locked;
        let snapshot: PurchaseOrderSnapshot =
            PurchaseOrderSnapshot::from_state(&self.state, &self.catalog);
        info!(
            po_number = %snapshot.po_number,
            jobs = snapshot.jobs.len(),
            talents = self.state.total_talents(),
            "Form submitted and locked"
        );
        sink.submit(&snapshot);
        SubmitOutcome::Accepted
    }

    /// Returns the display name of the selected client, empty if none.
    #[must_use]
    pub fn client_name(&self) -> &str {
        self.state
            .header
            .client_id
            .as_deref()
            .and_then(|id| self.catalog.client(id))
            .map_or("", |c| c.name.as_str())
    }

    /// Lists the requisitions of the selected client.
    #[must_use]
    pub fn requisition_options(&self) -> Vec<RequisitionOption> {
        self.state
            .header
            .client_id
            .as_deref()
            .map(|id| self.catalog.list_requisitions_for_client(id))
            .unwrap_or_default()
    }

    /// Lists the roster talents that can be picked for a job.
    #[must_use]
    pub fn available_talents(&self, job_id: JobId) -> Vec<&RosterTalent> {
        self.state
            .job(job_id)
            .and_then(|job| job.requisition_key.as_deref())
            .and_then(|key| self.catalog.get_requisition(key))
            .map(|req| req.selectable_talents())
            .unwrap_or_default()
    }

    /// Counts talents across all jobs.
    #[must_use]
    pub fn total_talents(&self) -> usize {
        self.state.total_talents()
    }

    /// Returns whether the surface should offer removing a job.
    #[must_use]
    pub fn can_remove_job(&self) -> bool {
        !self.is_locked() && self.state.jobs.len() > 1
    }
}
