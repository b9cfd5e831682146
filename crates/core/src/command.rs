// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use po_form_domain::{HeaderEdit, JobId, TalentEdit, TalentId};

/// A command represents user intent as data only.
///
/// Commands are the only way to request changes to the form. Reset and
/// submit are not commands: they act on the store as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select or clear the client. Replaces all jobs with one blank job.
    SetClient {
        /// The client identifier, `None` to clear.
        client_id: Option<String>,
    },
    /// Change a single header field.
    SetHeaderField {
        /// The field and its new value.
        edit: HeaderEdit,
    },
    /// Append a blank job.
    AddJob,
    /// Remove a job.
    RemoveJob {
        /// The job to remove.
        job_id: JobId,
    },
    /// Select or clear a job's requisition. Empties the job's talents.
    SetJobRequisition {
        /// The job to change.
        job_id: JobId,
        /// The requisition key, `None` to clear.
        requisition_key: Option<String>,
    },
    /// Append a talent to a job.
    AddTalent {
        /// The job to add to.
        job_id: JobId,
        /// Roster talent to copy from; `None` adds a manual talent.
        source_talent_id: Option<String>,
    },
    /// Remove a talent from a job.
    RemoveTalent {
        /// The job holding the talent.
        job_id: JobId,
        /// The talent to remove.
        talent_id: TalentId,
    },
    /// Change a single talent field.
    SetTalentField {
        /// The job holding the talent.
        job_id: JobId,
        /// The talent to change.
        talent_id: TalentId,
        /// The field and its new value.
        edit: TalentEdit,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetClient { .. } => "SetClient",
            Self::SetHeaderField { .. } => "SetHeaderField",
            Self::AddJob => "AddJob",
            Self::RemoveJob { .. } => "RemoveJob",
            Self::SetJobRequisition { .. } => "SetJobRequisition",
            Self::AddTalent { .. } => "AddTalent",
            Self::RemoveTalent { .. } => "RemoveTalent",
            Self::SetTalentField { .. } => "SetTalentField",
        }
    }
}
