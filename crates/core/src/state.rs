// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use po_form_domain::{FormState, JobId, TalentId};

/// Why a command left the form unchanged without raising an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The form is locked after a successful submit.
    Locked,
    /// No job has the given identifier.
    JobNotFound(JobId),
    /// The job has no talent with the given identifier.
    TalentNotFound {
        /// The job that was searched.
        job_id: JobId,
        /// The talent that was not found.
        talent_id: TalentId,
    },
    /// An Individual PO already carries its one talent.
    IndividualTalentLimit,
    /// Roster-bound talent names change only through the roster selector.
    RosterBoundName,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locked => write!(f, "form is locked"),
            Self::JobNotFound(job_id) => write!(f, "{job_id} not found"),
            Self::TalentNotFound { job_id, talent_id } => {
                write!(f, "{talent_id} not found in {job_id}")
            }
            Self::IndividualTalentLimit => {
                write!(f, "Individual PO already has its talent")
            }
            Self::RosterBoundName => write!(f, "talent name is bound to the roster"),
        }
    }
}

/// What a command did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The form changed.
    Applied,
    /// A job was appended, or all jobs were replaced by this one.
    JobAdded(JobId),
    /// A talent was appended to a job.
    TalentAdded {
        /// The job the talent was added to.
        job_id: JobId,
        /// The new talent.
        talent_id: TalentId,
    },
    /// The form is unchanged.
    Ignored(IgnoreReason),
}

impl Transition {
    /// Returns whether the command changed the form.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

/// The result of a successful call to [`crate::apply`].
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The form after the command.
    pub new_state: FormState,
    /// What the command did.
    pub transition: Transition,
}
