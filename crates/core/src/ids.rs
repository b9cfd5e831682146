// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use po_form_domain::{JobId, TalentId};

/// Source of identifiers for new jobs and talents.
///
/// Jobs and talents draw from the same sequence, so an identifier is never
/// handed out twice by one generator.
pub trait IdGenerator {
    /// Returns the next unused raw identifier.
    fn next_id(&mut self) -> u64;

    /// Returns an identifier for a new job.
    fn next_job_id(&mut self) -> JobId {
        JobId::new(self.next_id())
    }

    /// Returns an identifier for a new talent.
    fn next_talent_id(&mut self) -> TalentId {
        TalentId::new(self.next_id())
    }
}

/// A monotonic counter starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates a counter whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id: u64 = self.next;
        self.next += 1;
        id
    }
}
