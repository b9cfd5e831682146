// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::snapshot::PurchaseOrderSnapshot;
use tracing::{error, info};

/// Receives accepted purchase orders.
///
/// Called exactly once per successful submit. Delivery is fire-and-forget:
/// the form locks regardless of what the sink does with the snapshot.
pub trait SubmissionSink {
    /// Accepts a submitted purchase order.
    fn submit(&mut self, snapshot: &PurchaseOrderSnapshot);
}

/// Writes each submission to the log as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, snapshot: &PurchaseOrderSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(json) => info!(po_number = %snapshot.po_number, "Form submitted: {json}"),
            Err(e) => error!(po_number = %snapshot.po_number, "Failed to encode submission: {e}"),
        }
    }
}

/// Keeps every submission in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    submissions: Vec<PurchaseOrderSnapshot>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            submissions: Vec::new(),
        }
    }

    /// Returns the submissions received so far, oldest first.
    #[must_use]
    pub fn submissions(&self) -> &[PurchaseOrderSnapshot] {
        &self.submissions
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, snapshot: &PurchaseOrderSnapshot) {
        self.submissions.push(snapshot.clone());
    }
}
