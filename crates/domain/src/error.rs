// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised when a value or reference does not satisfy the domain contract.
///
/// These are distinct from validation errors: a `DomainError` means a
/// mutation was refused outright, while validation errors describe a form
/// that is simply not complete yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The PO type string is not a known PO type.
    InvalidPoType(String),
    /// The currency string is not a supported currency.
    InvalidCurrency(String),
    /// The client does not exist in the reference catalog.
    ClientNotFound(String),
    /// The requisition does not exist in the reference catalog.
    RequisitionNotFound(String),
    /// The requisition exists but is not offered to the selected client.
    RequisitionNotForClient {
        /// The requisition key.
        requisition_key: String,
        /// The currently selected client, if any.
        client_id: Option<String>,
    },
    /// A roster talent was requested for a job with no requisition selected.
    NoRequisitionSelected,
    /// The roster talent is not part of the job's requisition.
    RosterTalentNotFound {
        /// The requisition key.
        requisition_key: String,
        /// The requested roster talent identifier.
        talent_id: String,
    },
    /// The roster talent exists but is not in a selectable stage.
    RosterTalentNotSelectable {
        /// The requested roster talent identifier.
        talent_id: String,
        /// The talent's current stage.
        stage: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPoType(value) => write!(f, "Invalid PO type: '{value}'"),
            Self::InvalidCurrency(value) => write!(f, "Invalid currency: '{value}'"),
            Self::ClientNotFound(id) => write!(f, "Client '{id}' not found"),
            Self::RequisitionNotFound(key) => write!(f, "Requisition '{key}' not found"),
            Self::RequisitionNotForClient {
                requisition_key,
                client_id,
            } => match client_id {
                Some(client_id) => write!(
                    f,
                    "Requisition '{requisition_key}' does not belong to client '{client_id}'"
                ),
                None => write!(
                    f,
                    "Requisition '{requisition_key}' cannot be selected before a client"
                ),
            },
            Self::NoRequisitionSelected => {
                write!(f, "No requisition is selected for this job")
            }
            Self::RosterTalentNotFound {
                requisition_key,
                talent_id,
            } => write!(
                f,
                "Talent '{talent_id}' is not on the roster of requisition '{requisition_key}'"
            ),
            Self::RosterTalentNotSelectable { talent_id, stage } => write!(
                f,
                "Talent '{talent_id}' is in stage '{stage}' and cannot be selected"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
