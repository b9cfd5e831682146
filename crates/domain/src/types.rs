// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of purchase order, which governs how many talents it may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoType {
    /// Exactly one talent across all jobs.
    Individual,
    /// Two or more talents across all jobs.
    Group,
}

impl PoType {
    /// Converts this PO type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Group => "Group",
        }
    }
}

impl FromStr for PoType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Individual" => Ok(Self::Individual),
            "Group" => Ok(Self::Group),
            _ => Err(DomainError::InvalidPoType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A supported currency.
///
/// The first variant is the default for new forms and new talents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// US Dollars.
    #[default]
    #[serde(rename = "USD")]
    Usd,
    /// Indian Rupees.
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    /// All supported currencies, in display order.
    pub const ALL: [Self; 2] = [Self::Usd, Self::Inr];

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Inr => "INR",
        }
    }

    /// Returns the label shown in currency selectors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Usd => "USD - Dollars ($)",
            Self::Inr => "INR - Rupees (\u{20b9})",
        }
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    /// Accepts either the ISO code or the selector label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == s || c.label() == s)
            .ok_or_else(|| DomainError::InvalidCurrency(s.to_string()))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identifier of a job within a form.
///
/// Assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(u64);

impl JobId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "job#{}", self.0)
    }
}

/// Identifier of a talent within a form.
///
/// Assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TalentId(u64);

impl TalentId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TalentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "talent#{}", self.0)
    }
}

/// Whether the form still accepts edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FormMode {
    /// Initial state. All mutations allowed.
    #[default]
    Editable,
    /// Entered after a successful submit. Only reset is accepted.
    Locked,
}

impl FormMode {
    /// Returns whether mutations are refused in this mode.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }
}
