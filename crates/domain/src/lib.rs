// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod form;
mod sanitize;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use catalog::{
    Client, ReferenceCatalog, Requisition, RequisitionOption, RosterTalent, StaticCatalog,
    TalentStage,
};
pub use error::DomainError;
pub use form::{
    FormState, HeaderEdit, Job, PurchaseOrderHeader, Talent, TalentEdit, TalentSource,
};
pub use sanitize::digits_only;
pub use types::{Currency, FormMode, JobId, PoType, TalentId};
pub use validation::{
    FieldPath, HeaderKey, TalentKey, ValidationError, ValidationErrors, validate,
};
