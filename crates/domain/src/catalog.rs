// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only reference data: clients, requisitions and requisition rosters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A client that purchase orders can be raised for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// The client identifier.
    pub id: String,
    /// The client display name.
    pub name: String,
    /// Keys of the requisitions offered to this client, in display order.
    #[serde(default)]
    pub requisitions: Vec<String>,
}

/// A requisition's pipeline stage for one of its candidate talents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TalentStage(String);

impl TalentStage {
    /// The only stage from which a talent can be picked onto a purchase order.
    pub const MOVED: &'static str = "moved";

    /// Creates a stage from its string value.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the stage value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns whether talents in this stage may be selected from a roster.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.0 == Self::MOVED
    }
}

/// A candidate on a requisition's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTalent {
    /// The roster talent identifier.
    pub id: String,
    /// The talent's display name.
    pub name: String,
    /// The talent's pipeline stage.
    pub stage: TalentStage,
}

/// A job opening with its candidate roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requisition {
    /// The requisition display identifier (e.g. `OWNAI_234`).
    pub id: String,
    /// The job title.
    pub title: String,
    /// Candidate talents.
    #[serde(default)]
    pub talents: Vec<RosterTalent>,
}

impl Requisition {
    /// Returns the roster talents that can be selected onto a purchase order.
    #[must_use]
    pub fn selectable_talents(&self) -> Vec<&RosterTalent> {
        self.talents
            .iter()
            .filter(|t| t.stage.is_selectable())
            .collect()
    }

    /// Finds a roster talent by identifier regardless of stage.
    #[must_use]
    pub fn talent(&self, talent_id: &str) -> Option<&RosterTalent> {
        self.talents.iter().find(|t| t.id == talent_id)
    }
}

/// A requisition as listed in the job selector of a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisitionOption {
    /// The requisition key used to reference it.
    pub key: String,
    /// The requisition display identifier.
    pub id: String,
    /// The job title.
    pub title: String,
}

/// Source of the clients, requisitions and rosters the form draws on.
///
/// Implementations are read-only from the form's point of view.
pub trait ReferenceCatalog {
    /// Lists all clients.
    fn list_clients(&self) -> &[Client];

    /// Looks up a requisition by key.
    fn get_requisition(&self, requisition_key: &str) -> Option<&Requisition>;

    /// Looks up a client by identifier.
    fn client(&self, client_id: &str) -> Option<&Client> {
        self.list_clients().iter().find(|c| c.id == client_id)
    }

    /// Lists the requisitions offered to a client.
    ///
    /// Unknown clients and dangling requisition keys yield no options.
    fn list_requisitions_for_client(&self, client_id: &str) -> Vec<RequisitionOption> {
        let Some(client) = self.client(client_id) else {
            return Vec::new();
        };
        client
            .requisitions
            .iter()
            .filter_map(|key| {
                self.get_requisition(key).map(|req| RequisitionOption {
                    key: key.clone(),
                    id: req.id.clone(),
                    title: req.title.clone(),
                })
            })
            .collect()
    }

    /// Returns whether a requisition is offered to a client.
    fn client_has_requisition(&self, client_id: &str, requisition_key: &str) -> bool {
        self.client(client_id)
            .is_some_and(|c| c.requisitions.iter().any(|k| k == requisition_key))
    }
}

/// An in-memory reference catalog.
///
/// Deserializes from `{ "clients": [...], "requisitions": { key: {...} } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    clients: Vec<Client>,
    #[serde(default)]
    requisitions: BTreeMap<String, Requisition>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clients: Vec::new(),
            requisitions: BTreeMap::new(),
        }
    }

    /// Adds a client offering the given requisition keys.
    #[must_use]
    pub fn with_client(mut self, id: &str, name: &str, requisitions: &[&str]) -> Self {
        self.clients.push(Client {
            id: id.to_string(),
            name: name.to_string(),
            requisitions: requisitions.iter().map(ToString::to_string).collect(),
        });
        self
    }

    /// Adds a requisition under the given key.
    #[must_use]
    pub fn with_requisition(mut self, key: &str, requisition: Requisition) -> Self {
        self.requisitions.insert(key.to_string(), requisition);
        self
    }
}

impl ReferenceCatalog for StaticCatalog {
    fn list_clients(&self) -> &[Client] {
        &self.clients
    }

    fn get_requisition(&self, requisition_key: &str) -> Option<&Requisition> {
        self.requisitions.get(requisition_key)
    }
}
