// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::EntityId;
use super::keys::{InstanceKey, ProcessKey, TransportKey};

/// Typed payload value carried by one name/value report pair.
///
/// Integer, floating-point and string values are rendered into the tree;
/// aggregate statistics and string lists are accepted but displayed as a
/// fixed placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportValue {
    Integer(i64),
    Double(f64),
    Text(String),
    Statistics(Vec<f64>),
    TextList(Vec<String>),
}

/// One name/value pair of a report payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nvp {
    name: String,
    value: ReportValue,
}

impl Nvp {
    pub fn new(name: impl Into<String>, value: ReportValue) -> Self {
        Self { name: name.into(), value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ReportValue {
        &self.value
    }
}

/// A discrete, self-contained status report about one monitored entity.
///
/// Reports may arrive in any order; referencing a parent that has not been
/// reported yet is normal and must not be rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Process {
        key: ProcessKey,
        attributes: Vec<Nvp>,
    },
    /// The monitored process disappeared; its subtree is removed.
    ProcessExit {
        key: ProcessKey,
    },
    Transport {
        key: TransportKey,
        attributes: Vec<Nvp>,
    },
    Participant {
        process: ProcessKey,
        id: EntityId,
        attributes: Vec<Nvp>,
    },
    Topic {
        participant: EntityId,
        id: EntityId,
        attributes: Vec<Nvp>,
    },
    Instance {
        key: InstanceKey,
        attributes: Vec<Nvp>,
    },
    Writer {
        instance: InstanceKey,
        id: EntityId,
        transport: Option<u32>,
        topic: Option<EntityId>,
        attributes: Vec<Nvp>,
    },
    Reader {
        instance: InstanceKey,
        id: EntityId,
        transport: Option<u32>,
        topic: Option<EntityId>,
        attributes: Vec<Nvp>,
    },
}
