// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::ids::EntityId;

/// Host identifier as reported by the monitored system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HostKey(SmolStr);

impl HostKey {
    pub fn new(host: impl Into<SmolStr>) -> Self {
        Self(host.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HostKey {
    fn from(host: &str) -> Self {
        Self::new(host)
    }
}

/// `(host, process-id)`, ordered by host then process-id.
///
/// Field order carries the ordering contract; keep it when editing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProcessKey {
    host: HostKey,
    pid: u32,
}

impl ProcessKey {
    pub fn new(host: impl Into<HostKey>, pid: u32) -> Self {
        Self { host: host.into(), pid }
    }

    pub fn host(&self) -> &HostKey {
        &self.host
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }
}

/// `(host, process-id, transport-id)`, ordered by host, pid, then transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransportKey {
    host: HostKey,
    pid: u32,
    transport: u32,
}

impl TransportKey {
    pub fn new(host: impl Into<HostKey>, pid: u32, transport: u32) -> Self {
        Self { host: host.into(), pid, transport }
    }

    pub fn host(&self) -> &HostKey {
        &self.host
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn transport(&self) -> u32 {
        self.transport
    }

    /// The process this transport belongs to.
    pub fn process(&self) -> ProcessKey {
        ProcessKey::new(self.host.clone(), self.pid)
    }
}

/// `(owning-participant id, instance-handle)`, ordered by id then handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceKey {
    owner: EntityId,
    handle: i32,
}

impl InstanceKey {
    pub fn new(owner: EntityId, handle: i32) -> Self {
        Self { owner, handle }
    }

    pub fn owner(&self) -> &EntityId {
        &self.owner
    }

    pub fn handle(&self) -> i32 {
        self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::{HostKey, InstanceKey, ProcessKey, TransportKey};
    use crate::model::ids::EntityId;

    #[test]
    fn process_keys_order_by_host_then_pid() {
        let a = ProcessKey::new("alpha", 99);
        let b = ProcessKey::new("beta", 1);
        assert!(a < b);
        assert!(ProcessKey::new("alpha", 1) < a);
    }

    #[test]
    fn transport_keys_order_by_host_pid_then_transport() {
        let a = TransportKey::new("alpha", 1, 9);
        let b = TransportKey::new("alpha", 2, 1);
        assert!(a < b);
        assert!(TransportKey::new("alpha", 1, 1) < a);
        assert!(b < TransportKey::new("beta", 0, 0));
    }

    #[test]
    fn instance_keys_order_by_owner_then_handle() {
        let low = EntityId::from_u128(1);
        let high = EntityId::from_u128(2);
        assert!(InstanceKey::new(low, 7) < InstanceKey::new(high, 0));
        assert!(InstanceKey::new(low, 0) < InstanceKey::new(low, 7));
    }

    #[test]
    fn transport_key_projects_its_process() {
        let key = TransportKey::new("h1", 7, 0xAB);
        assert_eq!(key.process(), ProcessKey::new("h1", 7));
    }

    #[test]
    fn host_key_round_trips_via_str() {
        let key = HostKey::from("h1");
        assert_eq!(key.as_str(), "h1");
        assert_eq!(key.to_string(), "h1");
    }
}
