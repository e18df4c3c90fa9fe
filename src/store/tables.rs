// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{EntityId, HostKey, InstanceKey, NodeId, ProcessKey, TransportKey};

/// Table payload: the sibling position recorded at insert time plus the
/// node handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    position: usize,
    node: NodeId,
}

impl Slot {
    pub fn new(position: usize, node: NodeId) -> Self {
        Self { position, node }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// Selects the table a key type lives in. One key type maps to exactly one
/// table, which keeps a node indexed under at most one key kind.
pub trait IndexKey: Ord + Clone + Sized {
    fn table(tables: &IndexTables) -> &BTreeMap<Self, Slot>;
    fn table_mut(tables: &mut IndexTables) -> &mut BTreeMap<Self, Slot>;
}

/// The five key→node maps over the hierarchy.
///
/// Forward maps only; `reverse_lookup` recovers a node's key with a full
/// scan. That is linear on purpose: it runs on maintenance and removal
/// paths, never on the hot insertion path.
#[derive(Debug, Clone, Default)]
pub struct IndexTables {
    by_entity: BTreeMap<EntityId, Slot>,
    by_host: BTreeMap<HostKey, Slot>,
    by_process: BTreeMap<ProcessKey, Slot>,
    by_instance: BTreeMap<InstanceKey, Slot>,
    by_transport: BTreeMap<TransportKey, Slot>,
}

impl IndexTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find<K: IndexKey>(&self, key: &K) -> Option<Slot> {
        K::table(self).get(key).copied()
    }

    pub fn insert<K: IndexKey>(&mut self, key: K, slot: Slot) {
        K::table_mut(self).insert(key, slot);
    }

    pub fn erase<K: IndexKey>(&mut self, key: &K) -> Option<Slot> {
        K::table_mut(self).remove(key)
    }

    /// Scan one table for the key currently mapping to `node`.
    pub fn reverse_lookup<K: IndexKey>(&self, node: NodeId) -> Option<K> {
        K::table(self)
            .iter()
            .find(|(_, slot)| slot.node == node)
            .map(|(key, _)| key.clone())
    }

    /// Erase `node` from whichever tables contain it. Run before the node
    /// is freed; entries are keyed by value, not by back-pointer.
    pub fn erase_node(&mut self, node: NodeId) {
        if let Some(key) = self.reverse_lookup::<EntityId>(node) {
            self.by_entity.remove(&key);
        }
        if let Some(key) = self.reverse_lookup::<HostKey>(node) {
            self.by_host.remove(&key);
        }
        if let Some(key) = self.reverse_lookup::<ProcessKey>(node) {
            self.by_process.remove(&key);
        }
        if let Some(key) = self.reverse_lookup::<InstanceKey>(node) {
            self.by_instance.remove(&key);
        }
        if let Some(key) = self.reverse_lookup::<TransportKey>(node) {
            self.by_transport.remove(&key);
        }
    }

    pub fn by_entity(&self) -> &BTreeMap<EntityId, Slot> {
        &self.by_entity
    }

    pub fn by_host(&self) -> &BTreeMap<HostKey, Slot> {
        &self.by_host
    }

    pub fn by_process(&self) -> &BTreeMap<ProcessKey, Slot> {
        &self.by_process
    }

    pub fn by_instance(&self) -> &BTreeMap<InstanceKey, Slot> {
        &self.by_instance
    }

    pub fn by_transport(&self) -> &BTreeMap<TransportKey, Slot> {
        &self.by_transport
    }

    pub fn clear(&mut self) {
        self.by_entity.clear();
        self.by_host.clear();
        self.by_process.clear();
        self.by_instance.clear();
        self.by_transport.clear();
    }
}

impl IndexKey for EntityId {
    fn table(tables: &IndexTables) -> &BTreeMap<Self, Slot> {
        &tables.by_entity
    }

    fn table_mut(tables: &mut IndexTables) -> &mut BTreeMap<Self, Slot> {
        &mut tables.by_entity
    }
}

impl IndexKey for HostKey {
    fn table(tables: &IndexTables) -> &BTreeMap<Self, Slot> {
        &tables.by_host
    }

    fn table_mut(tables: &mut IndexTables) -> &mut BTreeMap<Self, Slot> {
        &mut tables.by_host
    }
}

impl IndexKey for ProcessKey {
    fn table(tables: &IndexTables) -> &BTreeMap<Self, Slot> {
        &tables.by_process
    }

    fn table_mut(tables: &mut IndexTables) -> &mut BTreeMap<Self, Slot> {
        &mut tables.by_process
    }
}

impl IndexKey for InstanceKey {
    fn table(tables: &IndexTables) -> &BTreeMap<Self, Slot> {
        &tables.by_instance
    }

    fn table_mut(tables: &mut IndexTables) -> &mut BTreeMap<Self, Slot> {
        &mut tables.by_instance
    }
}

impl IndexKey for TransportKey {
    fn table(tables: &IndexTables) -> &BTreeMap<Self, Slot> {
        &tables.by_transport
    }

    fn table_mut(tables: &mut IndexTables) -> &mut BTreeMap<Self, Slot> {
        &mut tables.by_transport
    }
}

#[cfg(test)]
mod tests {
    use super::{IndexTables, Slot};
    use crate::model::{HostKey, NodeArena, ProcessKey};

    #[test]
    fn find_insert_erase_round_trip() {
        let mut arena = NodeArena::new();
        let node = arena.alloc("Process", "7");
        let mut tables = IndexTables::new();
        let key = ProcessKey::new("h1", 7);

        assert_eq!(tables.find(&key), None);
        tables.insert(key.clone(), Slot::new(0, node));
        assert_eq!(tables.find(&key).map(|slot| slot.node()), Some(node));
        assert!(tables.erase(&key).is_some());
        assert_eq!(tables.find(&key), None);
    }

    #[test]
    fn reverse_lookup_recovers_the_key() {
        let mut arena = NodeArena::new();
        let node = arena.alloc("Host", "h1");
        let other = arena.alloc("Host", "h2");
        let mut tables = IndexTables::new();
        tables.insert(HostKey::from("h1"), Slot::new(0, node));
        tables.insert(HostKey::from("h2"), Slot::new(1, other));

        assert_eq!(tables.reverse_lookup::<HostKey>(node), Some(HostKey::from("h1")));
        assert_eq!(tables.reverse_lookup::<ProcessKey>(node), None);
    }

    #[test]
    fn erase_node_sweeps_every_table() {
        let mut arena = NodeArena::new();
        let node = arena.alloc("Process", "7");
        let mut tables = IndexTables::new();
        tables.insert(ProcessKey::new("h1", 7), Slot::new(0, node));

        tables.erase_node(node);

        assert!(tables.by_process().is_empty());
    }
}
