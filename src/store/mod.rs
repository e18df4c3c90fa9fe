// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Owning context for one monitored-system view.
//!
//! All mutation originates from a single sequential report stream; nothing
//! here suspends, blocks, or tolerates concurrent callers. Ingestion from
//! multiple sources must be serialized before it reaches the store.

pub mod tables;

pub use tables::{IndexKey, IndexTables, Slot};

use crate::model::{IdCounters, NodeArena, NodeId};

const ROOT_LABEL: &str = "Root";

/// One monitored-system view: the node arena, the index tables, the id
/// counters, and the synthetic root everything hangs off.
///
/// The tree exclusively owns its nodes. Tables and reverse references hold
/// bare [`NodeId`]s and are never the last holder of a node's lifetime.
#[derive(Debug)]
pub struct MonitorStore {
    arena: NodeArena,
    tables: IndexTables,
    counters: IdCounters,
    root: NodeId,
    rev: u64,
}

impl MonitorStore {
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(ROOT_LABEL, "");
        Self {
            arena,
            tables: IndexTables::new(),
            counters: IdCounters::new(),
            root,
            rev: 0,
        }
    }

    /// The synthetic root; host nodes are its direct children.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    pub fn tables(&self) -> &IndexTables {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut IndexTables {
        &mut self.tables
    }

    pub fn counters(&self) -> &IdCounters {
        &self.counters
    }

    pub fn counters_mut(&mut self) -> &mut IdCounters {
        &mut self.counters
    }

    /// Monotonic revision, bumped once per report that changed anything.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub(crate) fn bump_rev(&mut self) {
        self.rev += 1;
    }

    /// Discard every node and index entry and recreate the id counters.
    /// The revision keeps counting so stale readers notice the reset.
    pub fn reset(&mut self) {
        self.arena.clear();
        self.tables.clear();
        self.counters = IdCounters::new();
        self.root = self.arena.alloc(ROOT_LABEL, "");
        self.rev += 1;
    }
}

impl Default for MonitorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::MonitorStore;
    use crate::model::EntityCategory;

    #[test]
    fn new_store_has_an_empty_root() {
        let store = MonitorStore::new();
        let root = store.arena().get(store.root()).expect("root node");
        assert_eq!(root.label(), "Root");
        assert!(root.children().is_empty());
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn reset_discards_nodes_and_recreates_counters() {
        let mut store = MonitorStore::new();
        let first = store.counters_mut().next(EntityCategory::Publisher);
        let node = store.arena_mut().alloc("Host", "h1");
        let root = store.root();
        store.arena_mut().append(root, node);

        store.reset();

        assert!(!store.arena().contains(node));
        assert_eq!(store.arena().len(), 1);
        assert!(store.tables().by_host().is_empty());
        assert_eq!(store.counters_mut().next(EntityCategory::Publisher), first);
        assert!(store.rev() > 0);
    }
}
