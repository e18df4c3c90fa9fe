// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::NodeId;
use crate::store::MonitorStore;

use super::ViewUpdate;

/// Erase `node` and every descendant from whichever index tables contain
/// them, post-order. Must run before the nodes are freed: table entries are
/// keyed by value and can only be recovered through reverse lookup while
/// the nodes still exist.
pub fn purge_indices_under(store: &mut MonitorStore, node: NodeId) {
    let children: SmallVec<[NodeId; 8]> = store
        .arena()
        .get(node)
        .map(|n| n.children().iter().copied().collect())
        .unwrap_or_default();
    for child in children {
        purge_indices_under(store, child);
    }
    store.tables_mut().erase_node(node);
}

/// Remove a process subtree.
///
/// Purges the indices under the process, detaches it from its host, and
/// collapses the host when this was its last process. The collapse stops
/// there: exactly one ancestor level, never more. Reverse references held
/// by nodes outside the subtree are left dangling; their display falls
/// back to the holder's own last value.
pub fn remove_process(store: &mut MonitorStore, node: NodeId) -> ViewUpdate {
    purge_indices_under(store, node);

    let host = store.arena().get(node).and_then(|n| n.parent());
    if let Some(host) = host {
        store.arena_mut().detach_child(host, node);

        // A host with no remaining processes folds up with its last one.
        if store.arena().get(host).is_some_and(|h| h.children().is_empty()) {
            store.tables_mut().erase_node(host);
            let root = store.arena().get(host).and_then(|h| h.parent());
            if let Some(root) = root {
                store.arena_mut().detach_child(root, host);
            }
            store.arena_mut().free_subtree(host);
        }
    }

    store.arena_mut().free_subtree(node);
    ViewUpdate::Structure
}
