// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use smol_str::SmolStr;

new_key_type! {
    /// Stable arena handle for a hierarchy node.
    ///
    /// Parent links and reverse references are stored as keys, never as
    /// pointers: a key whose node has been freed simply stops resolving.
    pub struct NodeId;
}

/// One element of the entity tree: a label/value pair, an ordered child
/// list, a non-owning parent link, and the reverse-reference bookkeeping for
/// nodes that borrow this node's value for display.
///
/// A node with no parent is either the synthetic root or an orphan awaiting
/// the report that establishes its ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    label: SmolStr,
    value: SmolStr,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 8]>,
    position: usize,
    value_source: Option<NodeId>,
    value_refs: BTreeSet<NodeId>,
}

impl HierarchyNode {
    fn new(label: SmolStr, value: SmolStr) -> Self {
        Self {
            label,
            value,
            parent: None,
            children: SmallVec::new(),
            position: 0,
            value_source: None,
            value_refs: BTreeSet::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<SmolStr>) {
        self.value = value.into();
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Sibling ordinal recorded when the node was appended. Removing an
    /// earlier sibling leaves this stale; accepted, not corrected.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn value_source(&self) -> Option<NodeId> {
        self.value_source
    }

    pub fn value_refs(&self) -> &BTreeSet<NodeId> {
        &self.value_refs
    }
}

/// Arena owning every node of one monitored-system view.
///
/// The tree is the only owner: freeing a subtree removes its nodes from the
/// arena, while index tables and reverse references keep bare keys.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: SlotMap<NodeId, HierarchyNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, label: impl Into<SmolStr>, value: impl Into<SmolStr>) -> NodeId {
        self.nodes.insert(HierarchyNode::new(label.into(), value.into()))
    }

    pub fn get(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut HierarchyNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sibling ordinal of `id`, `0` for unknown nodes.
    pub fn position(&self, id: NodeId) -> usize {
        self.nodes.get(id).map_or(0, HierarchyNode::position)
    }

    /// Attach `child` under `parent`, recording the child's sibling ordinal
    /// at insertion time.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let Some(position) = self.nodes.get(parent).map(|p| p.children.len()) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
            node.position = position;
        } else {
            return;
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Index of the first child of `parent` whose label matches.
    pub fn find_child_by_label(&self, parent: NodeId, label: &str) -> Option<usize> {
        let parent = self.nodes.get(parent)?;
        parent
            .children
            .iter()
            .position(|&child| self.nodes.get(child).is_some_and(|node| node.label == label))
    }

    pub fn child_at(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        self.nodes.get(parent)?.children.get(index).copied()
    }

    /// Remove `child` from `parent`'s child list without freeing it.
    /// Remaining siblings keep their recorded positions.
    pub fn detach_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
    }

    /// Register `holder` as a reverse reference on `source`; the holder
    /// displays the source's value from now on.
    pub fn bind_value_source(&mut self, holder: NodeId, source: NodeId) {
        if let Some(node) = self.nodes.get_mut(holder) {
            node.value_source = Some(source);
        } else {
            return;
        }
        if let Some(node) = self.nodes.get_mut(source) {
            node.value_refs.insert(holder);
        }
    }

    /// Drop `holder`'s registration on its current value source, if any.
    /// The holder node itself stays in the tree.
    pub fn unbind_value_source(&mut self, holder: NodeId) {
        let Some(source) = self.nodes.get_mut(holder).and_then(|n| n.value_source.take()) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(source) {
            node.value_refs.remove(&holder);
        }
    }

    /// The value to display for `id`: the value source's value while that
    /// source is alive, the node's own last value otherwise.
    pub fn display_value(&self, id: NodeId) -> Option<&str> {
        let node = self.nodes.get(id)?;
        if let Some(source) = node.value_source.and_then(|source| self.nodes.get(source)) {
            return Some(source.value());
        }
        Some(node.value())
    }

    /// Free `id` and every descendant. Reverse references held elsewhere are
    /// left in place; their keys stop resolving.
    pub fn free_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(id) else {
            return;
        };
        for child in node.children {
            self.free_subtree(child);
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
