// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, error};

use crate::model::{EntityId, NodeId, ProcessKey, TransportKey};
use crate::store::MonitorStore;

use super::resolve::{keyed_node, transport_node};
use super::{PENDING_VALUE, TOPIC_LABEL, TOPIC_NAME_LABEL, TRANSPORT_ID_LABEL};

/// Link the displayed "Transport Id" field of `node` to the canonical
/// transport node for `transport_id` under the same process.
///
/// The id is immutable once displayed: an existing child keeps its link.
/// Sets `create` when a new reference child was appended.
pub fn link_transport(
    store: &mut MonitorStore,
    node: NodeId,
    transport_id: u32,
    create: &mut bool,
) {
    // Climb to the ancestor that lives in the process table.
    let mut cursor = store.arena().get(node).and_then(|n| n.parent());
    let process_key = loop {
        let Some(current) = cursor else {
            break None;
        };
        if let Some(key) = store.tables().reverse_lookup::<ProcessKey>(current) {
            break Some(key);
        }
        cursor = store.arena().get(current).and_then(|n| n.parent());
    };

    let Some(process_key) = process_key else {
        // A link request from a node with no ancestor process means the
        // model is corrupt; report it and leave the tree untouched.
        error!(node = ?node, transport_id, "transport link: no ancestor process node");
        return;
    };

    let transport_key =
        TransportKey::new(process_key.host().clone(), process_key.pid(), transport_id);
    let mut resolved = true;
    let Some(transport) = transport_node(store, &transport_key, &mut resolved) else {
        return;
    };

    if store.arena().find_child_by_label(node, TRANSPORT_ID_LABEL).is_none() {
        let holder = store.arena_mut().alloc(TRANSPORT_ID_LABEL, PENDING_VALUE);
        store.arena_mut().append(node, holder);
        store.arena_mut().bind_value_source(holder, transport);
        *create = true;
    }
}

/// Link the displayed "Topic" field of `node` to the canonical topic node
/// for `topic_id`, preferring the topic's "Topic Name" child when one
/// exists so the display shows a human name instead of a raw identifier.
///
/// Allowed transitions rebind the existing reference child in place; the
/// contradictory ones (a different topic while a topic is referenced, a
/// different name or a topic while a name is referenced) come from
/// inconsistent reports and are ignored.
pub fn link_topic(
    store: &mut MonitorStore,
    node: NodeId,
    participant: &EntityId,
    topic_id: &EntityId,
    create: &mut bool,
) {
    let Some(topic) = keyed_node(store, TOPIC_LABEL, participant, topic_id, create) else {
        return;
    };

    // Prefer the topic's human-readable name over the raw identifier.
    let name_node = store
        .arena()
        .find_child_by_label(topic, TOPIC_NAME_LABEL)
        .and_then(|row| store.arena().child_at(topic, row));
    let target = name_node.unwrap_or(topic);

    let holder = store
        .arena()
        .find_child_by_label(node, TOPIC_LABEL)
        .and_then(|row| store.arena().child_at(node, row));

    let Some(holder) = holder else {
        // First sighting: append a reference child for the topic or its
        // name.
        let holder = store.arena_mut().alloc(TOPIC_LABEL, PENDING_VALUE);
        store.arena_mut().append(node, holder);
        store.arena_mut().bind_value_source(holder, target);
        *create = true;
        return;
    };

    let current = store.arena().get(holder).and_then(|n| n.value_source());
    if current == Some(target) {
        return;
    }

    let current_is_name = current
        .and_then(|id| store.arena().get(id))
        .is_some_and(|n| n.label() == TOPIC_NAME_LABEL);
    let target_is_name = name_node.is_some();

    match (current, current_is_name, target_is_name) {
        (None, _, _) => {
            // The previous source is gone (or was never set); adopt the
            // freshly resolved target.
            store.arena_mut().bind_value_source(holder, target);
        }
        (Some(_), false, true) => {
            // A raw topic reference upgrades to the topic's name.
            store.arena_mut().unbind_value_source(holder);
            store.arena_mut().bind_value_source(holder, target);
        }
        _ => {
            // Contradictory report data; keep the existing link.
            debug!(node = ?node, topic = %topic_id, "topic link: inconsistent rebind ignored");
        }
    }
}
