// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::{format_smolstr, SmolStr};

use crate::model::{EntityId, HostKey, InstanceKey, NodeId, ProcessKey, TransportKey};
use crate::store::{IndexKey, MonitorStore, Slot};

use super::{HOST_LABEL, PARTICIPANT_LABEL, PROCESS_LABEL, TRANSPORT_LABEL};

/// How a node being created or healed finds its parent.
///
/// The resolver is one algorithm; the entity kinds differ only in key type,
/// owning table, label text, and this rule.
enum ParentRule<'a> {
    /// Host nodes hang off the synthetic root.
    Root,
    /// Process nodes hang off their host; a missing host is created under
    /// the root on the spot.
    Host(&'a HostKey),
    /// Transport and participant nodes probe for their process at creation
    /// time and force the whole chain into existence when healing.
    Process(&'a ProcessKey),
    /// Instance, endpoint and generic keyed nodes never fabricate their
    /// parent; a failed probe leaves them orphaned.
    Entity(EntityProbe<'a>),
}

enum EntityProbe<'a> {
    ById(&'a EntityId),
    ByInstance(&'a InstanceKey),
}

impl EntityProbe<'_> {
    fn run(&self, store: &MonitorStore) -> Option<NodeId> {
        match self {
            Self::ById(id) => probe(store, *id),
            Self::ByInstance(key) => probe(store, *key),
        }
    }
}

impl ParentRule<'_> {
    /// Parent lookup while creating a node. Out-of-order arrival is normal:
    /// a failed probe is answered with an orphan, not an error.
    fn resolve(&self, store: &mut MonitorStore, create: &mut bool) -> Option<NodeId> {
        match self {
            Self::Root => Some(store.root()),
            Self::Host(key) => {
                let mut local = *create;
                host_node(store, key, &mut local)
            }
            Self::Process(key) => probe(store, *key),
            Self::Entity(entity) => entity.run(store),
        }
    }

    /// Parent lookup while healing an orphan on a later report. The owning
    /// process chain is forced into existence; non-owning probes stay
    /// non-creating.
    fn heal(&self, store: &mut MonitorStore, create: &mut bool) -> Option<NodeId> {
        match self {
            Self::Root => Some(store.root()),
            Self::Host(key) => {
                let mut local = true;
                host_node(store, key, &mut local)
            }
            Self::Process(key) => {
                *create = true;
                process_node(store, key, create)
            }
            Self::Entity(entity) => entity.run(store),
        }
    }
}

fn probe<K: IndexKey>(store: &MonitorStore, key: &K) -> Option<NodeId> {
    store.tables().find(key).map(|slot| slot.node())
}

/// The lookup/create template shared by every entity kind.
///
/// `create` is in/out: on entry it allows creation, on return it is cleared
/// when the requested key was found existing. Healing may set it again when
/// it had to force an ancestor chain into existence.
fn resolve_keyed<K: IndexKey>(
    store: &mut MonitorStore,
    key: &K,
    label: &str,
    value: SmolStr,
    parent: ParentRule<'_>,
    create: &mut bool,
) -> Option<NodeId> {
    if let Some(slot) = store.tables().find(key) {
        let node = slot.node();
        *create = false;

        // Reports can arrive before the parent entity was ever seen; fill
        // the link in as soon as a later lookup can supply it.
        if store.arena().get(node).is_some_and(|n| n.parent().is_none()) {
            if let Some(parent_node) = parent.heal(store, create) {
                store.arena_mut().append(parent_node, node);
            }
        }
        return Some(node);
    }

    if !*create {
        return None;
    }

    let parent_node = parent.resolve(store, create);
    let node = store.arena_mut().alloc(label, value);
    if let Some(parent_node) = parent_node {
        store.arena_mut().append(parent_node, node);
    }
    let position = store.arena().position(node);
    store.tables_mut().insert(key.clone(), Slot::new(position, node));
    Some(node)
}

/// Locate or create the host node for `key` under the root.
pub fn host_node(store: &mut MonitorStore, key: &HostKey, create: &mut bool) -> Option<NodeId> {
    resolve_keyed(store, key, HOST_LABEL, SmolStr::new(key.as_str()), ParentRule::Root, create)
}

/// Locate or create the process node for `key`, creating its host as
/// needed.
pub fn process_node(
    store: &mut MonitorStore,
    key: &ProcessKey,
    create: &mut bool,
) -> Option<NodeId> {
    let mut pid = itoa::Buffer::new();
    let value = SmolStr::new(pid.format(key.pid()));
    resolve_keyed(store, key, PROCESS_LABEL, value, ParentRule::Host(key.host()), create)
}

/// Locate or create the transport node for `key`. A missing process leaves
/// the transport orphaned until a later lookup heals it.
pub fn transport_node(
    store: &mut MonitorStore,
    key: &TransportKey,
    create: &mut bool,
) -> Option<NodeId> {
    let process = key.process();
    let value = format_smolstr!("0x{:08x}", key.transport());
    resolve_keyed(store, key, TRANSPORT_LABEL, value, ParentRule::Process(&process), create)
}

/// Locate or create the participant node for `id` under the process for
/// `process`.
pub fn participant_node(
    store: &mut MonitorStore,
    process: &ProcessKey,
    id: &EntityId,
    create: &mut bool,
) -> Option<NodeId> {
    let value = format_smolstr!("{id}");
    resolve_keyed(store, id, PARTICIPANT_LABEL, value, ParentRule::Process(process), create)
}

/// Locate or create an instance node. The owning participant is probed,
/// never fabricated.
pub fn instance_node(
    store: &mut MonitorStore,
    label: &str,
    key: &InstanceKey,
    create: &mut bool,
) -> Option<NodeId> {
    let mut handle = itoa::Buffer::new();
    let value = SmolStr::new(handle.format(key.handle()));
    let parent = ParentRule::Entity(EntityProbe::ById(key.owner()));
    resolve_keyed(store, key, label, value, parent, create)
}

/// Locate or create an endpoint node under the instance for `instance`.
/// The instance is probed, never fabricated.
pub fn endpoint_node(
    store: &mut MonitorStore,
    label: &str,
    instance: &InstanceKey,
    id: &EntityId,
    create: &mut bool,
) -> Option<NodeId> {
    let value = format_smolstr!("{id}");
    let parent = ParentRule::Entity(EntityProbe::ByInstance(instance));
    resolve_keyed(store, id, label, value, parent, create)
}

/// Locate or create a generic keyed node under whatever node currently
/// occupies the `parent_id` slot.
pub fn keyed_node(
    store: &mut MonitorStore,
    label: &str,
    parent_id: &EntityId,
    id: &EntityId,
    create: &mut bool,
) -> Option<NodeId> {
    let value = format_smolstr!("{id}");
    let parent = ParentRule::Entity(EntityProbe::ById(parent_id));
    resolve_keyed(store, id, label, value, parent, create)
}
