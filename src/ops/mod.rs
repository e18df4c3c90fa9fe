// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations applied to a [`MonitorStore`] as status reports
//! arrive.
//!
//! Reports may arrive out of order; resolution leaves orphans that later
//! lookups heal. Absence is a normal return value throughout — no
//! operation errors on "not found". Each applied report yields the minimal
//! refresh hint the presentation layer needs.

mod link;
mod merge;
mod remove;
mod resolve;


pub use link::{link_topic, link_transport};
pub use merge::merge_attributes;
pub use remove::{purge_indices_under, remove_process};
pub use resolve::{
    endpoint_node, host_node, instance_node, keyed_node, participant_node, process_node,
    transport_node,
};

use crate::model::{EntityId, InstanceKey, NodeId, Nvp, Report};
use crate::store::MonitorStore;

pub const HOST_LABEL: &str = "Host";
pub const PROCESS_LABEL: &str = "Process";
pub const TRANSPORT_LABEL: &str = "Transport";
pub const PARTICIPANT_LABEL: &str = "DomainParticipant";
pub const TOPIC_LABEL: &str = "Topic";
pub const TOPIC_NAME_LABEL: &str = "Topic Name";
pub const TRANSPORT_ID_LABEL: &str = "Transport Id";
pub const INSTANCE_LABEL: &str = "Instance";
pub const WRITER_LABEL: &str = "Writer";
pub const READER_LABEL: &str = "Reader";

/// Placeholder a reference holder shows until its value source resolves.
pub const PENDING_VALUE: &str = "<error>";
/// Placeholder for payload kinds the merger does not render.
pub const UNSUPPORTED_VALUE: &str = "<display unimplemented>";

/// Column carrying display values; column 0 carries labels.
pub const VALUE_COLUMN: usize = 1;

/// Refresh hint handed to the presentation layer after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Nothing visible changed.
    None,
    /// Topology changed; a full redraw is warranted.
    Structure,
    /// One cell changed in place.
    Cell { node: NodeId, column: usize },
}

impl ViewUpdate {
    pub fn is_structural(self) -> bool {
        self == Self::Structure
    }
}

/// Apply one report to the store: locate or create the addressed node,
/// apply the payload, and return the refresh hint. Bumps the store
/// revision when anything changed.
pub fn apply_report(store: &mut MonitorStore, report: &Report) -> ViewUpdate {
    let update = match report {
        Report::Process { key, attributes } => {
            let mut create = true;
            match process_node(store, key, &mut create) {
                Some(node) => merge_attributes(store, node, attributes, create),
                None => ViewUpdate::None,
            }
        }
        Report::ProcessExit { key } => {
            let mut create = false;
            match process_node(store, key, &mut create) {
                Some(node) => remove_process(store, node),
                None => ViewUpdate::None,
            }
        }
        Report::Transport { key, attributes } => {
            let mut create = true;
            match transport_node(store, key, &mut create) {
                Some(node) => merge_attributes(store, node, attributes, create),
                None => ViewUpdate::None,
            }
        }
        Report::Participant { process, id, attributes } => {
            let mut create = true;
            match participant_node(store, process, id, &mut create) {
                Some(node) => merge_attributes(store, node, attributes, create),
                None => ViewUpdate::None,
            }
        }
        Report::Topic { participant, id, attributes } => {
            let mut create = true;
            match keyed_node(store, TOPIC_LABEL, participant, id, &mut create) {
                Some(node) => merge_attributes(store, node, attributes, create),
                None => ViewUpdate::None,
            }
        }
        Report::Instance { key, attributes } => {
            let mut create = true;
            match instance_node(store, INSTANCE_LABEL, key, &mut create) {
                Some(node) => merge_attributes(store, node, attributes, create),
                None => ViewUpdate::None,
            }
        }
        Report::Writer { instance, id, transport, topic, attributes } => {
            apply_endpoint(store, WRITER_LABEL, instance, id, *transport, topic.as_ref(), attributes)
        }
        Report::Reader { instance, id, transport, topic, attributes } => {
            apply_endpoint(store, READER_LABEL, instance, id, *transport, topic.as_ref(), attributes)
        }
    };

    if update != ViewUpdate::None {
        store.bump_rev();
    }
    update
}

fn apply_endpoint(
    store: &mut MonitorStore,
    label: &str,
    instance: &InstanceKey,
    id: &EntityId,
    transport: Option<u32>,
    topic: Option<&EntityId>,
    attributes: &[Nvp],
) -> ViewUpdate {
    let mut create = true;
    let Some(node) = endpoint_node(store, label, instance, id, &mut create) else {
        return ViewUpdate::None;
    };
    if let Some(transport_id) = transport {
        link_transport(store, node, transport_id, &mut create);
    }
    if let Some(topic_id) = topic {
        link_topic(store, node, instance.owner(), topic_id, &mut create);
    }
    merge_attributes(store, node, attributes, create)
}
