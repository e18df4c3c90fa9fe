// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use naiad::model::{EntityId, InstanceKey, NodeId, Nvp, ProcessKey, Report, ReportValue};
use naiad::ops::apply_report;
use naiad::store::MonitorStore;

/// One report per entity of a small but complete monitored system.
fn report_set() -> Vec<Report> {
    let process = ProcessKey::new("h1", 7);
    let participant = EntityId::from_u128(0x10);
    let topic = EntityId::from_u128(0x30);
    let instance = InstanceKey::new(participant, 3);

    vec![
        Report::Process {
            key: process.clone(),
            attributes: vec![Nvp::new("uptime", ReportValue::Integer(42))],
        },
        Report::Participant { process, id: participant, attributes: Vec::new() },
        Report::Topic {
            participant,
            id: topic,
            attributes: vec![Nvp::new("Topic Name", ReportValue::Text("Chatter".to_owned()))],
        },
        Report::Instance { key: instance, attributes: Vec::new() },
        Report::Writer {
            instance,
            id: EntityId::from_u128(0x20),
            transport: Some(0xAB),
            topic: Some(topic),
            attributes: vec![Nvp::new("messages", ReportValue::Integer(9))],
        },
        Report::Reader {
            instance,
            id: EntityId::from_u128(0x21),
            transport: Some(0xAB),
            topic: Some(topic),
            attributes: Vec::new(),
        },
    ]
}

/// Order-insensitive rendering of the tree: children sort by their rendered
/// subtree, so converged permutations compare equal.
fn shape(store: &MonitorStore) -> String {
    fn render(store: &MonitorStore, node: NodeId, depth: usize, out: &mut String) {
        let Some(data) = store.arena().get(node) else {
            return;
        };
        let value = store.arena().display_value(node).unwrap_or("");
        out.push_str(&"  ".repeat(depth));
        out.push_str(data.label());
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');

        let mut subtrees: Vec<String> = data
            .children()
            .iter()
            .map(|&child| {
                let mut rendered = String::new();
                render(store, child, depth + 1, &mut rendered);
                rendered
            })
            .collect();
        subtrees.sort();
        for subtree in subtrees {
            out.push_str(&subtree);
        }
    }

    let mut out = String::new();
    render(store, store.root(), 0, &mut out);
    out
}

/// Replay the stream as a monitor does: every entity reports periodically,
/// so each node is looked up again after its ancestors exist. One pass
/// creates every node, the next heals the parent links, and one more lets
/// the cross-links find a fully attached ancestor chain.
fn ingest(order: &[usize]) -> MonitorStore {
    let reports = report_set();
    let mut store = MonitorStore::new();
    for _ in 0..3 {
        for &index in order {
            apply_report(&mut store, &reports[index]);
        }
    }
    store
}

#[rstest]
#[case::reversed(&[5, 4, 3, 2, 1, 0])]
#[case::leaves_first(&[4, 5, 3, 2, 1, 0])]
#[case::rotated(&[3, 4, 5, 0, 1, 2])]
#[case::interleaved(&[5, 0, 4, 1, 3, 2])]
fn replayed_streams_converge_to_the_same_shape(#[case] order: &[usize]) {
    let baseline = ingest(&[0, 1, 2, 3, 4, 5]);
    let permuted = ingest(order);

    assert_eq!(shape(&permuted), shape(&baseline));

    assert_eq!(permuted.tables().by_host().len(), baseline.tables().by_host().len());
    assert_eq!(permuted.tables().by_process().len(), baseline.tables().by_process().len());
    assert_eq!(permuted.tables().by_entity().len(), baseline.tables().by_entity().len());
    assert_eq!(permuted.tables().by_instance().len(), baseline.tables().by_instance().len());
    assert_eq!(permuted.tables().by_transport().len(), baseline.tables().by_transport().len());
}

#[rstest]
#[case::reversed(&[5, 4, 3, 2, 1, 0])]
#[case::interleaved(&[5, 0, 4, 1, 3, 2])]
fn replayed_streams_leave_no_orphans(#[case] order: &[usize]) {
    let store = ingest(order);

    let mut pending = vec![store.root()];
    let mut reachable = 0usize;
    while let Some(node) = pending.pop() {
        reachable += 1;
        if let Some(data) = store.arena().get(node) {
            pending.extend(data.children().iter().copied());
        }
    }
    // Every allocated node hangs off the root once the stream repeats.
    assert_eq!(reachable, store.arena().len());
}

#[test]
fn reset_rebuilds_from_scratch() {
    let mut store = ingest(&[0, 1, 2, 3, 4, 5]);
    assert!(store.arena().len() > 1);

    store.reset();

    assert_eq!(store.arena().len(), 1);
    assert!(store.tables().by_process().is_empty());

    let reports = report_set();
    for report in &reports {
        apply_report(&mut store, report);
    }
    assert_eq!(store.tables().by_process().len(), 1);
}
