// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::{format_smolstr, SmolStr};

use crate::model::{NodeId, Nvp, ReportValue};
use crate::store::MonitorStore;

use super::{ViewUpdate, UNSUPPORTED_VALUE, VALUE_COLUMN};

/// Apply a batch of name/value updates to `parent`'s children.
///
/// A name with no matching child is inserted (a structural change); a
/// matching child has its value overwritten in place (a content change).
/// Exactly one refresh hint is returned per batch: structural when any
/// insertion occurred — `layout_changed` seeds that from the resolution
/// that produced `parent` — otherwise a cell update naming the last
/// touched child.
pub fn merge_attributes(
    store: &mut MonitorStore,
    parent: NodeId,
    updates: &[Nvp],
    mut layout_changed: bool,
) -> ViewUpdate {
    let mut data_changed = false;
    let mut last_touched = None;

    for nvp in updates {
        match store.arena().find_child_by_label(parent, nvp.name()) {
            None => {
                let node = store.arena_mut().alloc(SmolStr::new(nvp.name()), render(nvp.value()));
                store.arena_mut().append(parent, node);
                layout_changed = true;
            }
            Some(row) => {
                let Some(node) = store.arena().child_at(parent, row) else {
                    continue;
                };
                if let Some(rendered) = rerender(nvp.value()) {
                    if let Some(child) = store.arena_mut().get_mut(node) {
                        child.set_value(rendered);
                    }
                }
                data_changed = true;
                last_touched = Some(node);
            }
        }
    }

    if layout_changed {
        ViewUpdate::Structure
    } else if data_changed {
        match last_touched {
            Some(node) => ViewUpdate::Cell { node, column: VALUE_COLUMN },
            None => ViewUpdate::None,
        }
    } else {
        ViewUpdate::None
    }
}

/// Rendered form of a value for a freshly inserted child.
fn render(value: &ReportValue) -> SmolStr {
    match value {
        ReportValue::Integer(v) => {
            let mut buffer = itoa::Buffer::new();
            SmolStr::new(buffer.format(*v))
        }
        ReportValue::Double(v) => format_smolstr!("{v}"),
        ReportValue::Text(v) => SmolStr::new(v),
        ReportValue::Statistics(_) | ReportValue::TextList(_) => SmolStr::new(UNSUPPORTED_VALUE),
    }
}

/// Rendered form of a value for an in-place overwrite; `None` for the
/// unsupported kinds, whose placeholder is left as inserted.
fn rerender(value: &ReportValue) -> Option<SmolStr> {
    match value {
        ReportValue::Statistics(_) | ReportValue::TextList(_) => None,
        supported => Some(render(supported)),
    }
}
