// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: arena-backed hierarchy nodes, index keys, and the
//! report records delivered by the monitored system.

pub mod ids;
pub mod keys;
pub mod node;
pub mod report;

pub use ids::{EntityCategory, EntityId, IdCounters};
pub use keys::{HostKey, InstanceKey, ProcessKey, TransportKey};
pub use node::{HierarchyNode, NodeArena, NodeId};
pub use report::{Nvp, Report, ReportValue};
