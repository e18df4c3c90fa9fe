// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad — incremental entity-hierarchy index for distributed-system
//! monitors.
//!
//! Status reports about hosts, processes, transports, protocol
//! participants and endpoints arrive asynchronously and possibly out of
//! order. The store locates or creates the addressed nodes, defers parent
//! resolution until the missing ancestor is reported, keeps five secondary
//! indices in sync with the tree, and tells the presentation layer how much
//! of its view to refresh.

pub mod model;
pub mod ops;
pub mod store;
