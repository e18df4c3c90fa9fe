// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed-size opaque entity identifier.
///
/// Reports address participants, topics and endpoints by a 128-bit globally
/// unique id. The byte order is significant: the derived `Ord` is
/// byte-lexicographic, which keeps iteration over id-keyed tables
/// deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct EntityId([u8; 16]);

impl EntityId {
    pub const NIL: EntityId = EntityId([0; 16]);

    pub fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chunk) in self.0.chunks_exact(4).enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            for byte in chunk {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }
}

/// Id-generation categories mirroring the kinds of entities a monitored
/// process reports without a globally unique id of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Publisher,
    Subscriber,
    Transport,
}

impl EntityCategory {
    fn tag(self) -> u8 {
        match self {
            Self::Publisher => 0x01,
            Self::Subscriber => 0x02,
            Self::Transport => 0x03,
        }
    }
}

/// Monotonic id counters scoped per entity category.
///
/// A peripheral utility, not part of the index contract: the store recreates
/// the counters on a full reset so synthesized ids restart from zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdCounters {
    publisher: u32,
    subscriber: u32,
    transport: u32,
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id in `category`. The category tag lands in the
    /// leading byte so synthesized ids never collide across categories.
    pub fn next(&mut self, category: EntityCategory) -> EntityId {
        let counter = match category {
            EntityCategory::Publisher => {
                self.publisher += 1;
                self.publisher
            }
            EntityCategory::Subscriber => {
                self.subscriber += 1;
                self.subscriber
            }
            EntityCategory::Transport => {
                self.transport += 1;
                self.transport
            }
        };

        let mut bytes = [0u8; 16];
        bytes[0] = category.tag();
        bytes[12..].copy_from_slice(&counter.to_be_bytes());
        EntityId::new(bytes)
    }
}
