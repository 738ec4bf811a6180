// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stable identifier for entities and line segments.
///
/// Ids are the only cross-reference mechanism between entities (a connector
/// stores the ids of its two endpoints, never a direct reference), so they
/// must come from a single allocation authority per editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id allocator, owned by the scene.
///
/// Ids are never reset and never reused for the lifetime of a session; a
/// persisted scene resumes allocation past its highest stored id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Resumes allocation so every new id is greater than `highest`.
    pub fn resuming_after(highest: EntityId) -> Self {
        Self {
            next: highest.0 + 1,
        }
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// The highest id handed out so far, if any.
    pub fn highest(&self) -> Option<EntityId> {
        (self.next > 1).then(|| EntityId(self.next - 1))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::IdAllocator;

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut ids = IdAllocator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_eq!(ids.highest(), Some(c));
    }

    #[test]
    fn fresh_allocator_has_no_highest_id() {
        assert_eq!(IdAllocator::new().highest(), None);
    }

    #[test]
    fn resuming_after_skips_persisted_ids() {
        let mut ids = IdAllocator::new();
        let mut last = ids.next_id();
        for _ in 0..4 {
            last = ids.next_id();
        }

        let mut resumed = IdAllocator::resuming_after(last);
        assert!(resumed.next_id() > last);
    }

    #[test]
    fn entity_id_displays_its_numeric_value() {
        let mut ids = IdAllocator::new();
        let id = ids.next_id();
        assert_eq!(id.to_string(), "1");
        assert_eq!(id.value(), 1);
    }
}
