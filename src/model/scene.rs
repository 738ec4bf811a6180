// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::{EntityId, IdAllocator};

/// The insertion-ordered entity set of one diagram, together with the
/// session's id allocator.
///
/// The scene is the single source of truth for entity lookup; entities refer
/// to each other only by id. Edits are copy-on-replace at the granularity of
/// one entity: a drag produces a new `RoutedLine` that
/// [`replace`](Self::replace) substitutes for the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Scene {
    entities: Vec<Entity>,
    ids: IdAllocator,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassembles a scene from persisted entities and a resumed allocator.
    pub fn from_parts(entities: Vec<Entity>, ids: IdAllocator) -> Self {
        Self { entities, ids }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn next_id(&mut self) -> EntityId {
        self.ids.next_id()
    }

    pub fn allocator_mut(&mut self) -> &mut IdAllocator {
        &mut self.ids
    }

    pub fn insert(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Substitutes the entity with the same id, keeping its insertion
    /// position (and thus its paint order). Returns false when no entity
    /// carries that id.
    pub fn replace(&mut self, entity: Entity) -> bool {
        let id = entity.id();
        match self.entities.iter_mut().find(|slot| slot.id() == id) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|entity| entity.id() == id)?;
        Some(self.entities.remove(index))
    }
}
