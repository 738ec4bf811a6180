// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The diagram model: entity kinds, the insertion-ordered scene, and id
//! allocation.

pub mod entity;
pub mod fixtures;
pub mod ids;
pub mod scene;

pub use entity::{
    Actor, BoxEntity, BoxFramePart, BoxStyle, Connector, Entity, Label, LabelDirection, Note,
    ACTOR_GLYPH,
};
pub use ids::{EntityId, IdAllocator};
pub use scene::Scene;
