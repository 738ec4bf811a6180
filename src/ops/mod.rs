// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editor commands applied against the mutable editor state.

use std::fmt;

use crate::geometry::{Coord, Vector};
use crate::model::{Entity, EntityId, Scene};

/// Everything a frame of the editor needs: the scene plus the transient
/// cursor and view toggles.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub scene: Scene,
    pub cursor: Coord,
    pub show_ids: bool,
}

impl EditorState {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            cursor: Coord::new(0, 0),
            show_ids: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor { delta: Vector },
    ToggleIds,
    DragLineEdge { target: EntityId, from: Coord, delta: Vector },
}

pub fn apply(state: &mut EditorState, command: Command) -> Result<(), OpError> {
    match command {
        Command::MoveCursor { delta } => {
            state.cursor = state.cursor.moved(delta);
            Ok(())
        }
        Command::ToggleIds => {
            state.show_ids = !state.show_ids;
            Ok(())
        }
        Command::DragLineEdge { target, from, delta } => drag_line_edge(state, target, from, delta),
    }
}

fn drag_line_edge(
    state: &mut EditorState,
    target: EntityId,
    from: Coord,
    delta: Vector,
) -> Result<(), OpError> {
    let line = match state.scene.get(target) {
        Some(Entity::Routed(line)) => line.clone(),
        Some(_) => return Err(OpError::NotDraggable { id: target }),
        None => return Err(OpError::MissingEntity { id: target }),
    };

    let dragged = line.drag(from, from.moved(delta), state.scene.allocator_mut());
    state.scene.replace(Entity::Routed(dragged));
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    MissingEntity { id: EntityId },
    NotDraggable { id: EntityId },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEntity { id } => write!(f, "entity {id} is not in the scene"),
            Self::NotDraggable { id } => write!(f, "entity {id} is not a draggable line"),
        }
    }
}

impl std::error::Error for OpError {}
