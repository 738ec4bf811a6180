// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in scenes for the demo entrypoint, tests and benches.

use crate::geometry::{Coord, Direction, LineSegment, RoutedLine, SegmentKind};

use super::entity::{Actor, BoxEntity, BoxStyle, Connector, Entity, Label, LabelDirection, Note};
use super::scene::Scene;

/// Two boxes joined by a router-drawn connector, with a free lane between
/// them.
pub fn linked_boxes() -> Scene {
    let mut scene = Scene::new();

    let api_id = scene.next_id();
    scene.insert(Entity::Box(BoxEntity {
        id: api_id,
        origin: Coord::new(1, 1),
        width: 9,
        height: 3,
        text: "api".to_owned(),
        style: BoxStyle::Lines,
    }));

    let store_id = scene.next_id();
    scene.insert(Entity::Box(BoxEntity {
        id: store_id,
        origin: Coord::new(20, 1),
        width: 11,
        height: 3,
        text: "store".to_owned(),
        style: BoxStyle::Lines,
    }));

    let connector_id = scene.next_id();
    scene.insert(Entity::Connector(Connector {
        id: connector_id,
        from: api_id,
        to: store_id,
    }));

    scene
}

/// The scene behind `--demo`: every entity kind on one grid, including a
/// routed line with a bend.
pub fn demo_scene() -> Scene {
    let mut scene = linked_boxes();

    let actor_id = scene.next_id();
    scene.insert(Entity::Actor(Actor {
        id: actor_id,
        origin: Coord::new(2, 7),
        name: "ops".to_owned(),
    }));

    let note_id = scene.next_id();
    scene.insert(Entity::Note(Note {
        id: note_id,
        origin: Coord::new(20, 7),
        width: 12,
        height: 5,
        text: "cache\nttl 60s".to_owned(),
    }));

    let label_id = scene.next_id();
    scene.insert(Entity::Label(Label {
        id: label_id,
        origin: Coord::new(1, 15),
        text: "galatea demo".to_owned(),
        direction: LabelDirection::LeftToRight,
    }));

    let line_id = scene.next_id();
    let down = LineSegment::new(
        scene.next_id(),
        line_id,
        Coord::new(13, 5),
        Coord::new(13, 9),
        SegmentKind::Line,
    )
    .expect("vertical run");
    let corner = LineSegment::slope(scene.next_id(), line_id, Coord::new(13, 10), Direction::South);
    let across = LineSegment::new(
        scene.next_id(),
        line_id,
        Coord::new(14, 10),
        Coord::new(18, 10),
        SegmentKind::Line,
    )
    .expect("horizontal run");
    let line = RoutedLine::from_segments(line_id, [down, corner, across]).expect("routed line");
    scene.insert(Entity::Routed(line));

    scene
}

#[cfg(test)]
mod tests {
    use super::{demo_scene, linked_boxes};
    use crate::model::Entity;

    #[test]
    fn linked_boxes_holds_two_shapes_and_a_connector() {
        let scene = linked_boxes();
        assert_eq!(scene.len(), 3);
        assert!(matches!(scene.entities()[2], Entity::Connector(_)));
    }

    #[test]
    fn demo_scene_covers_every_entity_kind() {
        let scene = demo_scene();
        assert!(scene.entities().iter().any(|e| matches!(e, Entity::Box(_))));
        assert!(scene.entities().iter().any(|e| matches!(e, Entity::Actor(_))));
        assert!(scene.entities().iter().any(|e| matches!(e, Entity::Note(_))));
        assert!(scene.entities().iter().any(|e| matches!(e, Entity::Label(_))));
        assert!(scene
            .entities()
            .iter()
            .any(|e| matches!(e, Entity::Connector(_))));
        assert!(scene
            .entities()
            .iter()
            .any(|e| matches!(e, Entity::Routed(_))));
    }
}
