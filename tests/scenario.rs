// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end scenarios: scene in, painted frame out.

use galatea::geometry::{Coord, LineSegment, RoutedLine, SegmentKind, Vector};
use galatea::model::fixtures::linked_boxes;
use galatea::model::{BoxEntity, BoxStyle, Connector, Entity, Scene};
use galatea::ops::{apply, Command, EditorState};
use galatea::render::{canvas_to_string_trimmed, paint, Canvas, PaintOptions};
use galatea::route::{GridRouter, Router};

/// Replays a fixed path, ignoring the canvas.
struct ScriptedRouter(Vec<Coord>);

impl Router for ScriptedRouter {
    fn route(&self, _from: Coord, _to: Coord, _canvas: &Canvas, _scene: &Scene) -> Vec<Coord> {
        self.0.clone()
    }
}

fn options(width: usize, height: usize) -> PaintOptions {
    PaintOptions {
        width,
        height,
        show_ids: false,
    }
}

fn two_boxes() -> Scene {
    let mut scene = Scene::new();
    let a = scene.next_id();
    scene.insert(Entity::Box(BoxEntity {
        id: a,
        origin: Coord::new(0, 0),
        width: 3,
        height: 3,
        text: String::new(),
        style: BoxStyle::Lines,
    }));
    let b = scene.next_id();
    scene.insert(Entity::Box(BoxEntity {
        id: b,
        origin: Coord::new(10, 0),
        width: 3,
        height: 3,
        text: String::new(),
        style: BoxStyle::Lines,
    }));
    let c = scene.next_id();
    scene.insert(Entity::Connector(Connector { id: c, from: a, to: b }));
    scene
}

#[test]
fn a_scripted_connector_paints_body_dashes_and_one_arrowhead() {
    let scene = two_boxes();
    let path: Vec<Coord> = (2..=10).map(|x| Coord::new(x, 1)).collect();
    let canvas = paint(&scene, Coord::new(0, 0), &options(14, 4), &ScriptedRouter(path))
        .expect("paint");

    assert_eq!(
        canvas_to_string_trimmed(&canvas),
        "+-+       +-+\n| |------>| |\n+-+       +-+"
    );
}

#[test]
fn the_grid_router_connects_the_linked_boxes_fixture() {
    let scene = linked_boxes();
    let canvas = paint(
        &scene,
        Coord::new(0, 0),
        &PaintOptions::default(),
        &GridRouter::new(),
    )
    .expect("paint");

    // Shortest route runs straight between the facing edges on row 1.
    for x in 10..=18 {
        assert_eq!(canvas.glyph(Coord::new(x, 1)), Some('-'), "body at x={x}");
    }
    assert_eq!(canvas.glyph(Coord::new(19, 1)), Some('>'));
    // The anchor frame cells survive.
    assert_eq!(canvas.glyph(Coord::new(9, 1)), Some('+'));
    assert_eq!(canvas.glyph(Coord::new(20, 1)), Some('+'));
}

#[test]
fn a_routed_line_crossing_a_connector_becomes_a_junction() {
    let mut scene = two_boxes();

    let line_id = scene.next_id();
    let segment_id = scene.next_id();
    let segment = LineSegment::new(
        segment_id,
        line_id,
        Coord::new(6, 0),
        Coord::new(6, 3),
        SegmentKind::Line,
    )
    .expect("vertical run");
    scene.insert(Entity::Routed(
        RoutedLine::from_segments(line_id, [segment]).expect("line"),
    ));

    let path: Vec<Coord> = (2..=10).map(|x| Coord::new(x, 1)).collect();
    let canvas = paint(&scene, Coord::new(0, 0), &options(14, 5), &ScriptedRouter(path))
        .expect("paint");

    assert_eq!(canvas.glyph(Coord::new(6, 1)), Some('+'));
    assert_eq!(canvas.glyph(Coord::new(6, 0)), Some('|'));
    assert_eq!(canvas.glyph(Coord::new(5, 1)), Some('-'));
}

#[test]
fn dragging_a_run_endpoint_diagonally_paints_an_elbow() {
    let mut scene = Scene::new();
    let line_id = scene.next_id();
    let segment_id = scene.next_id();
    let segment = LineSegment::new(
        segment_id,
        line_id,
        Coord::new(1, 1),
        Coord::new(6, 1),
        SegmentKind::Line,
    )
    .expect("horizontal run");
    scene.insert(Entity::Routed(
        RoutedLine::from_segments(line_id, [segment]).expect("line"),
    ));

    let mut state = EditorState::new(scene);
    apply(
        &mut state,
        Command::DragLineEdge {
            target: line_id,
            from: Coord::new(6, 1),
            delta: Vector::new(0, 2),
        },
    )
    .expect("drag");

    let canvas = paint(
        &state.scene,
        Coord::new(0, 0),
        &options(10, 5),
        &ScriptedRouter(Vec::new()),
    )
    .expect("paint");

    // The run shrank by one cell, a corner appeared where the endpoint was,
    // and a stub leads off toward the drop point.
    assert_eq!(canvas_to_string_trimmed(&canvas), "\n -----+\n\n      |");
}

#[test]
fn repeated_drags_keep_the_polyline_paintable() {
    let mut scene = Scene::new();
    let line_id = scene.next_id();
    let line = RoutedLine::stub(line_id, Coord::new(2, 2), scene.allocator_mut());
    scene.insert(Entity::Routed(line));

    let mut state = EditorState::new(scene);
    let mut grab = Coord::new(2, 2);
    for delta in [
        Vector::new(3, 0),
        Vector::new(0, 2),
        Vector::new(-1, 0),
        Vector::new(0, -1),
    ] {
        apply(
            &mut state,
            Command::DragLineEdge {
                target: line_id,
                from: grab,
                delta,
            },
        )
        .expect("drag");
        grab = grab.moved(delta);
    }

    let canvas = paint(
        &state.scene,
        Coord::new(0, 0),
        &options(12, 8),
        &ScriptedRouter(Vec::new()),
    )
    .expect("paint");

    let Some(Entity::Routed(line)) = state.scene.get(line_id) else {
        panic!("line survives");
    };
    for segment in line.segments() {
        segment.validate().expect("segment shape invariant");
        for pos in [segment.from(), segment.to()] {
            assert_ne!(canvas.glyph(pos), Some(' '), "painted cell at {pos}");
        }
    }
}
