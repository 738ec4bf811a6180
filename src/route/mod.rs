// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector path finding.
//!
//! The compositor only depends on the [`Router`] trait; [`GridRouter`] is
//! the built-in implementation, a breadth-first search over free canvas
//! cells. Tests substitute scripted routers to pin down exact paths.

use std::collections::{HashMap, VecDeque};

use crate::geometry::Coord;
use crate::model::Scene;
use crate::render::Canvas;

/// Produces the cell path a connector follows between two anchor cells.
///
/// Returns the full path including both endpoints, or an empty vector when
/// no path exists. The canvas is the partially painted frame, so occupancy
/// reflects the shapes already stamped.
pub trait Router {
    fn route(&self, from: Coord, to: Coord, canvas: &Canvas, scene: &Scene) -> Vec<Coord>;
}

pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Picks the closest pair of frame cells between two shapes by Manhattan
/// distance. Ties keep the first pair encountered, so anchor choice is
/// stable across repaints.
pub fn nearest_frame_pair(froms: &[Coord], tos: &[Coord]) -> Option<(Coord, Coord)> {
    let mut best: Option<(i32, Coord, Coord)> = None;

    for &from in froms {
        for &to in tos {
            let dist = manhattan_distance(from, to);
            if best.map_or(true, |(best_dist, _, _)| dist < best_dist) {
                best = Some((dist, from, to));
            }
        }
    }

    best.map(|(_, from, to)| (from, to))
}

/// Breadth-first router over the canvas grid, 4-connected.
///
/// A cell is passable when it is in bounds and unoccupied; the two anchor
/// cells themselves are always passable, since they sit on shape frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRouter;

impl GridRouter {
    pub fn new() -> Self {
        Self
    }

    fn passable(canvas: &Canvas, pos: Coord, from: Coord, to: Coord) -> bool {
        canvas.in_bounds(pos) && (canvas.occupant(pos).is_none() || pos == from || pos == to)
    }
}

impl Router for GridRouter {
    fn route(&self, from: Coord, to: Coord, canvas: &Canvas, _scene: &Scene) -> Vec<Coord> {
        if from == to {
            return vec![from];
        }

        let mut came_from = HashMap::<Coord, Coord>::new();
        let mut queue = VecDeque::new();
        queue.push_back(from);
        came_from.insert(from, from);

        while let Some(pos) = queue.pop_front() {
            if pos == to {
                break;
            }

            let neighbors = [
                Coord::new(pos.x + 1, pos.y),
                Coord::new(pos.x - 1, pos.y),
                Coord::new(pos.x, pos.y + 1),
                Coord::new(pos.x, pos.y - 1),
            ];
            for next in neighbors {
                if Self::passable(canvas, next, from, to) && !came_from.contains_key(&next) {
                    came_from.insert(next, pos);
                    queue.push_back(next);
                }
            }
        }

        if !came_from.contains_key(&to) {
            return Vec::new();
        }

        let mut path = vec![to];
        let mut pos = to;
        while pos != from {
            pos = came_from[&pos];
            path.push(pos);
        }
        path.reverse();
        path
    }
}
