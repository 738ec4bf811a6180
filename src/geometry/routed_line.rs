// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::{EntityId, IdAllocator};

use super::coord::{direction_after_bend, Coord, Direction};
use super::segment::{EndpointKind, LineSegment, SegmentError, SegmentKind};

/// Most connectors are a handful of runs and corners; keep them inline.
type Segments = SmallVec<[LineSegment; 4]>;

/// A draggable orthogonal connector: an ordered sequence of segments forming
/// a polyline, where degenerate `Slope` segments mark direction changes
/// between adjacent runs.
///
/// A drag never mutates in place; it produces a new `RoutedLine` with the
/// same line id, reusing segment ids wherever a segment merely moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutedLine {
    id: EntityId,
    segments: Segments,
}

impl RoutedLine {
    /// A minimal stub connector at `at`, not yet extended in any direction.
    pub fn stub(id: EntityId, at: Coord, ids: &mut IdAllocator) -> Self {
        let segment = LineSegment::stub(ids.next_id(), id, at, Direction::East);
        Self {
            id,
            segments: SmallVec::from_iter([segment]),
        }
    }

    /// Builds a line from pre-existing segments, re-checking the per-segment
    /// shape invariants (used by persistence and tests).
    pub fn from_segments(
        id: EntityId,
        segments: impl IntoIterator<Item = LineSegment>,
    ) -> Result<Self, SegmentError> {
        let segments: Segments = segments.into_iter().collect();
        for segment in &segments {
            segment.validate()?;
        }
        Ok(Self { id, segments })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// A line that is still a single degenerate stub.
    pub fn is_atomic(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].spans_one_cell()
    }

    /// Reshapes the line for a drag gesture from `drag_from` to `drag_to`.
    ///
    /// Never fails: a grab that matches no segment endpoint returns the line
    /// unchanged. Grabbing a segment interior is likewise left unchanged;
    /// only endpoint grabs reshape the route.
    pub fn drag(&self, drag_from: Coord, drag_to: Coord, ids: &mut IdAllocator) -> Self {
        let Some((index, which)) = self.match_endpoint(drag_from) else {
            return self.clone();
        };

        let delta = drag_to - drag_from;
        let mut segments = self.segments.clone();
        let current = segments[index].clone();

        if current.kind() == SegmentKind::Slope {
            // Dragging a bend point spawns a new leading stub rather than
            // moving the corner itself.
            let stub = LineSegment::stub(ids.next_id(), self.id, drag_to, current.direction());
            segments.insert(0, stub);
        } else if self.is_atomic() {
            segments[index] = current.extend_endpoint(delta, which).rederive_direction();
        } else if is_drag_diagonal(&current, drag_from, drag_to) {
            // Carve a corner out of the matched segment: shrink (or drop) the
            // run, plant a slope where the grabbed endpoint was, and lead off
            // with a stub continuing on the perpendicular axis.
            if current.is_reducible() {
                segments[index] = current.reduce(which).expect("guarded by is_reducible");
            } else {
                segments.remove(index);
            }

            let corner = current.endpoint(which);
            let slope = LineSegment::slope(ids.next_id(), self.id, corner, current.direction());
            segments.insert(index, slope);

            let stub_direction = direction_after_bend(current.direction(), delta);
            let stub =
                LineSegment::stub(ids.next_id(), self.id, corner.moved(delta), stub_direction);
            segments.insert(index, stub);
        } else if current.spans_one_cell() {
            match Direction::between(drag_from, drag_to) {
                Some(direction) if direction == current.direction().opposite() => {
                    segments.remove(index);
                }
                _ => segments[index] = current.extend_endpoint(delta, which),
            }
        } else {
            // A multi-cell run is one rigid edge of the route up to its next
            // bend; move the whole run, not just its tip.
            for segment in segments.iter_mut().skip(index) {
                if segment.kind() == SegmentKind::Slope {
                    break;
                }
                *segment = segment.extend_endpoint(delta, which);
            }
        }

        Self {
            id: self.id,
            segments,
        }
    }

    /// Finds the first segment, in sequence order, with an endpoint at
    /// `point`. Degenerate segments match their single coincident point as
    /// `To`; coincident joins between segments resolve by segment order, not
    /// by any notion of closeness.
    fn match_endpoint(&self, point: Coord) -> Option<(usize, EndpointKind)> {
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.spans_one_cell() {
                if segment.to() == point {
                    return Some((index, EndpointKind::To));
                }
            } else if segment.from() == point {
                return Some((index, EndpointKind::From));
            } else if segment.to() == point {
                return Some((index, EndpointKind::To));
            }
        }
        None
    }
}

/// A drag is diagonal relative to the segment's own orientation: for
/// horizontal segments any vertical displacement, for vertical segments any
/// horizontal displacement.
fn is_drag_diagonal(segment: &LineSegment, drag_from: Coord, drag_to: Coord) -> bool {
    if segment.direction().is_horizontal() {
        drag_from.y != drag_to.y
    } else {
        drag_from.x != drag_to.x
    }
}
