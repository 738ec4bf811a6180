// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::EntityId;

use super::coord::{Coord, Direction, Vector};

/// Whether a segment is a straight run or a corner marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// A straight orthogonal run; may be degenerate (a single-cell stub).
    Line,
    /// A bend marker between two runs. Always degenerate: `from == to`.
    Slope,
}

/// Which end of a segment a drag gesture is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    From,
    To,
}

/// One piece of a routed connector: an immutable, axis-aligned run or a
/// degenerate corner marker.
///
/// The segment id is preserved across the pure geometric edits
/// ([`extend_endpoint`](Self::extend_endpoint), [`reduce`](Self::reduce)) so a
/// moved segment stays recognizable as the same logical segment; only a truly
/// new run or corner gets a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    id: EntityId,
    line: EntityId,
    from: Coord,
    to: Coord,
    kind: SegmentKind,
    direction: Direction,
}

impl LineSegment {
    /// Constructs a segment, deriving the direction from `(from, to)`.
    ///
    /// Fails when a `Slope` spans more than its own cell, or when the pair is
    /// diagonal. A coincident pair carries no derivable direction; use
    /// [`stub`](Self::stub) or [`slope`](Self::slope) to pass one explicitly.
    pub fn new(
        id: EntityId,
        line: EntityId,
        from: Coord,
        to: Coord,
        kind: SegmentKind,
    ) -> Result<Self, SegmentError> {
        let direction = Direction::between(from, to).unwrap_or(Direction::East);
        Self::with_direction(id, line, from, to, kind, direction)
    }

    /// Constructs a segment with an explicit cached direction.
    ///
    /// Needed for degenerate segments, whose coincident endpoints cannot
    /// derive a direction; callers pass the direction being entered or left
    /// at that point.
    pub fn with_direction(
        id: EntityId,
        line: EntityId,
        from: Coord,
        to: Coord,
        kind: SegmentKind,
        direction: Direction,
    ) -> Result<Self, SegmentError> {
        if kind == SegmentKind::Slope && from != to {
            return Err(SegmentError::SlopeSpansCells { from, to });
        }
        if from.x != to.x && from.y != to.y {
            return Err(SegmentError::Diagonal { from, to });
        }

        Ok(Self {
            id,
            line,
            from,
            to,
            kind,
            direction,
        })
    }

    /// A degenerate `Line` stub at `at`, not yet extended in any direction.
    pub fn stub(id: EntityId, line: EntityId, at: Coord, direction: Direction) -> Self {
        Self {
            id,
            line,
            from: at,
            to: at,
            kind: SegmentKind::Line,
            direction,
        }
    }

    /// A corner marker at `at`. Degenerate by construction, so the `Slope`
    /// invariant cannot be violated through this path.
    pub fn slope(id: EntityId, line: EntityId, at: Coord, direction: Direction) -> Self {
        Self {
            id,
            line,
            from: at,
            to: at,
            kind: SegmentKind::Slope,
            direction,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The routed line this segment belongs to, as a weak id reference.
    pub fn line(&self) -> EntityId {
        self.line
    }

    pub fn from(&self) -> Coord {
        self.from
    }

    pub fn to(&self) -> Coord {
        self.to
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn endpoint(&self, which: EndpointKind) -> Coord {
        match which {
            EndpointKind::From => self.from,
            EndpointKind::To => self.to,
        }
    }

    pub fn spans_one_cell(&self) -> bool {
        self.from == self.to
    }

    pub fn is_reducible(&self) -> bool {
        self.from != self.to
    }

    /// Returns the segment with the chosen endpoint translated by `delta`.
    ///
    /// The other endpoint, the kind, the id and the cached direction are
    /// unchanged; callers must pass deltas consistent with the segment's own
    /// axis for non-degenerate segments.
    pub fn extend_endpoint(&self, delta: Vector, which: EndpointKind) -> Self {
        let mut next = self.clone();
        match which {
            EndpointKind::From => next.from = self.from.moved(delta),
            EndpointKind::To => next.to = self.to.moved(delta),
        }
        next
    }

    /// Re-derives the cached direction from the endpoints where possible.
    ///
    /// Degenerate segments keep whatever direction was cached.
    pub fn rederive_direction(mut self) -> Self {
        if let Some(direction) = Direction::between(self.from, self.to) {
            self.direction = direction;
        }
        self
    }

    /// Shrinks the chosen endpoint by exactly one cell toward the segment's
    /// interior, along the cached direction.
    ///
    /// Fails on a degenerate segment; there is no interior left to shrink
    /// toward.
    pub fn reduce(&self, which: EndpointKind) -> Result<Self, SegmentError> {
        if !self.is_reducible() {
            return Err(SegmentError::NotReducible { at: self.from });
        }

        let mut next = self.clone();
        match which {
            EndpointKind::From => next.from = self.from.moved(self.direction.delta()),
            EndpointKind::To => next.to = self.to.moved(self.direction.opposite().delta()),
        }
        Ok(next)
    }

    /// Checks the shape invariants; used when segments arrive from outside
    /// the drag algorithm (e.g. a persisted scene).
    pub fn validate(&self) -> Result<(), SegmentError> {
        if self.kind == SegmentKind::Slope && self.from != self.to {
            return Err(SegmentError::SlopeSpansCells {
                from: self.from,
                to: self.to,
            });
        }
        if self.from.x != self.to.x && self.from.y != self.to.y {
            return Err(SegmentError::Diagonal {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    SlopeSpansCells { from: Coord, to: Coord },
    Diagonal { from: Coord, to: Coord },
    NotReducible { at: Coord },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlopeSpansCells { from, to } => {
                write!(f, "slope segment must be degenerate, got {from}..{to}")
            }
            Self::Diagonal { from, to } => {
                write!(f, "segment {from}..{to} is not axis-aligned")
            }
            Self::NotReducible { at } => {
                write!(f, "cannot reduce single-cell segment at {at}")
            }
        }
    }
}

impl std::error::Error for SegmentError {}

#[cfg(test)]
mod tests {
    use super::{EndpointKind, LineSegment, SegmentError, SegmentKind};
    use crate::geometry::{Coord, Direction, Vector};
    use crate::model::IdAllocator;

    fn run(from: Coord, to: Coord) -> LineSegment {
        let mut ids = IdAllocator::new();
        let line = ids.next_id();
        LineSegment::new(ids.next_id(), line, from, to, SegmentKind::Line).expect("segment")
    }

    #[test]
    fn slope_with_distinct_endpoints_is_rejected() {
        let mut ids = IdAllocator::new();
        let line = ids.next_id();
        let result = LineSegment::new(
            ids.next_id(),
            line,
            Coord::new(0, 0),
            Coord::new(2, 0),
            SegmentKind::Slope,
        );
        assert_eq!(
            result,
            Err(SegmentError::SlopeSpansCells {
                from: Coord::new(0, 0),
                to: Coord::new(2, 0),
            })
        );
    }

    #[test]
    fn diagonal_run_is_rejected() {
        let mut ids = IdAllocator::new();
        let line = ids.next_id();
        let result = LineSegment::new(
            ids.next_id(),
            line,
            Coord::new(0, 0),
            Coord::new(2, 3),
            SegmentKind::Line,
        );
        assert_eq!(
            result,
            Err(SegmentError::Diagonal {
                from: Coord::new(0, 0),
                to: Coord::new(2, 3),
            })
        );
    }

    #[test]
    fn extend_endpoint_moves_only_the_chosen_end_and_keeps_identity() {
        let segment = run(Coord::new(1, 1), Coord::new(4, 1));
        let extended = segment.extend_endpoint(Vector::new(2, 0), EndpointKind::To);

        assert_eq!(extended.id(), segment.id());
        assert_eq!(extended.from(), Coord::new(1, 1));
        assert_eq!(extended.to(), Coord::new(6, 1));
        assert_eq!(extended.direction(), Direction::East);
    }

    #[test]
    fn extend_endpoint_does_not_recompute_direction() {
        let segment = run(Coord::new(1, 1), Coord::new(4, 1));
        // Pull From past To; the cached direction stays East.
        let reversed = segment.extend_endpoint(Vector::new(9, 0), EndpointKind::From);
        assert_eq!(reversed.direction(), Direction::East);
    }

    #[test]
    fn reduce_shrinks_one_cell_toward_the_interior() {
        let segment = run(Coord::new(1, 1), Coord::new(4, 1));

        let from_side = segment.reduce(EndpointKind::From).expect("reduce from");
        assert_eq!(from_side.from(), Coord::new(2, 1));
        assert_eq!(from_side.to(), Coord::new(4, 1));

        let to_side = segment.reduce(EndpointKind::To).expect("reduce to");
        assert_eq!(to_side.from(), Coord::new(1, 1));
        assert_eq!(to_side.to(), Coord::new(3, 1));
        assert_eq!(to_side.id(), segment.id());
    }

    #[test]
    fn reduce_on_a_vertical_run_follows_the_cached_direction() {
        let segment = run(Coord::new(2, 5), Coord::new(2, 2));
        assert_eq!(segment.direction(), Direction::North);

        let reduced = segment.reduce(EndpointKind::From).expect("reduce");
        assert_eq!(reduced.from(), Coord::new(2, 4));
        assert_eq!(reduced.to(), Coord::new(2, 2));
    }

    #[test]
    fn reduce_fails_on_a_degenerate_segment() {
        let mut ids = IdAllocator::new();
        let line = ids.next_id();
        let stub = LineSegment::stub(ids.next_id(), line, Coord::new(3, 3), Direction::East);
        assert_eq!(
            stub.reduce(EndpointKind::To),
            Err(SegmentError::NotReducible {
                at: Coord::new(3, 3)
            })
        );
    }
}
