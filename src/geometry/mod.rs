// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector geometry: grid coordinates, line segments, and the drag
//! transformation for orthogonal routed lines.

pub mod coord;
pub mod routed_line;
pub mod segment;

pub use coord::{direction_after_bend, Coord, Direction, Vector};
pub use routed_line::RoutedLine;
pub use segment::{EndpointKind, LineSegment, SegmentError, SegmentKind};
