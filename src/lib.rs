// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea — a terminal diagram editor core.
//!
//! A scene of boxes, actors, notes, labels and connectors is painted onto a
//! glyph grid; routed orthogonal lines are reshaped by drag gestures.

pub mod geometry;
pub mod model;
pub mod ops;
pub mod render;
pub mod route;
pub mod store;
pub mod tui;
