// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Style};

use crate::render::{Cell, CellColor};

/// Maps the compositor's console palette onto terminal colors. The palette's
/// bright/dim pairs land on ratatui's light/normal variants.
pub(crate) fn terminal_color(color: CellColor) -> Color {
    match color {
        CellColor::Black => Color::Black,
        CellColor::Gray => Color::Gray,
        CellColor::White => Color::White,
        CellColor::Green => Color::LightGreen,
        CellColor::DarkGreen => Color::Green,
        CellColor::Yellow => Color::LightYellow,
        CellColor::DarkYellow => Color::Yellow,
    }
}

pub(crate) fn cell_style(cell: &Cell) -> Style {
    Style::default()
        .fg(terminal_color(cell.fg))
        .bg(terminal_color(cell.bg))
}
