// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal view bridge.
//!
//! Converts painted canvases into ratatui text for a host-owned event
//! loop; the input loop itself is a host concern.

use ratatui::text::{Line, Span, Text};

use crate::geometry::Coord;
use crate::render::Canvas;

mod theme;

/// Converts a painted canvas into styled text, merging equal-styled runs
/// of cells into one span per run.
pub fn canvas_to_text(canvas: &Canvas) -> Text<'static> {
    let mut lines = Vec::with_capacity(canvas.height());

    for y in 0..canvas.height() {
        let mut spans = Vec::<Span<'static>>::new();
        let mut run = String::new();
        let mut run_style = None;

        for x in 0..canvas.width() {
            let cell = canvas
                .cell(Coord::new(x as i32, y as i32))
                .expect("in bounds");
            let style = theme::cell_style(cell);

            if run_style != Some(style) {
                if !run.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut run),
                        run_style.expect("style set with run"),
                    ));
                }
                run_style = Some(style);
            }
            run.push(cell.ch);
        }

        if !run.is_empty() {
            spans.push(Span::styled(run, run_style.expect("style set with run")));
        }
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::canvas_to_text;
    use crate::geometry::Coord;
    use crate::model::IdAllocator;
    use crate::render::{Canvas, CellColor};

    #[test]
    fn equal_styled_neighbors_merge_into_one_span() {
        let mut ids = IdAllocator::new();
        let owner = ids.next_id();
        let mut canvas = Canvas::new(5, 1).expect("canvas");
        canvas.paint(Coord::new(0, 0), 'a', owner);
        canvas.paint(Coord::new(1, 0), 'b', owner);
        canvas.recolor(Coord::new(3, 0), CellColor::Yellow, CellColor::DarkYellow);

        let text = canvas_to_text(&canvas);

        let spans = &text.lines[0].spans;
        assert_eq!(spans.len(), 3, "run, highlight, run");
        assert_eq!(spans[0].content.as_ref(), "ab ");
        assert_eq!(spans[1].content.as_ref(), " ");
        assert_eq!(spans[2].content.as_ref(), " ");
    }

    #[test]
    fn every_canvas_row_becomes_one_line() {
        let canvas = Canvas::new(3, 4).expect("canvas");
        let text = canvas_to_text(&canvas);
        assert_eq!(text.lines.len(), 4);
    }

    #[test]
    fn the_cursor_highlight_gets_its_own_span() {
        let mut canvas = Canvas::new(3, 1).expect("canvas");
        canvas.recolor(Coord::new(1, 0), CellColor::Yellow, CellColor::DarkYellow);

        let text = canvas_to_text(&canvas);

        let spans = &text.lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert_ne!(spans[0].style, spans[1].style);
    }
}
