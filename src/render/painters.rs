// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One stamping painter per non-connector entity kind. Each painter is a
//! pure function over the canvas; connector painting lives in the
//! compositor, where crossing resolution happens.

use crate::geometry::Coord;
use crate::model::{Actor, BoxEntity, BoxFramePart, BoxStyle, Label, LabelDirection, Note, ACTOR_GLYPH};

use super::{Canvas, CellColor};

const BOX_TEXT_PAD_X: i32 = 2;
const BOX_TEXT_PAD_Y: i32 = 1;

fn style_char(style: BoxStyle, part: BoxFramePart) -> char {
    match style {
        BoxStyle::Stars => '*',
        BoxStyle::Dots => '.',
        BoxStyle::Eqls => '=',
        BoxStyle::Lines => match part {
            BoxFramePart::NwCorner
            | BoxFramePart::NeCorner
            | BoxFramePart::SwCorner
            | BoxFramePart::SeCorner => '+',
            BoxFramePart::Horizontal => '-',
            BoxFramePart::Vertical => '|',
        },
    }
}

fn overlay_id(canvas: &mut Canvas, id: crate::model::EntityId, origin: Coord) {
    canvas.overlay_str(origin, &id.to_string(), CellColor::Green, CellColor::DarkGreen);
}

pub fn paint_box(canvas: &mut Canvas, entity: &BoxEntity, show_ids: bool) {
    for (pos, part) in entity.frame_parts() {
        canvas.paint(pos, style_char(entity.style, part), entity.id);
    }

    if !entity.text.trim().is_empty() {
        for (row, line) in entity.text.split('\n').enumerate() {
            let pos = Coord::new(
                entity.origin.x + BOX_TEXT_PAD_X,
                entity.origin.y + BOX_TEXT_PAD_Y + row as i32,
            );
            canvas.paint_str(pos, line, entity.id, CellColor::Gray, CellColor::Black);
        }
    }

    if show_ids {
        overlay_id(canvas, entity.id, entity.origin);
    }
}

//  +~~~~~~~~~~+\
//  |          |_\
//  |             |
//  |             |
//  +~~~~~~~~~~~~~+
pub fn paint_note(canvas: &mut Canvas, entity: &Note, show_ids: bool) {
    let width = entity.width.max(3) as usize;
    let rows: Vec<&str> = entity.text.split('\n').collect();

    for y in 0..entity.height.max(2) {
        let line = if y == 0 {
            format!("+{}+\\", "~".repeat(width - 3))
        } else if y == 1 {
            format!("|{}|_\\", " ".repeat(width - 3))
        } else if y < entity.height - 1 {
            let row = rows.get(y as usize - 2).copied().unwrap_or("");
            format!("|{row:<pad$}|", pad = width - 1)
        } else {
            format!("+{}+", "~".repeat(width - 1))
        };

        let pos = Coord::new(entity.origin.x, entity.origin.y + y);
        canvas.paint_str(pos, &line, entity.id, CellColor::Gray, CellColor::Black);
    }

    if show_ids {
        overlay_id(canvas, entity.id, entity.origin);
    }
}

pub fn paint_actor(canvas: &mut Canvas, entity: &Actor, show_ids: bool) {
    for (row, line) in ACTOR_GLYPH
        .iter()
        .copied()
        .chain(std::iter::once(entity.name.as_str()))
        .enumerate()
    {
        let pos = Coord::new(entity.origin.x, entity.origin.y + row as i32);
        canvas.paint_str(pos, line, entity.id, CellColor::Gray, CellColor::Black);
    }

    if show_ids {
        overlay_id(canvas, entity.id, entity.origin);
    }
}

pub fn paint_label(canvas: &mut Canvas, entity: &Label, show_ids: bool) {
    match entity.direction {
        LabelDirection::LeftToRight => {
            for (row, line) in entity.text.split('\n').enumerate() {
                let pos = Coord::new(entity.origin.x, entity.origin.y + row as i32);
                canvas.paint_str(pos, line, entity.id, CellColor::Gray, CellColor::Black);
            }
        }
        LabelDirection::TopDown => {
            for (column, line) in entity.text.split('\n').enumerate() {
                for (row, ch) in line.chars().enumerate() {
                    let pos = Coord::new(
                        entity.origin.x + column as i32,
                        entity.origin.y + row as i32,
                    );
                    canvas.paint(pos, ch, entity.id);
                }
            }
        }
    }

    if show_ids {
        overlay_id(canvas, entity.id, entity.origin);
    }
}

#[cfg(test)]
mod tests {
    use super::{paint_actor, paint_box, paint_label, paint_note};
    use crate::geometry::Coord;
    use crate::model::{Actor, BoxEntity, BoxStyle, IdAllocator, Label, LabelDirection, Note};
    use crate::render::{canvas_to_string_trimmed, Canvas};

    #[test]
    fn lines_box_renders_frame_and_text() {
        let mut ids = IdAllocator::new();
        let entity = BoxEntity {
            id: ids.next_id(),
            origin: Coord::new(0, 0),
            width: 8,
            height: 3,
            text: "api".to_owned(),
            style: BoxStyle::Lines,
        };
        let mut canvas = Canvas::new(10, 4).expect("canvas");

        paint_box(&mut canvas, &entity, false);

        assert_eq!(
            canvas_to_string_trimmed(&canvas),
            "+------+\n| api  |\n+------+"
        );
    }

    #[test]
    fn stars_box_uses_one_glyph_for_the_whole_frame() {
        let mut ids = IdAllocator::new();
        let entity = BoxEntity {
            id: ids.next_id(),
            origin: Coord::new(0, 0),
            width: 4,
            height: 3,
            text: String::new(),
            style: BoxStyle::Stars,
        };
        let mut canvas = Canvas::new(6, 4).expect("canvas");

        paint_box(&mut canvas, &entity, false);

        assert_eq!(canvas_to_string_trimmed(&canvas), "****\n*  *\n****");
    }

    #[test]
    fn note_renders_the_dog_ear_and_body_text() {
        let mut ids = IdAllocator::new();
        let entity = Note {
            id: ids.next_id(),
            origin: Coord::new(0, 0),
            width: 8,
            height: 5,
            text: "hi".to_owned(),
        };
        let mut canvas = Canvas::new(12, 6).expect("canvas");

        paint_note(&mut canvas, &entity, false);

        let text = canvas_to_string_trimmed(&canvas);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines[0], "+~~~~~+\\");
        assert_eq!(lines[1], "|     |_\\");
        assert_eq!(lines[2], "|hi     |");
        assert_eq!(lines[4], "+~~~~~~~+");
    }

    #[test]
    fn actor_renders_figure_and_name() {
        let mut ids = IdAllocator::new();
        let entity = Actor {
            id: ids.next_id(),
            origin: Coord::new(0, 0),
            name: "ops".to_owned(),
        };
        let mut canvas = Canvas::new(6, 7).expect("canvas");

        paint_actor(&mut canvas, &entity, false);

        assert_eq!(
            canvas_to_string_trimmed(&canvas),
            ",-.\n`-'\n/|\\\n |\n/ \\\nops"
        );
    }

    #[test]
    fn top_down_label_stamps_characters_vertically() {
        let mut ids = IdAllocator::new();
        let entity = Label {
            id: ids.next_id(),
            origin: Coord::new(1, 0),
            text: "abc".to_owned(),
            direction: LabelDirection::TopDown,
        };
        let mut canvas = Canvas::new(4, 4).expect("canvas");

        paint_label(&mut canvas, &entity, false);

        assert_eq!(canvas_to_string_trimmed(&canvas), " a\n b\n c");
    }

    #[test]
    fn id_overlay_stamps_the_id_at_the_origin() {
        let mut ids = IdAllocator::new();
        let entity = BoxEntity {
            id: ids.next_id(),
            origin: Coord::new(0, 0),
            width: 4,
            height: 3,
            text: String::new(),
            style: BoxStyle::Lines,
        };
        let mut canvas = Canvas::new(6, 4).expect("canvas");

        paint_box(&mut canvas, &entity, true);

        assert_eq!(canvas.glyph(Coord::new(0, 0)), Some('1'));
        // The overlay does not steal the cell from the box.
        assert_eq!(canvas.occupant(Coord::new(0, 0)), Some(entity.id));
    }
}
