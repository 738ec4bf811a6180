// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea CLI entrypoint.
//!
//! Paints a scene file (or the built-in demo scene) to stdout. The
//! interactive editing loop is a host concern; this binary is the
//! render-a-frame surface.

use std::error::Error;
use std::path::Path;

use galatea::geometry::Coord;
use galatea::model::fixtures::demo_scene;
use galatea::model::Scene;
use galatea::render::{canvas_to_string_trimmed, paint, PaintOptions};
use galatea::route::GridRouter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <scene-file> [--show-ids]\n  {program} --demo [--show-ids]\n\nPaints one frame of the scene to stdout.\n--demo uses a built-in demo scene and cannot be combined with a scene file.\n--show-ids overlays selectable entity ids."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    scene_path: Option<String>,
    demo: bool,
    show_ids: bool,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--show-ids" => {
                if options.show_ids {
                    return Err(());
                }
                options.show_ids = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.scene_path.is_some() {
                    return Err(());
                }
                options.scene_path = Some(arg);
            }
        }
    }

    if options.demo == options.scene_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn load_scene(options: &CliOptions) -> Result<Scene, Box<dyn Error>> {
    if options.demo {
        return Ok(demo_scene());
    }
    match &options.scene_path {
        Some(path) => Ok(galatea::store::load_scene(Path::new(path))?),
        None => Ok(Scene::new()),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "galatea".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let scene = load_scene(&options)?;
        let paint_options = PaintOptions {
            show_ids: options.show_ids,
            ..PaintOptions::default()
        };
        let canvas = paint(&scene, Coord::new(0, 0), &paint_options, &GridRouter::new())?;
        println!("{}", canvas_to_string_trimmed(&canvas));
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
