// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene persistence: one JSON document per scene, written atomically.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::geometry::SegmentError;
use crate::model::{Entity, IdAllocator, Scene};

/// On-disk shape of a scene file. Ids are persisted explicitly so the
/// allocator can resume without ever reissuing a live id.
#[derive(Debug, Serialize, Deserialize)]
struct SceneDocument {
    entities: Vec<Entity>,
}

pub fn save_scene(path: &Path, scene: &Scene) -> Result<(), StoreError> {
    let document = SceneDocument {
        entities: scene.entities().to_vec(),
    };
    let json = serde_json::to_string_pretty(&document).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    write_atomic(path, json.as_bytes())
}

/// Loads a scene, re-checking every routed-line segment invariant; a file
/// edited by hand must not smuggle in geometry the editor cannot hold.
pub fn load_scene(path: &Path) -> Result<Scene, StoreError> {
    let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: SceneDocument =
        serde_json::from_str(&json).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    for entity in &document.entities {
        if let Entity::Routed(line) = entity {
            for segment in line.segments() {
                segment.validate().map_err(|source| StoreError::InvalidSegment {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
    }

    // Segment ids draw from the same allocator as entity ids; both count
    // when resuming.
    let highest = document
        .entities
        .iter()
        .flat_map(|entity| {
            let segments = match entity {
                Entity::Routed(line) => line.segments(),
                _ => &[],
            };
            std::iter::once(entity.id()).chain(segments.iter().map(|segment| segment.id()))
        })
        .max();
    let ids = match highest {
        Some(highest) => IdAllocator::resuming_after(highest),
        None => IdAllocator::new(),
    };

    Ok(Scene::from_parts(document.entities, ids))
}

/// Writes a temp file next to the target and renames it into place.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|source| StoreError::Io {
        path: parent.clone(),
        source,
    })?;

    let file_name = path.file_name().ok_or_else(|| StoreError::Io {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::Other, "path has no file name"),
    })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".galatea.tmp.{}.{nanos}",
        file_name.to_string_lossy()
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    drop(file);

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidSegment {
        path: PathBuf,
        source: SegmentError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidSegment { path, source } => {
                write!(f, "invalid line segment in {path:?}: {source}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidSegment { source, .. } => Some(source),
        }
    }
}
