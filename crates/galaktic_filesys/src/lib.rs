//! Galaktic Scene Filesystem
//!
//! Binary persistence for scenes (`.gkscene`). One blocking call writes or
//! reads an entire scene; there is no streaming or partial progress.
//!
//! Layout (little-endian, fixed-width length fields):
//!
//! ```text
//! SceneFile := blockSize:u64  version:u32  name:String  Entity*  footer:String
//! Entity    := blockSize:u64  version:u32  entityID:u32  Component*
//! String    := length:u64  bytes[length]
//! ```
//!
//! Component payloads carry no type tags. A reader reconstructs them by
//! replaying the component registry in registration order, so it must hold
//! the exact registered-type population the writer had; see [`SceneReader`].

mod error;
mod reader;
mod writer;

pub use error::SceneError;
pub use reader::SceneReader;
pub use writer::SceneWriter;

use std::path::{Path, PathBuf};

/// Scene file format version embedded in every file.
pub const SCENE_FORMAT_VERSION: u32 = 1;

/// Entity block format version embedded in every entity block.
pub const ENTITY_FORMAT_VERSION: u32 = 1;

/// Trailing sentinel; compared byte for byte when reading.
pub const SCENE_FOOTER: &str = "Wrote in Galaktic ^o^";

/// Length-sanity threshold: a block length at or below this may be the
/// footer string, anything above it is assumed to be an entity block.
/// Scene names are held to the same bound at write time so every written
/// name string stays readable.
pub const FOOTER_PEEK_LIMIT: u64 = 1024;

/// File extension of persisted scenes.
pub const SCENE_EXTENSION: &str = "gkscene";

/// Path of the scene `name` inside the scene directory.
pub fn scene_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{SCENE_EXTENSION}"))
}

pub fn check_file(path: &Path) -> bool {
    path.is_file()
}

pub fn remove_file(path: &Path) -> std::io::Result<()> {
    std::fs::remove_file(path)
}
