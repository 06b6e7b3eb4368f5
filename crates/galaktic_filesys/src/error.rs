use std::io;
use thiserror::Error;

/// Errors surfaced while reading or writing a scene file.
///
/// Version mismatches abort the load before any entity is populated; there
/// is no migration path between format versions.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene file i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("scene format version {found} is not readable (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("entity format version {found} is not readable (expected {expected})")]
    EntityVersionMismatch { found: u32, expected: u32 },

    #[error("stream ended before the scene footer was found")]
    MissingFooter,

    #[error("malformed scene data: {0}")]
    Malformed(String),
}
