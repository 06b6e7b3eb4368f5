// reader.rs - Scene file reader
//
// The stream is not self-describing: entity payloads carry no per-component
// type tags. Framing is heuristic: a length field at or below
// FOOTER_PEEK_LIMIT is tentatively read as a string and compared against
// the footer; a mismatch rewinds and parses an entity block instead.

use crate::{
    SceneError, ENTITY_FORMAT_VERSION, FOOTER_PEEK_LIMIT, SCENE_FOOTER, SCENE_FORMAT_VERSION,
};
use galaktic_core::ecs::{ComponentTypeInfo, World};
use galaktic_core::scene::Scene;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Reads `.gkscene` files written by [`crate::SceneWriter`].
///
/// Hard dependency: the scene's world must hold the exact registered-type
/// population the writer had, in the same registration order. Each entity
/// block is reconstructed by replaying the registry, not the file, so a
/// reader with a different registration history cannot parse the stream.
pub struct SceneReader;

impl SceneReader {
    fn read_u64(r: &mut dyn Read) -> io::Result<u64> {
        let mut bytes = [0u8; 8];
        r.read_exact(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }

    fn read_u32(r: &mut dyn Read) -> io::Result<u32> {
        let mut bytes = [0u8; 4];
        r.read_exact(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read a length-prefixed string, guarded by the same sanity limit the
    /// footer heuristic uses.
    pub fn read_string(r: &mut dyn Read) -> Result<String, SceneError> {
        let len = Self::read_u64(r)?;
        if len > FOOTER_PEEK_LIMIT {
            return Err(SceneError::Malformed(format!(
                "string length {len} exceeds the sanity limit"
            )));
        }
        let mut bytes = vec![0u8; len as usize];
        r.read_exact(&mut bytes)?;
        String::from_utf8(bytes).map_err(|e| SceneError::Malformed(e.to_string()))
    }

    /// Parse one entity block: register an empty placeholder, then replay
    /// the registry descriptor by descriptor.
    pub fn read_entity(r: &mut dyn Read, world: &mut World) -> Result<(), SceneError> {
        let _block_size = Self::read_u64(r)?;

        let version = Self::read_u32(r)?;
        if version != ENTITY_FORMAT_VERSION {
            tracing::error!(
                "entity block has format version {version}, expected {ENTITY_FORMAT_VERSION}"
            );
            return Err(SceneError::EntityVersionMismatch {
                found: version,
                expected: ENTITY_FORMAT_VERSION,
            });
        }

        let id = Self::read_u32(r)?;
        world.add_empty_entity(id);

        let mut infos: Vec<ComponentTypeInfo> = Vec::new();
        world.registry().for_each_registered(|info| infos.push(*info));

        for info in infos {
            if info.is_tag {
                world.add_tag_by_type(id, info.type_id);
                continue;
            }
            let value = (info.deserialize)(r)?;
            world.add_raw_component(id, info.type_id, value);
        }

        tracing::debug!("read entity {id}");
        Ok(())
    }

    /// Read a whole scene file into `scene`, overwriting its name.
    ///
    /// A format version mismatch aborts before any entity is populated.
    /// Reaching end-of-stream without a byte-exact footer match is an
    /// error: a truncated file is never accepted as complete.
    pub fn read_scene(path: &Path, scene: &mut Scene) -> Result<(), SceneError> {
        tracing::info!("reading scene from {}", path.display());
        let file = File::open(path)?;
        let mut r = BufReader::new(file);

        let _scene_size = Self::read_u64(&mut r)?;

        let version = Self::read_u32(&mut r)?;
        if version != SCENE_FORMAT_VERSION {
            if version < SCENE_FORMAT_VERSION {
                tracing::error!("scene has older format version {version}, cannot read");
            } else {
                tracing::error!("scene has newer format version {version}, cannot read");
            }
            return Err(SceneError::VersionMismatch {
                found: version,
                expected: SCENE_FORMAT_VERSION,
            });
        }

        let name = Self::read_string(&mut r)?;
        scene.set_name(name);

        let footer = SCENE_FOOTER.as_bytes();
        loop {
            let position = r.stream_position()?;

            let mut len_bytes = [0u8; 8];
            if let Err(e) = r.read_exact(&mut len_bytes) {
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    return Err(SceneError::MissingFooter);
                }
                return Err(e.into());
            }
            let candidate_len = u64::from_le_bytes(len_bytes);

            // Below the sanity threshold this may be the footer; read it
            // and compare byte for byte.
            if candidate_len <= FOOTER_PEEK_LIMIT {
                let mut bytes = vec![0u8; candidate_len as usize];
                match r.read_exact(&mut bytes) {
                    Ok(()) => {
                        if bytes == footer {
                            break;
                        }
                    }
                    Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                        return Err(SceneError::MissingFooter);
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            // Not the footer: rewind and parse an entity block here.
            r.seek(SeekFrom::Start(position))?;
            Self::read_entity(&mut r, scene.world_mut())?;
        }

        tracing::info!("'{}' scene was read successfully", scene.name());
        Ok(())
    }
}
