// writer.rs - Scene file writer
//
// One pass: precompute each entity's payload size, write the entity header,
// then serialize component payloads in the store's visitation order. Tags
// are skipped; their presence is reconstructed from the registry on read.

use crate::{
    scene_path, SceneError, ENTITY_FORMAT_VERSION, FOOTER_PEEK_LIMIT, SCENE_FOOTER,
    SCENE_FORMAT_VERSION,
};
use galaktic_core::ecs::{EntityId, World};
use galaktic_core::scene::Scene;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct SceneWriter;

impl SceneWriter {
    /// Write a length-prefixed string (u64 length, raw bytes).
    pub fn write_string(w: &mut dyn Write, value: &str) -> io::Result<()> {
        w.write_all(&(value.len() as u64).to_le_bytes())?;
        w.write_all(value.as_bytes())
    }

    fn entity_payload_size(world: &World, id: EntityId) -> u64 {
        world.store().all_components_size(world.registry(), id) as u64
    }

    /// Write one entity block: length, version, id, component payloads.
    pub fn write_entity(w: &mut dyn Write, world: &World, id: EntityId) -> io::Result<()> {
        // Block length covers the version and id fields plus the payload.
        let block_size = Self::entity_payload_size(world, id)
            + (std::mem::size_of::<u32>() as u64) * 2;
        w.write_all(&block_size.to_le_bytes())?;
        w.write_all(&ENTITY_FORMAT_VERSION.to_le_bytes())?;
        w.write_all(&id.to_le_bytes())?;

        let mut result = Ok(());
        world
            .store()
            .for_each_component(world.registry(), id, |info, value| {
                if result.is_err() || info.is_tag {
                    return;
                }
                if let Err(e) = (info.serialize)(value, &mut *w) {
                    result = Err(e);
                }
            });
        result?;

        tracing::debug!("wrote {block_size} bytes for entity {id}");
        Ok(())
    }

    /// Persist the scene into `dir`, replacing any previous file.
    ///
    /// The scene name must fit under [`FOOTER_PEEK_LIMIT`] bytes; the reader
    /// rejects longer name strings, so a longer name would produce a file
    /// that can never be read back.
    ///
    /// The file is written to a temporary path first and renamed into place
    /// once complete. Returns the final path.
    pub fn write_scene(dir: &Path, scene: &Scene) -> Result<PathBuf, SceneError> {
        if scene.name().len() as u64 > FOOTER_PEEK_LIMIT {
            return Err(SceneError::Malformed(format!(
                "scene name length {} exceeds the sanity limit",
                scene.name().len()
            )));
        }

        let world = scene.world();
        tracing::info!("writing scene '{}' to {}", scene.name(), dir.display());
        fs::create_dir_all(dir)?;

        let ids = world.entity_ids();

        // Scene block length: version field + name string + entity blocks,
        // each entity counted with its own u64 length prefix. The reader
        // never consumes this field; this computation is the definition.
        let mut scene_size =
            std::mem::size_of::<u32>() as u64 + 8 + scene.name().len() as u64;
        for &id in &ids {
            scene_size += 8 + Self::entity_payload_size(world, id)
                + (std::mem::size_of::<u32>() as u64) * 2;
        }

        let final_path = scene_path(dir, scene.name());
        let tmp_path = final_path.with_extension("gkscene.tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut w = BufWriter::new(file);
            w.write_all(&scene_size.to_le_bytes())?;
            w.write_all(&SCENE_FORMAT_VERSION.to_le_bytes())?;
            Self::write_string(&mut w, scene.name())?;

            for &id in &ids {
                Self::write_entity(&mut w, world, id)?;
            }

            Self::write_string(&mut w, SCENE_FOOTER)?;
            w.flush()?;
        }

        if final_path.exists() {
            fs::remove_file(&final_path)?;
        }
        fs::rename(&tmp_path, &final_path)?;

        tracing::info!("'{}' scene was written successfully", scene.name());
        Ok(final_path)
    }
}
