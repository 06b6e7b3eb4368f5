//! Galaktic Runtime
//!
//! Minimal binary that links the engine crates and exercises scene
//! persistence: build a scene, write it to disk, load it back.

use anyhow::Result;
use galaktic_core::ecs::components::{
    ColorComponent, NameComponent, PlayerTag, SpeedComponent, TransformComponent,
};
use galaktic_core::ecs::spawn_player;
use galaktic_core::scene::Scene;
use galaktic_filesys::{SceneReader, SceneWriter};
use std::path::Path;

mod settings;

use settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Galaktic Engine v{}", galaktic_core::VERSION);

    let settings = Settings::load(Path::new("settings.json"));

    let mut scene = Scene::new(&settings.startup_scene);
    spawn_player(scene.world_mut(), "Player");
    spawn_player(scene.world_mut(), "Player");

    let path = SceneWriter::write_scene(&settings.scene_dir, &scene)?;
    tracing::info!("scene saved to {}", path.display());

    // A loading world must replay the writer's component registrations in
    // the same order before it can parse the file.
    let mut loaded = Scene::new("");
    {
        let world = loaded.world_mut();
        world.register::<NameComponent>();
        world.register::<PlayerTag>();
        world.register::<TransformComponent>();
        world.register::<SpeedComponent>();
        world.register::<ColorComponent>();
    }
    SceneReader::read_scene(&path, &mut loaded)?;

    tracing::info!(
        "scene '{}' loaded with {} entities",
        loaded.name(),
        loaded.world().entity_count()
    );

    Ok(())
}
