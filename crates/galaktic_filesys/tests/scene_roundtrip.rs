// Integration tests for the .gkscene writer/reader pair.
//
// The format is not self-describing, so every reading world replays the
// writer's registration history before loading (same types, same order).

use galaktic_core::ecs::components::{
    ColorComponent, NameComponent, PlayerTag, SpeedComponent, TransformComponent,
};
use galaktic_core::ecs::{spawn_player, World};
use galaktic_core::scene::Scene;
use galaktic_filesys::{
    scene_path, SceneError, SceneReader, SceneWriter, FOOTER_PEEK_LIMIT, SCENE_FOOTER,
};
use std::fs::OpenOptions;
use std::path::Path;

/// Replays the registration history `spawn_player` + `create_entity`
/// produce on the writing side.
fn replay_player_registrations(world: &mut World) {
    world.register::<NameComponent>();
    world.register::<PlayerTag>();
    world.register::<TransformComponent>();
    world.register::<SpeedComponent>();
    world.register::<ColorComponent>();
}

fn entity_name(world: &World, id: u32) -> String {
    world
        .component::<NameComponent>(id)
        .map(|n| n.name().to_owned())
        .unwrap()
}

#[test]
fn end_to_end_single_player() {
    let dir = tempfile::tempdir().unwrap();

    let mut scene = Scene::new("Main");
    let world = scene.world_mut();
    let player = world.create_entity::<PlayerTag>("Player");
    world.add_component(
        player.id(),
        TransformComponent {
            location: galaktic_core::glam::Vec2::ZERO,
            ..Default::default()
        },
    );
    world.add_component(player.id(), SpeedComponent { max_speed: 1000.0 });

    let path = SceneWriter::write_scene(dir.path(), &scene).unwrap();
    assert_eq!(path, scene_path(dir.path(), "Main"));

    // Fresh store/directory/registry with the writer's registrations.
    let mut loaded = Scene::new("");
    let world = loaded.world_mut();
    world.register::<NameComponent>();
    world.register::<PlayerTag>();
    world.register::<TransformComponent>();
    world.register::<SpeedComponent>();

    SceneReader::read_scene(&path, &mut loaded).unwrap();

    assert_eq!(loaded.name(), "Main");
    assert_eq!(loaded.world().entity_count(), 1);

    let entity = loaded.world().entity_by_name("Player").unwrap();
    assert_eq!(entity_name(loaded.world(), entity.id()), "Player");
    assert_eq!(
        loaded
            .world()
            .component::<SpeedComponent>(entity.id())
            .unwrap()
            .max_speed,
        1000.0
    );
    assert!(loaded.world().has_component::<PlayerTag>(entity.id()));
}

#[test]
fn round_trip_preserves_every_component() {
    let dir = tempfile::tempdir().unwrap();

    let mut scene = Scene::new("Arena");
    let a = spawn_player(scene.world_mut(), "Alice");
    let b = spawn_player(scene.world_mut(), "Bob");

    let world = scene.world_mut();
    world
        .component_mut::<TransformComponent>(a.id())
        .unwrap()
        .rotation = 90.0;
    world.component_mut::<SpeedComponent>(b.id()).unwrap().max_speed = 250.0;
    world.component_mut::<ColorComponent>(b.id()).unwrap().color = [1, 2, 3, 4];

    let path = SceneWriter::write_scene(dir.path(), &scene).unwrap();

    let mut loaded = Scene::new("");
    replay_player_registrations(loaded.world_mut());
    SceneReader::read_scene(&path, &mut loaded).unwrap();

    assert_eq!(loaded.world().entity_count(), 2);

    // Compare component for component, matching entities by name rather
    // than relying on any particular order.
    for id in scene.world().entity_ids() {
        let name = entity_name(scene.world(), id);
        let loaded_id = loaded.world().entity_by_name(&name).unwrap().id();

        assert_eq!(
            scene.world().component::<TransformComponent>(id),
            loaded.world().component::<TransformComponent>(loaded_id),
        );
        assert_eq!(
            scene.world().component::<SpeedComponent>(id),
            loaded.world().component::<SpeedComponent>(loaded_id),
        );
        assert_eq!(
            scene.world().component::<ColorComponent>(id),
            loaded.world().component::<ColorComponent>(loaded_id),
        );
        assert!(loaded.world().has_component::<PlayerTag>(loaded_id));
    }
}

#[test]
fn round_trip_keeps_entity_identities() {
    let dir = tempfile::tempdir().unwrap();

    let mut scene = Scene::new("Ids");
    let a = spawn_player(scene.world_mut(), "Alice");
    let b = spawn_player(scene.world_mut(), "Bob");

    let path = SceneWriter::write_scene(dir.path(), &scene).unwrap();

    let mut loaded = Scene::new("");
    replay_player_registrations(loaded.world_mut());
    SceneReader::read_scene(&path, &mut loaded).unwrap();

    assert_eq!(
        loaded.world().entity_by_name("Alice").map(|e| e.id()),
        Some(a.id())
    );
    assert_eq!(
        loaded.world().entity_by_name("Bob").map(|e| e.id()),
        Some(b.id())
    );
}

#[test]
fn version_gate_populates_zero_entities() {
    let dir = tempfile::tempdir().unwrap();

    let mut scene = Scene::new("Versioned");
    spawn_player(scene.world_mut(), "Player");
    let path = SceneWriter::write_scene(dir.path(), &scene).unwrap();

    // The scene format version sits right after the u64 block length.
    let mut bytes = std::fs::read(&path).unwrap();
    bytes[8..12].copy_from_slice(&99u32.to_le_bytes());
    std::fs::write(&path, bytes).unwrap();

    let mut loaded = Scene::new("");
    replay_player_registrations(loaded.world_mut());
    let err = SceneReader::read_scene(&path, &mut loaded).unwrap_err();

    assert!(matches!(
        err,
        SceneError::VersionMismatch {
            found: 99,
            expected: 1
        }
    ));
    assert_eq!(loaded.world().entity_count(), 0);
}

#[test]
fn entity_version_gate_aborts_the_load() {
    let dir = tempfile::tempdir().unwrap();

    let mut scene = Scene::new("Gate");
    spawn_player(scene.world_mut(), "Player");
    let path = SceneWriter::write_scene(dir.path(), &scene).unwrap();

    // The first entity block starts after the scene header (u64 size,
    // u32 version, name string); its version sits after the u64 length.
    let version_offset = 8 + 4 + 8 + "Gate".len() + 8;
    let mut bytes = std::fs::read(&path).unwrap();
    bytes[version_offset..version_offset + 4].copy_from_slice(&77u32.to_le_bytes());
    std::fs::write(&path, bytes).unwrap();

    let mut loaded = Scene::new("");
    replay_player_registrations(loaded.world_mut());
    let err = SceneReader::read_scene(&path, &mut loaded).unwrap_err();

    assert!(matches!(
        err,
        SceneError::EntityVersionMismatch {
            found: 77,
            expected: 1
        }
    ));
}

#[test]
fn oversized_scene_names_are_rejected_at_write() {
    let dir = tempfile::tempdir().unwrap();

    let scene = Scene::new("x".repeat(FOOTER_PEEK_LIMIT as usize + 1));
    let err = SceneWriter::write_scene(dir.path(), &scene).unwrap_err();
    assert!(matches!(err, SceneError::Malformed(_)));

    // Nothing was written, not even a temp file.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[test]
fn truncation_before_footer_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let mut scene = Scene::new("Cut");
    spawn_player(scene.world_mut(), "Player");
    let path = SceneWriter::write_scene(dir.path(), &scene).unwrap();

    // Drop exactly the footer (u64 length prefix + literal bytes).
    let full_len = std::fs::metadata(&path).unwrap().len();
    let footer_len = 8 + SCENE_FOOTER.len() as u64;
    let file = OpenOptions::new().write(true).open(&path).unwrap();
    file.set_len(full_len - footer_len).unwrap();
    drop(file);

    let mut loaded = Scene::new("");
    replay_player_registrations(loaded.world_mut());
    let err = SceneReader::read_scene(&path, &mut loaded).unwrap_err();
    assert!(matches!(err, SceneError::MissingFooter));
}

#[test]
fn missing_file_is_an_io_error() {
    let mut scene = Scene::new("");
    let err = SceneReader::read_scene(Path::new("does-not-exist.gkscene"), &mut scene)
        .unwrap_err();
    assert!(matches!(err, SceneError::Io(_)));
}

#[test]
fn rewriting_a_scene_replaces_the_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut scene = Scene::new("Repeat");
    spawn_player(scene.world_mut(), "Player");
    let first = SceneWriter::write_scene(dir.path(), &scene).unwrap();

    spawn_player(scene.world_mut(), "Second");
    let second = SceneWriter::write_scene(dir.path(), &scene).unwrap();
    assert_eq!(first, second);

    let mut loaded = Scene::new("");
    replay_player_registrations(loaded.world_mut());
    SceneReader::read_scene(&second, &mut loaded).unwrap();
    assert_eq!(loaded.world().entity_count(), 2);

    // No temp file left behind.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("Repeat.gkscene")]);
}
