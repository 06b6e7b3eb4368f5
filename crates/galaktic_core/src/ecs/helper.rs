// helper.rs - Archetype construction helpers
//
// Thin factories over the World for the editor and sandbox code: each one
// creates an entity with the default component set for its archetype.

use crate::ecs::components::{
    CameraComponent, CameraTag, ColorComponent, LightComponent, LightTag, PhysicsObjectTag,
    PlayerTag, SpeedComponent, StaticObjectTag, TransformComponent,
};
use crate::ecs::{Component, Entity, World};

pub fn spawn_player(world: &mut World, name: &str) -> Entity {
    let entity = world.create_entity::<PlayerTag>(name);
    world.add_component(entity.id(), TransformComponent::default());
    world.add_component(entity.id(), SpeedComponent::default());
    world.add_component(entity.id(), ColorComponent::default());
    entity
}

pub fn spawn_static_object(world: &mut World, name: &str) -> Entity {
    let entity = world.create_entity::<StaticObjectTag>(name);
    world.add_component(entity.id(), TransformComponent::default());
    world.add_component(entity.id(), ColorComponent::default());
    entity
}

/// Physics objects start with simple collision properties.
pub fn spawn_physics_object(world: &mut World, name: &str) -> Entity {
    let entity = world.create_entity::<PhysicsObjectTag>(name);
    world.add_component(entity.id(), TransformComponent::default());
    world.add_component(entity.id(), ColorComponent::default());
    entity
}

pub fn spawn_light(world: &mut World, name: &str) -> Entity {
    let entity = world.create_entity::<LightTag>(name);
    world.add_component(entity.id(), LightComponent::default());
    entity
}

pub fn spawn_camera(world: &mut World, name: &str) -> Entity {
    let entity = world.create_entity::<CameraTag>(name);
    world.add_component(entity.id(), CameraComponent::default());
    entity
}

/// Overwrite a component on the named entity, adding it when absent.
/// The editor bridge mutates entities through this.
pub fn modify_component<C: Component>(world: &mut World, name: &str, value: C) {
    let Some(entity) = world.entity_by_name(name) else {
        return;
    };
    if !world.has_component::<C>(entity.id()) {
        tracing::info!("component '{}' added to '{name}'", C::NAME);
    }
    world.add_component(entity.id(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::NameComponent;

    #[test]
    fn player_gets_the_default_set() {
        let mut world = World::new();
        let e = spawn_player(&mut world, "Player");
        assert!(world.has_component::<NameComponent>(e.id()));
        assert!(world.has_component::<PlayerTag>(e.id()));
        assert!(world.has_component::<TransformComponent>(e.id()));
        assert!(world.has_component::<SpeedComponent>(e.id()));
        assert!(world.has_component::<ColorComponent>(e.id()));
    }

    #[test]
    fn light_and_camera_get_their_components() {
        let mut world = World::new();
        let light = spawn_light(&mut world, "Sun");
        let camera = spawn_camera(&mut world, "Main Camera");
        assert!(world.has_component::<LightComponent>(light.id()));
        assert!(world.has_component::<LightTag>(light.id()));
        assert!(world.has_component::<CameraComponent>(camera.id()));
        assert!(world.has_component::<CameraTag>(camera.id()));
    }

    #[test]
    fn modify_component_overwrites_or_adds() {
        let mut world = World::new();
        let e = spawn_static_object(&mut world, "Crate");

        let mut transform = TransformComponent::default();
        transform.rotation = 45.0;
        modify_component(&mut world, "Crate", transform);
        assert_eq!(
            world.component::<TransformComponent>(e.id()).unwrap().rotation,
            45.0
        );

        modify_component(&mut world, "Crate", SpeedComponent { max_speed: 5.0 });
        assert!(world.has_component::<SpeedComponent>(e.id()));
    }
}
