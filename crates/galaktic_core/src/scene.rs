//! Scene aggregate: a named world, the unit of save/load.

use crate::ecs::World;

pub struct Scene {
    name: String,
    world: World,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world: World::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scene reader overwrites the name with the one embedded in the
    /// file.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
