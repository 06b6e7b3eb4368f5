// components.rs - Built-in component set
//
// Fixed-layout components are #[repr(C)] Pod structs so the registry can
// fall back to raw byte-copy semantics. Flag fields are u32 words (0/1)
// to keep the layouts padding-free and Pod-derivable.

use crate::define_component;
use crate::ecs::{ComponentCodec, EntityId, INVALID_ENTITY};
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::io::{self, Read, Write};

/// RGBA color, one byte per channel.
pub type Color = [u8; 4];

pub const GREY_COLOR: Color = [128, 128, 128, 255];
pub const WHITE_COLOR: Color = [255, 255, 255, 255];

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TransformComponent {
    pub location: Vec2,
    pub size: Vec2,
    pub rotation: f32,
}
define_component!(TransformComponent, "Transform", fixed);

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            location: Vec2::ZERO,
            size: Vec2::new(50.0, 50.0),
            rotation: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct HealthComponent {
    pub current_health: f32,
    pub max_health: f32,
}
define_component!(HealthComponent, "Health", fixed);

impl Default for HealthComponent {
    fn default() -> Self {
        Self {
            current_health: 1.0,
            max_health: 1.0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct JumpComponent {
    pub jump_height: f32,
}
define_component!(JumpComponent, "Jump", fixed);

impl Default for JumpComponent {
    fn default() -> Self {
        Self { jump_height: 100.0 }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RigidBodyComponent {
    pub velocity: Vec2,
    pub force: Vec2,
    pub mass: f32,
    /// 0 or 1; word-sized so the struct stays Pod.
    pub use_gravity: u32,
}
define_component!(RigidBodyComponent, "RigidBody", fixed);

impl Default for RigidBodyComponent {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: 1.0,
            use_gravity: 1,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CollisionComponent {
    pub collision_box: Vec2,
    /// 0 or 1; word-sized so the struct stays Pod.
    pub collidable: u32,
}
define_component!(CollisionComponent, "Collision", fixed);

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SpeedComponent {
    pub max_speed: f32,
}
define_component!(SpeedComponent, "Speed", fixed);

impl Default for SpeedComponent {
    fn default() -> Self {
        Self { max_speed: 1000.0 }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorComponent {
    pub color: Color,
}
define_component!(ColorComponent, "Color", fixed);

impl Default for ColorComponent {
    fn default() -> Self {
        Self { color: GREY_COLOR }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LightComponent {
    pub location: Vec2,
    pub watts: f32,
    /// 1 unit = 32px.
    pub radius: f32,
    pub color: Color,
}
define_component!(LightComponent, "Light", fixed);

impl Default for LightComponent {
    fn default() -> Self {
        Self {
            location: Vec2::ZERO,
            watts: 100.0,
            radius: 1.0,
            color: WHITE_COLOR,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraComponent {
    pub location: Vec2,
    pub entity_to_follow: EntityId,
    pub zoom: f32,
    pub smoothing: f32,
    /// 0 or 1; word-sized so the struct stays Pod.
    pub is_active: u32,
}
define_component!(CameraComponent, "Camera", fixed);

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            location: Vec2::ZERO,
            entity_to_follow: INVALID_ENTITY,
            zoom: 1.0,
            smoothing: 3.0,
            is_active: 0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TextureComponent {
    pub id: u32,
}
define_component!(TextureComponent, "Texture", fixed);

/// Directory-unique entity name. Variable length, so it carries its own
/// wire format instead of raw byte copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameComponent {
    name: String,
}
define_component!(NameComponent, "Name", custom);

impl NameComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl ComponentCodec for NameComponent {
    fn wire_size(&self) -> usize {
        std::mem::size_of::<u32>() + self.name.len()
    }

    fn write(&self, w: &mut dyn Write) -> io::Result<()> {
        w.write_all(&(self.name.len() as u32).to_le_bytes())?;
        w.write_all(self.name.as_bytes())
    }

    fn read(r: &mut dyn Read) -> io::Result<Self> {
        let mut len = [0u8; 4];
        r.read_exact(&mut len)?;
        let mut bytes = vec![0u8; u32::from_le_bytes(len) as usize];
        r.read_exact(&mut bytes)?;
        let name = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self { name })
    }
}

// Archetype tags. Presence alone is the signal; they never carry a payload.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerTag;
define_component!(PlayerTag, "PlayerTag", tag);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticObjectTag;
define_component!(StaticObjectTag, "StaticObjectTag", tag);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhysicsObjectTag;
define_component!(PhysicsObjectTag, "PhysicsObjectTag", tag);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightTag;
define_component!(LightTag, "LightTag", tag);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CameraTag;
define_component!(CameraTag, "CameraTag", tag);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyTag;
define_component!(EnemyTag, "EnemyTag", tag);
