// component.rs - Component traits and runtime type descriptors
//
// Components come in three shapes: fixed-layout (raw byte copy), custom
// (type-defined wire format) and tags (presence only, zero payload).
// The descriptor erases the concrete type behind function pointers so the
// store and the scene serializer can handle all three uniformly.

use bytemuck::Pod;
use std::any::{Any, TypeId};
use std::io::{self, Read, Write};

/// Boxed, type-erased component value as held by the store.
pub type ComponentValue = Box<dyn Any + Send + Sync>;

/// Trait for all component types.
///
/// Implementations are normally generated through [`define_component!`],
/// which picks one of the three [`ComponentTypeInfo`] constructors.
pub trait Component: Any + Send + Sync + Sized + 'static {
    /// Human-readable name for logging and debugging.
    const NAME: &'static str;

    /// Whether this type is a tag (presence only, no payload).
    const IS_TAG: bool = false;

    /// Build the runtime descriptor for this type.
    fn type_info() -> ComponentTypeInfo;
}

/// Wire format for components that are not plain fixed-layout data.
///
/// A non-fixed-layout component without a codec cannot be registered at
/// all; the bound on [`ComponentTypeInfo::custom`] enforces the contract
/// at compile time.
pub trait ComponentCodec: Sized {
    /// Number of bytes [`ComponentCodec::write`] will produce for this value.
    fn wire_size(&self) -> usize;

    fn write(&self, w: &mut dyn Write) -> io::Result<()>;

    fn read(r: &mut dyn Read) -> io::Result<Self>;
}

/// Runtime descriptor for one component type.
///
/// Describes how to size, write and read values of the type without
/// knowing it at compile time. `size` is the fixed byte size, with 0
/// meaning "ask `size_fn` per value".
#[derive(Clone, Copy)]
pub struct ComponentTypeInfo {
    pub type_id: TypeId,
    pub name: &'static str,
    pub size: usize,
    pub is_tag: bool,
    pub is_pod: bool,
    pub size_fn: fn(&dyn Any) -> usize,
    pub serialize: fn(&dyn Any, &mut dyn Write) -> io::Result<()>,
    pub deserialize: fn(&mut dyn Read) -> io::Result<ComponentValue>,
}

impl ComponentTypeInfo {
    /// Descriptor for a tag type: zero size, no payload on the wire.
    pub fn tag<T: Component + Default>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::NAME,
            size: 0,
            is_tag: true,
            is_pod: false,
            size_fn: |_| 0,
            serialize: |_, _| Ok(()),
            deserialize: |_| Ok(Box::new(T::default())),
        }
    }

    /// Descriptor for a plain fixed-layout type: raw byte copy semantics
    /// derived from the static size.
    pub fn fixed<T: Component + Pod>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::NAME,
            size: std::mem::size_of::<T>(),
            is_tag: false,
            is_pod: true,
            size_fn: |_| std::mem::size_of::<T>(),
            serialize: |value, w| {
                let value = value
                    .downcast_ref::<T>()
                    .expect("component value does not match its descriptor");
                w.write_all(bytemuck::bytes_of(value))
            },
            deserialize: |r| {
                let mut value = T::zeroed();
                r.read_exact(bytemuck::bytes_of_mut(&mut value))?;
                Ok(Box::new(value))
            },
        }
    }

    /// Descriptor for a type with a custom wire format.
    pub fn custom<T: Component + ComponentCodec>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::NAME,
            size: 0,
            is_tag: false,
            is_pod: false,
            size_fn: |value| {
                value
                    .downcast_ref::<T>()
                    .expect("component value does not match its descriptor")
                    .wire_size()
            },
            serialize: |value, w| {
                value
                    .downcast_ref::<T>()
                    .expect("component value does not match its descriptor")
                    .write(w)
            },
            deserialize: |r| Ok(Box::new(T::read(r)?)),
        }
    }

    /// Byte size of a concrete value of this type.
    pub fn size_of_value(&self, value: &dyn Any) -> usize {
        (self.size_fn)(value)
    }
}

impl std::fmt::Debug for ComponentTypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentTypeInfo")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("is_tag", &self.is_tag)
            .field("is_pod", &self.is_pod)
            .finish()
    }
}

/// Implement [`Component`] for a type.
///
/// The third argument selects the descriptor shape:
/// `fixed` (raw byte copy, requires `Pod`), `custom` (requires a
/// [`ComponentCodec`] impl) or `tag` (requires `Default`).
///
/// # Example
/// ```ignore
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Speed { max_speed: f32 }
///
/// define_component!(Speed, "Speed", fixed);
/// ```
#[macro_export]
macro_rules! define_component {
    ($ty:ty, $name:expr, fixed) => {
        impl $crate::ecs::Component for $ty {
            const NAME: &'static str = $name;

            fn type_info() -> $crate::ecs::ComponentTypeInfo {
                $crate::ecs::ComponentTypeInfo::fixed::<$ty>()
            }
        }
    };
    ($ty:ty, $name:expr, custom) => {
        impl $crate::ecs::Component for $ty {
            const NAME: &'static str = $name;

            fn type_info() -> $crate::ecs::ComponentTypeInfo {
                $crate::ecs::ComponentTypeInfo::custom::<$ty>()
            }
        }
    };
    ($ty:ty, $name:expr, tag) => {
        impl $crate::ecs::Component for $ty {
            const NAME: &'static str = $name;
            const IS_TAG: bool = true;

            fn type_info() -> $crate::ecs::ComponentTypeInfo {
                $crate::ecs::ComponentTypeInfo::tag::<$ty>()
            }
        }
    };
}
