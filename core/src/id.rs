//! GL object names issued during one capture.

use {crate::casts::Element, std::collections::BTreeMap};

/// Kind of GL object name issued by `IdAllocator`.
///
/// Every kind has its own counter, so names of different kinds never collide
/// even when their raw values are equal.
pub trait ResourceKind: Copy + Ord + std::fmt::Debug {
    /// Unique name of the kind. Used as the counter key.
    const NAME: &'static str;

    /// First raw value issued for the kind.
    /// GL reserves name `0`.
    const BASELINE: u32 = 1;

    /// Wrap raw name value.
    fn from_raw(raw: u32) -> Self;

    /// Get raw name value.
    fn raw(self) -> u32;
}

macro_rules! resource_kind {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl ResourceKind for $name {
            const NAME: &'static str = $kind;

            fn from_raw(raw: u32) -> Self {
                $name(raw)
            }

            fn raw(self) -> u32 {
                self.0
            }
        }

        impl Element for $name {
            const SIZE: usize = 4;

            fn write_le(self, out: &mut Vec<u8>) {
                self.0.write_le(out)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(fmt, "{}{}", $kind, self.0)
            }
        }
    };
}

resource_kind!(
    /// Name of a shader object.
    ShaderId,
    "shader"
);

resource_kind!(
    /// Name of a program object.
    ProgramId,
    "program"
);

resource_kind!(
    /// Name of a texture object.
    TextureId,
    "texture"
);

/// Location of a vertex attribute, chosen by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeLocation(pub u32);

/// Location of a uniform, chosen by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformLocation(pub i32);

/// Issues GL object names for one capture session.
///
/// Identical sequences of calls yield identical names.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: BTreeMap<&'static str, u32>,
}

impl IdAllocator {
    /// Create allocator with every counter at its kind's baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate next name of kind `K`.
    ///
    /// # Panics
    ///
    /// Panics if the name space of the kind is exhausted.
    /// The capture can't continue in that case.
    pub fn allocate<K: ResourceKind>(&mut self) -> K {
        let next = self.next.entry(K::NAME).or_insert(K::BASELINE);
        let raw = *next;
        *next = raw
            .checked_add(1)
            .unwrap_or_else(|| panic!("Names of kind '{}' are exhausted", K::NAME));
        log::trace!("Allocated {} {}", K::NAME, raw);
        K::from_raw(raw)
    }

    /// Get the name the next `allocate::<K>()` call returns.
    pub fn peek<K: ResourceKind>(&self) -> K {
        K::from_raw(self.next.get(K::NAME).cloned().unwrap_or(K::BASELINE))
    }

    /// Number of names of kind `K` issued so far.
    pub fn allocated<K: ResourceKind>(&self) -> u32 {
        self.peek::<K>().raw() - K::BASELINE
    }
}
