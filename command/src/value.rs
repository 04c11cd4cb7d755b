use {
    replica_core::{AttributeLocation, ProgramId, ShaderId, TextureId, UniformLocation},
    replica_memory::Pointer,
    std::fmt,
};

/// GL enumeration value.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GLenum(pub u32);

macro_rules! gl_enums {
    ($($name:ident = $value:literal,)*) => {
        #[allow(missing_docs)]
        impl GLenum {
            $(pub const $name: GLenum = GLenum($value);)*

            /// Symbolic name of the value, if it is known.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(stringify!($name)),)*
                    _ => None,
                }
            }
        }
    };
}

gl_enums! {
    GL_TRIANGLES = 0x0004,
    GL_DEPTH_TEST = 0x0B71,
    GL_TEXTURE_2D = 0x0DE1,
    GL_UNSIGNED_BYTE = 0x1401,
    GL_UNSIGNED_SHORT = 0x1403,
    GL_FLOAT = 0x1406,
    GL_RGB = 0x1907,
    GL_RGBA = 0x1908,
    GL_NEAREST = 0x2600,
    GL_LINEAR = 0x2601,
    GL_TEXTURE_MAG_FILTER = 0x2800,
    GL_TEXTURE_MIN_FILTER = 0x2801,
    GL_RGBA8 = 0x8058,
    GL_DEPTH_COMPONENT16 = 0x81A5,
    GL_TEXTURE0 = 0x84C0,
    GL_DEPTH24_STENCIL8 = 0x88F0,
    GL_FRAGMENT_SHADER = 0x8B30,
    GL_VERTEX_SHADER = 0x8B31,
    GL_FLOAT_VEC3 = 0x8B51,
    GL_SAMPLER_2D = 0x8B5E,
    GL_RGB565 = 0x8D62,
    GL_STENCIL_INDEX8 = 0x8D48,
}

impl fmt::Debug for GLenum {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

impl fmt::Display for GLenum {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => fmt.write_str(name),
            None => write!(fmt, "GLenum({:#06x})", self.0),
        }
    }
}

/// GL bitmask value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GLbitfield(pub u32);

#[allow(missing_docs)]
impl GLbitfield {
    pub const GL_DEPTH_BUFFER_BIT: GLbitfield = GLbitfield(0x0100);
    pub const GL_STENCIL_BUFFER_BIT: GLbitfield = GLbitfield(0x0400);
    pub const GL_COLOR_BUFFER_BIT: GLbitfield = GLbitfield(0x4000);
}

impl std::ops::BitOr for GLbitfield {
    type Output = GLbitfield;

    fn bitor(self, rhs: GLbitfield) -> GLbitfield {
        GLbitfield(self.0 | rhs.0)
    }
}

/// Argument value of a captured command.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Signed integer, also used for uniform locations.
    Int(i32),
    /// Unsigned integer, also used for attribute locations.
    Uint(u32),
    /// Float value.
    Float(f32),
    /// Enumeration value.
    Enum(GLenum),
    /// Bitmask value.
    Bitfield(GLbitfield),
    /// Name of a GL object.
    Name(u32),
    /// Pointer into capture memory.
    Pointer(Pointer),
}

impl Value {
    /// Get pointer if this value is one.
    pub fn as_pointer(&self) -> Option<Pointer> {
        match *self {
            Value::Pointer(ptr) => Some(ptr),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(fmt, "{}", value),
            Value::Int(value) => write!(fmt, "{}", value),
            Value::Uint(value) => write!(fmt, "{}", value),
            Value::Float(value) => write!(fmt, "{:?}", value),
            Value::Enum(value) => write!(fmt, "{}", value),
            Value::Bitfield(value) => write!(fmt, "{:#x}", value.0),
            Value::Name(value) => write!(fmt, "{}", value),
            Value::Pointer(value) => write!(fmt, "{}", value),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => |$v:ident| $value:expr,)*) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Value {
                    $value
                }
            }
        )*
    };
}

impl_from! {
    bool => |v| Value::Bool(v),
    i32 => |v| Value::Int(v),
    u32 => |v| Value::Uint(v),
    f32 => |v| Value::Float(v),
    GLenum => |v| Value::Enum(v),
    GLbitfield => |v| Value::Bitfield(v),
    Pointer => |v| Value::Pointer(v),
    ShaderId => |v| Value::Name(v.0),
    ProgramId => |v| Value::Name(v.0),
    TextureId => |v| Value::Name(v.0),
    AttributeLocation => |v| Value::Uint(v.0),
    UniformLocation => |v| Value::Int(v.0),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_names() {
        assert_eq!(GLenum::GL_TEXTURE_2D.to_string(), "GL_TEXTURE_2D");
        assert_eq!(GLenum(0x1234).to_string(), "GLenum(0x1234)");
        assert_eq!(GLenum(0x8B31), GLenum::GL_VERTEX_SHADER);
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(ShaderId(3)), Value::Name(3));
        assert_eq!(Value::from(UniformLocation(-1)), Value::Int(-1));
        assert_eq!(Value::from(Pointer(0x10)).as_pointer(), Some(Pointer(0x10)));
        assert_eq!(Value::from(2u32).as_pointer(), None);
        let mask = GLbitfield::GL_COLOR_BUFFER_BIT | GLbitfield::GL_DEPTH_BUFFER_BIT;
        assert_eq!(Value::from(mask).to_string(), "0x4100");
    }
}
