//! Framebuffer attachment and image aspect classification.
//!
//! Both enumerations are closed. Raw values received from outside the
//! capture that do not name a declared variant are kept as `Unknown`,
//! for which every predicate is `false`.

use std::fmt;

/// Attachment point of a framebuffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FramebufferAttachment {
    /// Depth attachment.
    Depth,
    /// Stencil attachment.
    Stencil,
    /// First color attachment.
    Color0,
    /// Second color attachment.
    Color1,
    /// Third color attachment.
    Color2,
    /// Fourth color attachment.
    Color3,
    /// Raw value that names no declared attachment.
    Unknown(u32),
}

impl FramebufferAttachment {
    /// All declared attachments.
    pub const ALL: [FramebufferAttachment; 6] = [
        FramebufferAttachment::Depth,
        FramebufferAttachment::Stencil,
        FramebufferAttachment::Color0,
        FramebufferAttachment::Color1,
        FramebufferAttachment::Color2,
        FramebufferAttachment::Color3,
    ];

    /// Decode raw attachment value.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => FramebufferAttachment::Depth,
            1 => FramebufferAttachment::Stencil,
            2 => FramebufferAttachment::Color0,
            3 => FramebufferAttachment::Color1,
            4 => FramebufferAttachment::Color2,
            5 => FramebufferAttachment::Color3,
            raw => FramebufferAttachment::Unknown(raw),
        }
    }

    /// Raw attachment value.
    pub fn raw(self) -> u32 {
        match self {
            FramebufferAttachment::Depth => 0,
            FramebufferAttachment::Stencil => 1,
            FramebufferAttachment::Color0 => 2,
            FramebufferAttachment::Color1 => 3,
            FramebufferAttachment::Color2 => 4,
            FramebufferAttachment::Color3 => 5,
            FramebufferAttachment::Unknown(raw) => raw,
        }
    }

    /// Returns true if this is a color attachment.
    pub fn is_color(self) -> bool {
        match self {
            FramebufferAttachment::Color0
            | FramebufferAttachment::Color1
            | FramebufferAttachment::Color2
            | FramebufferAttachment::Color3 => true,
            _ => false,
        }
    }

    /// Returns true if this is the depth attachment.
    pub fn is_depth(self) -> bool {
        self == FramebufferAttachment::Depth
    }

    /// Returns true if this is the stencil attachment.
    pub fn is_stencil(self) -> bool {
        self == FramebufferAttachment::Stencil
    }

    /// Aspect of the image bound to this attachment.
    pub fn aspect(self) -> Option<AspectType> {
        if self.is_color() {
            Some(AspectType::Color)
        } else if self.is_depth() {
            Some(AspectType::Depth)
        } else if self.is_stencil() {
            Some(AspectType::Stencil)
        } else {
            None
        }
    }
}

/// Aspect of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectType {
    /// Color aspect.
    Color,
    /// Depth aspect.
    Depth,
    /// Stencil aspect.
    Stencil,
    /// Raw value that names no declared aspect.
    Unknown(u32),
}

impl AspectType {
    /// All declared aspects.
    pub const ALL: [AspectType; 3] = [AspectType::Color, AspectType::Depth, AspectType::Stencil];

    /// Decode raw aspect value.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => AspectType::Color,
            1 => AspectType::Depth,
            2 => AspectType::Stencil,
            raw => AspectType::Unknown(raw),
        }
    }

    /// Raw aspect value.
    pub fn raw(self) -> u32 {
        match self {
            AspectType::Color => 0,
            AspectType::Depth => 1,
            AspectType::Stencil => 2,
            AspectType::Unknown(raw) => raw,
        }
    }

    /// Returns true for the color aspect.
    pub fn is_color(self) -> bool {
        self == AspectType::Color
    }

    /// Returns true for the depth aspect.
    pub fn is_depth(self) -> bool {
        self == AspectType::Depth
    }

    /// Returns true for the stencil aspect.
    pub fn is_stencil(self) -> bool {
        self == AspectType::Stencil
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectType::Color => fmt.write_str("Color"),
            AspectType::Depth => fmt.write_str("Depth"),
            AspectType::Stencil => fmt.write_str("Stencil"),
            AspectType::Unknown(raw) => write!(fmt, "Unknown AspectType {}", raw),
        }
    }
}
