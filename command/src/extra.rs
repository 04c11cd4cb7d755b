//! Extras record facts derived from a command's execution,
//! so consumers of the capture don't need to recompute them.

use crate::value::GLenum;

/// Kind of an extra. A command carries at most one extra of each kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtraKind {
    /// `Extra::LinkProgram`
    LinkProgram,
    /// `Extra::CompileShader`
    CompileShader,
    /// `Extra::StaticContextState`
    StaticContextState,
    /// `Extra::DynamicContextState`
    DynamicContextState,
}

/// Side-data attached to a command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extra {
    /// Result of `glLinkProgram`.
    LinkProgram(LinkProgramExtra),
    /// Result of `glCompileShader`.
    CompileShader(CompileShaderExtra),
    /// Context properties fixed at creation.
    StaticContextState(StaticContextState),
    /// Context properties that may change between frames.
    DynamicContextState(DynamicContextState),
}

impl Extra {
    /// Get kind of the extra.
    pub fn kind(&self) -> ExtraKind {
        match self {
            Extra::LinkProgram(_) => ExtraKind::LinkProgram,
            Extra::CompileShader(_) => ExtraKind::CompileShader,
            Extra::StaticContextState(_) => ExtraKind::StaticContextState,
            Extra::DynamicContextState(_) => ExtraKind::DynamicContextState,
        }
    }
}

/// Active uniform or program input reported by reflection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgramResource {
    /// GLSL type of the resource.
    pub ty: GLenum,
    /// Name as it appears in the shader source.
    pub name: String,
    /// Number of array elements, `1` for non-arrays.
    pub array_size: u32,
    /// Location of each array element.
    pub locations: Vec<i32>,
}

impl ProgramResource {
    /// Non-array resource at `location`.
    pub fn new(ty: GLenum, name: impl Into<String>, location: i32) -> Self {
        ProgramResource {
            ty,
            name: name.into(),
            array_size: 1,
            locations: vec![location],
        }
    }
}

/// Resources of a linked program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveProgramResources {
    /// Uniforms of the default uniform block.
    pub default_uniform_block: Vec<ProgramResource>,
    /// Vertex shader inputs.
    pub program_inputs: Vec<ProgramResource>,
}

/// Link status and reflection of a program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkProgramExtra {
    /// `GL_LINK_STATUS` after linking.
    pub link_status: bool,
    /// Program info log.
    pub info_log: String,
    /// Active resources, meaningful only when linking succeeded.
    pub active_resources: ActiveProgramResources,
}

/// Compile status of a shader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompileShaderExtra {
    /// `GL_COMPILE_STATUS` after compilation.
    pub compile_status: bool,
    /// Shader info log.
    pub info_log: String,
}

/// Backbuffer properties fixed when the context was created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticContextState {
    /// Width of the backbuffer.
    pub backbuffer_width: u32,
    /// Height of the backbuffer.
    pub backbuffer_height: u32,
    /// Sized color format.
    pub color_format: GLenum,
    /// Sized depth format.
    pub depth_format: GLenum,
    /// Sized stencil format.
    pub stencil_format: GLenum,
}

/// Backbuffer properties observed when the context was made current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicContextState {
    /// Width of the backbuffer.
    pub backbuffer_width: u32,
    /// Height of the backbuffer.
    pub backbuffer_height: u32,
    /// Whether swapping preserves the backbuffer content.
    pub preserve_buffers_on_swap: bool,
}

macro_rules! impl_into_extra {
    ($($variant:ident => $ty:ident,)*) => {
        $(
            impl From<$ty> for Extra {
                fn from(extra: $ty) -> Extra {
                    Extra::$variant(extra)
                }
            }
        )*
    };
}

impl_into_extra! {
    LinkProgram => LinkProgramExtra,
    CompileShader => CompileShaderExtra,
    StaticContextState => StaticContextState,
    DynamicContextState => DynamicContextState,
}
