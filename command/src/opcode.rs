use std::fmt;

/// API an opcode belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Api {
    /// EGL window system binding.
    Egl,
    /// OpenGL ES.
    Gles,
}

macro_rules! opcodes {
    ($($(#[$meta:meta])* $variant:ident = $api:ident $name:literal [$($param:literal),*],)*) => {
        /// Identity of a captured API function.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Opcode {
            $($(#[$meta])* $variant,)*
        }

        impl Opcode {
            /// All known opcodes.
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant,)*];

            /// Name of the API function.
            pub fn name(self) -> &'static str {
                match self {
                    $(Opcode::$variant => $name,)*
                }
            }

            /// API the function belongs to.
            pub fn api(self) -> Api {
                match self {
                    $(Opcode::$variant => Api::$api,)*
                }
            }

            /// Names of the function parameters, in argument order.
            /// Output values are recorded as trailing `result` argument.
            pub fn parameters(self) -> &'static [&'static str] {
                match self {
                    $(Opcode::$variant => &[$($param),*],)*
                }
            }
        }
    };
}

opcodes! {
    /// `eglCreateContext`
    EglCreateContext = Egl "eglCreateContext" ["display", "config", "share_context", "attrib_list", "result"],
    /// `eglMakeCurrent`
    EglMakeCurrent = Egl "eglMakeCurrent" ["display", "draw", "read", "context", "result"],
    /// `eglSwapBuffers`
    EglSwapBuffers = Egl "eglSwapBuffers" ["display", "surface", "result"],
    /// `glActiveTexture`
    GlActiveTexture = Gles "glActiveTexture" ["unit"],
    /// `glAttachShader`
    GlAttachShader = Gles "glAttachShader" ["program", "shader"],
    /// `glBindTexture`
    GlBindTexture = Gles "glBindTexture" ["target", "texture"],
    /// `glClear`
    GlClear = Gles "glClear" ["mask"],
    /// `glClearColor`
    GlClearColor = Gles "glClearColor" ["r", "g", "b", "a"],
    /// `glCompileShader`
    GlCompileShader = Gles "glCompileShader" ["shader"],
    /// `glCreateProgram`
    GlCreateProgram = Gles "glCreateProgram" ["result"],
    /// `glCreateShader`
    GlCreateShader = Gles "glCreateShader" ["type", "result"],
    /// `glDrawElements`
    GlDrawElements = Gles "glDrawElements" ["draw_mode", "indices_count", "indices_type", "indices"],
    /// `glEnable`
    GlEnable = Gles "glEnable" ["capability"],
    /// `glEnableVertexAttribArray`
    GlEnableVertexAttribArray = Gles "glEnableVertexAttribArray" ["location"],
    /// `glGenTextures`
    GlGenTextures = Gles "glGenTextures" ["count", "textures"],
    /// `glGetAttribLocation`
    GlGetAttribLocation = Gles "glGetAttribLocation" ["program", "name", "result"],
    /// `glGetUniformLocation`
    GlGetUniformLocation = Gles "glGetUniformLocation" ["program", "name", "result"],
    /// `glLinkProgram`
    GlLinkProgram = Gles "glLinkProgram" ["program"],
    /// `glShaderSource`
    GlShaderSource = Gles "glShaderSource" ["shader", "count", "source", "length"],
    /// `glTexImage2D`
    GlTexImage2D = Gles "glTexImage2D" ["target", "level", "internal_format", "width", "height", "border", "format", "type", "data"],
    /// `glTexParameteri`
    GlTexParameteri = Gles "glTexParameteri" ["target", "parameter", "value"],
    /// `glUniform1i`
    GlUniform1i = Gles "glUniform1i" ["location", "value"],
    /// `glUseProgram`
    GlUseProgram = Gles "glUseProgram" ["program"],
    /// `glVertexAttribPointer`
    GlVertexAttribPointer = Gles "glVertexAttribPointer" ["location", "size", "type", "normalized", "stride", "data"],
}

impl fmt::Display for Opcode {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}
