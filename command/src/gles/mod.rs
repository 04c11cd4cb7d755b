//! Constructors of GLES and EGL commands.
//!
//! Each constructor only records its arguments. Memory observations and
//! extras are declared by the caller, who knows which staged memory
//! the call touches.

use {
    crate::{
        command::Command,
        opcode::Opcode,
        value::{GLbitfield, GLenum, Value},
    },
    replica_core::{AttributeLocation, ProgramId, ShaderId, TextureId, UniformLocation},
    replica_memory::Pointer,
};

/// Creates commands issued on one thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandBuilder {
    /// Thread the commands are issued on.
    pub thread: u64,
}

impl CommandBuilder {
    /// Create builder for commands issued on `thread`.
    pub fn new(thread: u64) -> Self {
        CommandBuilder { thread }
    }

    fn command<I>(&self, opcode: Opcode, args: I) -> Command
    where
        I: IntoIterator<Item = Value>,
    {
        Command::new(opcode, self.thread, args)
    }

    /// `eglCreateContext`
    pub fn egl_create_context(
        &self,
        display: Pointer,
        config: Pointer,
        share_context: Pointer,
        attrib_list: Pointer,
        result: Pointer,
    ) -> Command {
        self.command(
            Opcode::EglCreateContext,
            vec![
                display.into(),
                config.into(),
                share_context.into(),
                attrib_list.into(),
                result.into(),
            ],
        )
    }

    /// `eglMakeCurrent`
    pub fn egl_make_current(
        &self,
        display: Pointer,
        draw: Pointer,
        read: Pointer,
        context: Pointer,
        result: bool,
    ) -> Command {
        self.command(
            Opcode::EglMakeCurrent,
            vec![
                display.into(),
                draw.into(),
                read.into(),
                context.into(),
                result.into(),
            ],
        )
    }

    /// `eglSwapBuffers`
    pub fn egl_swap_buffers(&self, display: Pointer, surface: Pointer, result: bool) -> Command {
        self.command(
            Opcode::EglSwapBuffers,
            vec![display.into(), surface.into(), result.into()],
        )
    }

    /// `glActiveTexture`
    pub fn gl_active_texture(&self, unit: GLenum) -> Command {
        self.command(Opcode::GlActiveTexture, vec![unit.into()])
    }

    /// `glAttachShader`
    pub fn gl_attach_shader(&self, program: ProgramId, shader: ShaderId) -> Command {
        self.command(Opcode::GlAttachShader, vec![program.into(), shader.into()])
    }

    /// `glBindTexture`
    pub fn gl_bind_texture(&self, target: GLenum, texture: TextureId) -> Command {
        self.command(Opcode::GlBindTexture, vec![target.into(), texture.into()])
    }

    /// `glClear`
    pub fn gl_clear(&self, mask: GLbitfield) -> Command {
        self.command(Opcode::GlClear, vec![mask.into()])
    }

    /// `glClearColor`
    pub fn gl_clear_color(&self, r: f32, g: f32, b: f32, a: f32) -> Command {
        self.command(
            Opcode::GlClearColor,
            vec![r.into(), g.into(), b.into(), a.into()],
        )
    }

    /// `glCompileShader`
    pub fn gl_compile_shader(&self, shader: ShaderId) -> Command {
        self.command(Opcode::GlCompileShader, vec![shader.into()])
    }

    /// `glCreateProgram` returning `result`.
    pub fn gl_create_program(&self, result: ProgramId) -> Command {
        self.command(Opcode::GlCreateProgram, vec![result.into()])
    }

    /// `glCreateShader` returning `result`.
    pub fn gl_create_shader(&self, ty: GLenum, result: ShaderId) -> Command {
        self.command(Opcode::GlCreateShader, vec![ty.into(), result.into()])
    }

    /// `glDrawElements`
    pub fn gl_draw_elements(
        &self,
        draw_mode: GLenum,
        indices_count: i32,
        indices_type: GLenum,
        indices: Pointer,
    ) -> Command {
        self.command(
            Opcode::GlDrawElements,
            vec![
                draw_mode.into(),
                indices_count.into(),
                indices_type.into(),
                indices.into(),
            ],
        )
    }

    /// `glEnable`
    pub fn gl_enable(&self, capability: GLenum) -> Command {
        self.command(Opcode::GlEnable, vec![capability.into()])
    }

    /// `glEnableVertexAttribArray`
    pub fn gl_enable_vertex_attrib_array(&self, location: AttributeLocation) -> Command {
        self.command(Opcode::GlEnableVertexAttribArray, vec![location.into()])
    }

    /// `glGenTextures` writing `count` names to `textures`.
    pub fn gl_gen_textures(&self, count: i32, textures: Pointer) -> Command {
        self.command(Opcode::GlGenTextures, vec![count.into(), textures.into()])
    }

    /// `glGetAttribLocation` returning `result`.
    pub fn gl_get_attrib_location(
        &self,
        program: ProgramId,
        name: Pointer,
        result: AttributeLocation,
    ) -> Command {
        self.command(
            Opcode::GlGetAttribLocation,
            vec![program.into(), name.into(), result.into()],
        )
    }

    /// `glGetUniformLocation` returning `result`.
    pub fn gl_get_uniform_location(
        &self,
        program: ProgramId,
        name: Pointer,
        result: UniformLocation,
    ) -> Command {
        self.command(
            Opcode::GlGetUniformLocation,
            vec![program.into(), name.into(), result.into()],
        )
    }

    /// `glLinkProgram`
    pub fn gl_link_program(&self, program: ProgramId) -> Command {
        self.command(Opcode::GlLinkProgram, vec![program.into()])
    }

    /// `glShaderSource`
    pub fn gl_shader_source(
        &self,
        shader: ShaderId,
        count: i32,
        source: Pointer,
        length: Pointer,
    ) -> Command {
        self.command(
            Opcode::GlShaderSource,
            vec![shader.into(), count.into(), source.into(), length.into()],
        )
    }

    /// `glTexImage2D`
    pub fn gl_tex_image_2d(
        &self,
        target: GLenum,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        border: i32,
        format: GLenum,
        ty: GLenum,
        data: Pointer,
    ) -> Command {
        self.command(
            Opcode::GlTexImage2D,
            vec![
                target.into(),
                level.into(),
                internal_format.into(),
                width.into(),
                height.into(),
                border.into(),
                format.into(),
                ty.into(),
                data.into(),
            ],
        )
    }

    /// `glTexParameteri`
    pub fn gl_tex_parameteri(&self, target: GLenum, parameter: GLenum, value: i32) -> Command {
        self.command(
            Opcode::GlTexParameteri,
            vec![target.into(), parameter.into(), value.into()],
        )
    }

    /// `glUniform1i`
    pub fn gl_uniform1i(&self, location: UniformLocation, value: i32) -> Command {
        self.command(Opcode::GlUniform1i, vec![location.into(), value.into()])
    }

    /// `glUseProgram`
    pub fn gl_use_program(&self, program: ProgramId) -> Command {
        self.command(Opcode::GlUseProgram, vec![program.into()])
    }

    /// `glVertexAttribPointer`
    pub fn gl_vertex_attrib_pointer(
        &self,
        location: AttributeLocation,
        size: i32,
        ty: GLenum,
        normalized: bool,
        stride: i32,
        data: Pointer,
    ) -> Command {
        self.command(
            Opcode::GlVertexAttribPointer,
            vec![
                location.into(),
                size.into(),
                ty.into(),
                normalized.into(),
                stride.into(),
                data.into(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_follow_parameters() {
        let cb = CommandBuilder::new(3);
        let commands = vec![
            cb.egl_swap_buffers(Pointer(1), Pointer(1), true),
            cb.gl_create_shader(GLenum::GL_VERTEX_SHADER, ShaderId(1)),
            cb.gl_tex_image_2d(
                GLenum::GL_TEXTURE_2D,
                0,
                GLenum::GL_RGB.0 as i32,
                64,
                64,
                0,
                GLenum::GL_RGB,
                GLenum::GL_UNSIGNED_BYTE,
                Pointer(0x1000),
            ),
            cb.gl_vertex_attrib_pointer(
                AttributeLocation(0),
                3,
                GLenum::GL_FLOAT,
                false,
                0,
                Pointer(0x2000),
            ),
        ];

        for command in &commands {
            assert_eq!(command.args().len(), command.opcode().parameters().len());
            assert_eq!(command.thread(), 3);
            assert!(command.observations().is_empty());
            assert!(command.extras().is_empty());
        }
        assert_eq!(commands[1].arg("result"), Some(&Value::Name(1)));
        assert_eq!(commands[2].arg("width"), Some(&Value::Int(64)));
    }
}
