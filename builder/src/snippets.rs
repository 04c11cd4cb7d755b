//! Call sequences shared by many captures.
//!
//! Every snippet appends a fixed sequence of commands through `Builder::add`
//! and declares reads and writes of all the memory it stages.

use {
    crate::{builder::Builder, error::CaptureError},
    replica_command::{
        ActiveProgramResources, CommandId, CompileShaderExtra, DynamicContextState, GLbitfield,
        GLenum, LinkProgramExtra, ProgramResource, StaticContextState,
    },
    replica_core::{AttributeLocation, ProgramId, ShaderId, UniformLocation},
    replica_memory::Pointer,
};

/// Handle of the EGL display commands are issued against.
pub const DISPLAY: Pointer = Pointer(1);

/// Handle of the EGL config contexts are created with.
pub const CONFIG: Pointer = Pointer(1);

/// Handle of the window surface.
pub const SURFACE: Pointer = Pointer(1);

/// Handle of the context created by `create_context`.
pub const CONTEXT: Pointer = Pointer(1);

const EGL_CONTEXT_CLIENT_VERSION: i32 = 0x3098;
const EGL_NONE: i32 = 0x3038;

/// Vertex shader of `draw_textured_square`.
pub const TEXTURED_SQUARE_VS: &str = "
    precision mediump float;
    attribute vec3 position;
    varying vec2 texcoord;
    void main() {
        gl_Position = vec4(position, 1.0);
        texcoord = position.xy + vec2(0.5, 0.5);
    }";

/// Fragment shader of `draw_textured_square`.
pub const TEXTURED_SQUARE_FS: &str = "
    precision mediump float;
    uniform sampler2D tex;
    varying vec2 texcoord;
    void main() {
        gl_FragColor = texture2D(tex, texcoord);
    }";

/// Create and compile shader from `source`.
///
/// Appends `glCreateShader`, `glShaderSource` and `glCompileShader`.
/// The compilation is recorded as successful.
pub fn compile_shader(
    builder: &mut Builder,
    shader: ShaderId,
    ty: GLenum,
    source: &str,
) -> Result<(), CaptureError> {
    log::debug!("Compile {} {}", ty, shader);
    let cb = builder.cb();
    let source = builder.data_str(source)?;
    let sources = builder.data_slice(&[source.ptr()])?;

    builder.add(vec![
        cb.gl_create_shader(ty, shader),
        cb.gl_shader_source(shader, 1, sources.ptr(), Pointer::NULL)
            .add_read(sources.data())
            .add_read(source.data()),
        cb.gl_compile_shader(shader).with_extra(CompileShaderExtra {
            compile_status: true,
            info_log: String::new(),
        }),
    ]);
    Ok(())
}

/// Create program `prog` with vertex shader `vs` and fragment shader `fs` attached.
///
/// The program is not linked, see `link_program`.
pub fn program(
    builder: &mut Builder,
    vs: ShaderId,
    fs: ShaderId,
    prog: ProgramId,
    vs_source: &str,
    fs_source: &str,
) -> Result<(), CaptureError> {
    log::debug!("Build {} from {} and {}", prog, vs, fs);
    let cb = builder.cb();
    builder.add(Some(cb.gl_create_program(prog)));
    compile_shader(builder, vs, GLenum::GL_VERTEX_SHADER, vs_source)?;
    compile_shader(builder, fs, GLenum::GL_FRAGMENT_SHADER, fs_source)?;
    builder.add(vec![
        cb.gl_attach_shader(prog, vs),
        cb.gl_attach_shader(prog, fs),
    ]);
    Ok(())
}

/// Link program, recording link status and reflection from `extra`.
pub fn link_program(builder: &mut Builder, prog: ProgramId, extra: LinkProgramExtra) -> CommandId {
    let command = builder.cb().gl_link_program(prog).with_extra(extra);
    builder.add_one(command)
}

/// Query location of uniform `name`, which is known to be `location`.
pub fn get_uniform_location(
    builder: &mut Builder,
    prog: ProgramId,
    name: &str,
    location: UniformLocation,
) -> Result<CommandId, CaptureError> {
    let name = builder.data_str(name)?;
    let command = builder
        .cb()
        .gl_get_uniform_location(prog, name.ptr(), location)
        .add_read(name.data());
    Ok(builder.add_one(command))
}

/// Query location of attribute `name`, which is known to be `location`.
pub fn get_attrib_location(
    builder: &mut Builder,
    prog: ProgramId,
    name: &str,
    location: AttributeLocation,
) -> Result<CommandId, CaptureError> {
    let name = builder.data_str(name)?;
    let command = builder
        .cb()
        .gl_get_attrib_location(prog, name.ptr(), location)
        .add_read(name.data());
    Ok(builder.add_one(command))
}

/// Create GLES 2 context and make it current on `SURFACE`.
///
/// Returns id of the `eglMakeCurrent` command, which carries the state of
/// the `width` x `height` backbuffer.
pub fn create_context(
    builder: &mut Builder,
    width: u32,
    height: u32,
    preserve_buffers_on_swap: bool,
) -> Result<CommandId, CaptureError> {
    log::debug!("Create {}x{} context", width, height);
    let cb = builder.cb();
    let attribs = builder.data_slice(&[EGL_CONTEXT_CLIENT_VERSION, 2, EGL_NONE])?;

    builder.add(vec![
        cb.egl_create_context(DISPLAY, CONFIG, Pointer::NULL, attribs.ptr(), CONTEXT)
            .add_read(attribs.data()),
        cb.egl_make_current(DISPLAY, SURFACE, SURFACE, CONTEXT, true)
            .with_extra(StaticContextState {
                backbuffer_width: width,
                backbuffer_height: height,
                color_format: GLenum::GL_RGBA8,
                depth_format: GLenum::GL_DEPTH24_STENCIL8,
                stencil_format: GLenum::GL_DEPTH24_STENCIL8,
            })
            .with_extra(DynamicContextState {
                backbuffer_width: width,
                backbuffer_height: height,
                preserve_buffers_on_swap,
            }),
    ]);
    Ok(builder.last())
}

/// Present the backbuffer of `SURFACE`.
pub fn swap_buffers(builder: &mut Builder) -> CommandId {
    let command = builder.cb().egl_swap_buffers(DISPLAY, SURFACE, true);
    builder.add_one(command)
}

/// Texture of `draw_textured_square`: 64x64 RGB gradient.
pub fn textured_square_texels() -> Vec<u8> {
    let mut texels = vec![0u8; 3 * 64 * 64];
    for y in 0..64 {
        for x in 0..64 {
            let texel = (y * 64 + x) * 3;
            texels[texel] = (x * 4) as u8;
            texels[texel + 1] = (y * 4) as u8;
            texels[texel + 2] = 255;
        }
    }
    texels
}

/// Draw a textured square and present it.
///
/// Builds and links the program, uploads the texture and draws the square
/// with client-side index and vertex arrays.
/// Returns ids of the `glDrawElements` and `eglSwapBuffers` commands.
pub fn draw_textured_square(builder: &mut Builder) -> Result<(CommandId, CommandId), CaptureError> {
    let square_vertices: [f32; 12] = [
        -0.5, -0.5, 0.5, //
        -0.5, 0.5, 0.5, //
        0.5, 0.5, 0.5, //
        0.5, -0.5, 0.5, //
    ];
    let square_indices: [u16; 6] = [0, 1, 2, 0, 2, 3];

    let vs = builder.new_shader_id();
    let fs = builder.new_shader_id();
    let prog = builder.new_program_id();
    let texture = builder.new_texture_id();
    let position = AttributeLocation(0);
    let tex_location = UniformLocation(0);
    log::debug!("Draw textured square with {} and {}", prog, texture);

    let texture_names = builder.data_slice(&[texture])?;
    let texture_data = builder.data(textured_square_texels())?;
    let indices = builder.data_slice(&square_indices)?;
    let vertices = builder.data_slice(&square_vertices)?;

    program(builder, vs, fs, prog, TEXTURED_SQUARE_VS, TEXTURED_SQUARE_FS)?;

    let extra = LinkProgramExtra {
        link_status: true,
        info_log: String::new(),
        active_resources: ActiveProgramResources {
            default_uniform_block: vec![ProgramResource::new(
                GLenum::GL_SAMPLER_2D,
                "tex",
                tex_location.0,
            )],
            program_inputs: vec![ProgramResource::new(
                GLenum::GL_FLOAT_VEC3,
                "position",
                position.0 as i32,
            )],
        },
    };
    link_program(builder, prog, extra);
    get_uniform_location(builder, prog, "tex", tex_location)?;

    let cb = builder.cb();
    let nearest = GLenum::GL_NEAREST.0 as i32;
    builder.add(vec![
        cb.gl_gen_textures(1, texture_names.ptr())
            .add_write(texture_names.data()),
        cb.gl_bind_texture(GLenum::GL_TEXTURE_2D, texture),
        cb.gl_tex_parameteri(GLenum::GL_TEXTURE_2D, GLenum::GL_TEXTURE_MIN_FILTER, nearest),
        cb.gl_tex_parameteri(GLenum::GL_TEXTURE_2D, GLenum::GL_TEXTURE_MAG_FILTER, nearest),
        cb.gl_tex_image_2d(
            GLenum::GL_TEXTURE_2D,
            0,
            GLenum::GL_RGB.0 as i32,
            64,
            64,
            0,
            GLenum::GL_RGB,
            GLenum::GL_UNSIGNED_BYTE,
            texture_data.ptr(),
        )
        .add_read(texture_data.data()),
    ]);

    builder.add(vec![
        cb.gl_enable(GLenum::GL_DEPTH_TEST),
        cb.gl_clear_color(0.0, 1.0, 0.0, 1.0),
        cb.gl_clear(GLbitfield::GL_COLOR_BUFFER_BIT | GLbitfield::GL_DEPTH_BUFFER_BIT),
        cb.gl_use_program(prog),
        cb.gl_active_texture(GLenum::GL_TEXTURE0),
        cb.gl_bind_texture(GLenum::GL_TEXTURE_2D, texture),
        cb.gl_uniform1i(tex_location, 0),
    ]);
    get_attrib_location(builder, prog, "position", position)?;
    builder.add(vec![
        cb.gl_enable_vertex_attrib_array(position),
        cb.gl_vertex_attrib_pointer(position, 3, GLenum::GL_FLOAT, false, 0, vertices.ptr()),
        cb.gl_draw_elements(
            GLenum::GL_TRIANGLES,
            6,
            GLenum::GL_UNSIGNED_SHORT,
            indices.ptr(),
        )
        .add_read(indices.data())
        .add_read(vertices.data()),
    ]);

    let draw = builder.last();
    let swap = swap_buffers(builder);
    Ok((draw, swap))
}
