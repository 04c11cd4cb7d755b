use {
    super::init_logger,
    crate::{snippets, Builder},
    cranelift_entity::EntityRef,
    replica_command::{
        Access, Command, CompileShaderExtra, DynamicContextState, Extra, ExtraKind, GLenum,
        LinkProgramExtra, Opcode, StaticContextState, Value,
    },
    replica_core::{ProgramId, ShaderId, UniformLocation},
    replica_memory::Pointer,
};

fn opcodes(builder: &Builder) -> Vec<Opcode> {
    builder.commands().map(|(_, command)| command.opcode()).collect()
}

fn bytes(builder: &Builder, command: &Command) -> Vec<Vec<u8>> {
    command
        .reads()
        .map(|region| {
            builder
                .arena()
                .block(region.block)
                .map(|block| block.data().to_vec())
                .unwrap_or_default()
        })
        .collect()
}

#[test]
fn compile_shader_sequence() {
    init_logger();
    let mut builder = Builder::new();
    let shader = builder.new_shader_id();
    snippets::compile_shader(&mut builder, shader, GLenum::GL_VERTEX_SHADER, "void main() {}")
        .unwrap();

    assert_eq!(
        opcodes(&builder),
        vec![
            Opcode::GlCreateShader,
            Opcode::GlShaderSource,
            Opcode::GlCompileShader
        ]
    );

    let commands: Vec<_> = builder.commands().map(|(_, command)| command).collect();
    assert_eq!(commands[0].arg("result"), Some(&Value::Name(shader.0)));

    let source = commands[1];
    assert_eq!(source.reads().count(), 2);
    assert_eq!(source.writes().count(), 0);
    assert!(bytes(&builder, source).contains(&b"void main() {}\0".to_vec()));

    let sources = source.arg("source").and_then(Value::as_pointer).unwrap();
    let sources = builder.arena().block_at(sources).unwrap();
    assert_eq!(sources.index(), 1);
    let (_, string) = builder.arena().iter().next().unwrap();
    assert_eq!(string.data(), &b"void main() {}\0"[..]);
    assert_eq!(
        builder.arena().block(sources).unwrap().data(),
        &string.ptr().0.to_le_bytes()[..]
    );

    assert_eq!(
        commands[2].extra(ExtraKind::CompileShader),
        Some(&Extra::CompileShader(CompileShaderExtra {
            compile_status: true,
            info_log: String::new(),
        }))
    );
}

#[test]
fn program_sequence() {
    let mut builder = Builder::new();
    let (vs, fs, prog) = (
        builder.new_shader_id(),
        builder.new_shader_id(),
        builder.new_program_id(),
    );
    snippets::program(&mut builder, vs, fs, prog, "vs", "fs").unwrap();

    assert_eq!(
        opcodes(&builder),
        vec![
            Opcode::GlCreateProgram,
            Opcode::GlCreateShader,
            Opcode::GlShaderSource,
            Opcode::GlCompileShader,
            Opcode::GlCreateShader,
            Opcode::GlShaderSource,
            Opcode::GlCompileShader,
            Opcode::GlAttachShader,
            Opcode::GlAttachShader,
        ]
    );

    let attached: Vec<_> = builder
        .commands()
        .filter(|(_, command)| command.opcode() == Opcode::GlAttachShader)
        .map(|(_, command)| command.arg("shader").cloned())
        .collect();
    assert_eq!(attached, vec![Some(Value::Name(vs.0)), Some(Value::Name(fs.0))]);
    assert_eq!((vs, fs, prog), (ShaderId(1), ShaderId(2), ProgramId(1)));
}

#[test]
fn link_and_query() {
    let mut builder = Builder::new();
    let prog = builder.new_program_id();
    let extra = LinkProgramExtra {
        link_status: true,
        ..LinkProgramExtra::default()
    };
    let link = snippets::link_program(&mut builder, prog, extra.clone());
    let query = snippets::get_uniform_location(&mut builder, prog, "tex", UniformLocation(4)).unwrap();

    assert_eq!(builder.last(), query);
    assert_eq!(
        builder.command(link).unwrap().extras(),
        &[Extra::LinkProgram(extra)][..]
    );

    let query = builder.command(query).unwrap();
    assert_eq!(query.arg("result"), Some(&Value::Int(4)));
    assert_eq!(bytes(&builder, query), vec![b"tex\0".to_vec()]);
}

#[test]
fn context_carries_both_states() {
    let mut builder = Builder::new();
    let make_current = snippets::create_context(&mut builder, 640, 480, false).unwrap();
    assert_eq!(opcodes(&builder), vec![Opcode::EglCreateContext, Opcode::EglMakeCurrent]);

    let command = builder.command(make_current).unwrap();
    let kinds: Vec<_> = command.extras().iter().map(Extra::kind).collect();
    assert_eq!(kinds, vec![ExtraKind::StaticContextState, ExtraKind::DynamicContextState]);
    match command.extra(ExtraKind::StaticContextState) {
        Some(Extra::StaticContextState(StaticContextState {
            backbuffer_width: 640,
            backbuffer_height: 480,
            ..
        })) => {}
        other => panic!("Unexpected static state {:?}", other),
    }
    assert_eq!(
        command.extra(ExtraKind::DynamicContextState),
        Some(&Extra::DynamicContextState(DynamicContextState {
            backbuffer_width: 640,
            backbuffer_height: 480,
            preserve_buffers_on_swap: false,
        }))
    );

    let (_, create) = builder.commands().next().unwrap();
    assert_eq!(create.reads().count(), 1);
}

#[test]
fn swap_returns_its_id() {
    let mut builder = Builder::new();
    let cb = builder.cb();
    builder.add(vec![cb.gl_enable(GLenum::GL_DEPTH_TEST)]);
    let swap = snippets::swap_buffers(&mut builder);
    assert_eq!(builder.last(), swap);

    let command = builder.command(swap).unwrap();
    assert_eq!(command.opcode(), Opcode::EglSwapBuffers);
    assert_eq!(command.arg("display"), Some(&Value::Pointer(Pointer(1))));
    assert_eq!(command.arg("surface"), Some(&Value::Pointer(Pointer(1))));
}

#[test]
fn textured_square() {
    init_logger();
    let mut builder = Builder::new();
    let (draw, swap) = snippets::draw_textured_square(&mut builder).unwrap();

    assert_eq!(builder.last(), swap);
    assert_eq!(swap.index(), draw.index() + 1);
    assert_eq!(builder.len(), 28);

    assert_eq!(
        opcodes(&builder),
        vec![
            Opcode::GlCreateProgram,
            Opcode::GlCreateShader,
            Opcode::GlShaderSource,
            Opcode::GlCompileShader,
            Opcode::GlCreateShader,
            Opcode::GlShaderSource,
            Opcode::GlCompileShader,
            Opcode::GlAttachShader,
            Opcode::GlAttachShader,
            Opcode::GlLinkProgram,
            Opcode::GlGetUniformLocation,
            Opcode::GlGenTextures,
            Opcode::GlBindTexture,
            Opcode::GlTexParameteri,
            Opcode::GlTexParameteri,
            Opcode::GlTexImage2D,
            Opcode::GlEnable,
            Opcode::GlClearColor,
            Opcode::GlClear,
            Opcode::GlUseProgram,
            Opcode::GlActiveTexture,
            Opcode::GlBindTexture,
            Opcode::GlUniform1i,
            Opcode::GlGetAttribLocation,
            Opcode::GlEnableVertexAttribArray,
            Opcode::GlVertexAttribPointer,
            Opcode::GlDrawElements,
            Opcode::EglSwapBuffers,
        ]
    );

    let draw = builder.command(draw).unwrap();
    assert_eq!(draw.opcode(), Opcode::GlDrawElements);
    assert_eq!(draw.reads().count(), 2);
    assert_eq!(draw.writes().count(), 0);
    let read_sizes: Vec<_> = draw.reads().map(|region| region.range.size).collect();
    assert_eq!(read_sizes, vec![12, 48]);

    let (_, gen) = builder
        .commands()
        .find(|(_, command)| command.opcode() == Opcode::GlGenTextures)
        .unwrap();
    assert_eq!(gen.writes().count(), 1);
    assert!(gen.observations().iter().all(|o| o.access == Access::WRITE));

    let (_, upload) = builder
        .commands()
        .find(|(_, command)| command.opcode() == Opcode::GlTexImage2D)
        .unwrap();
    assert_eq!(bytes(&builder, upload), vec![snippets::textured_square_texels()]);
    assert_eq!(upload.arg("width"), Some(&Value::Int(64)));

    let (_, link) = builder
        .commands()
        .find(|(_, command)| command.opcode() == Opcode::GlLinkProgram)
        .unwrap();
    match link.extra(ExtraKind::LinkProgram) {
        Some(Extra::LinkProgram(extra)) => {
            assert!(extra.link_status);
            assert_eq!(extra.active_resources.default_uniform_block[0].name, "tex");
            assert_eq!(extra.active_resources.program_inputs[0].name, "position");
            assert_eq!(extra.active_resources.program_inputs[0].locations, vec![0]);
        }
        other => panic!("Unexpected link extra {:?}", other),
    }
}

#[test]
fn snippets_keep_caller_order() {
    let mut builder = Builder::new();
    let cb = builder.cb();
    let (vs, fs, prog) = (
        builder.new_shader_id(),
        builder.new_shader_id(),
        builder.new_program_id(),
    );

    builder.add(vec![
        cb.gl_enable(GLenum::GL_DEPTH_TEST),
        cb.gl_clear_color(1.0, 0.0, 0.0, 1.0),
    ]);
    let before = builder.last();
    snippets::program(&mut builder, vs, fs, prog, "vs", "fs").unwrap();
    let program_end = builder.last();
    builder.add(vec![cb.gl_use_program(prog)]);
    let between = builder.last();
    let (draw, swap) = snippets::draw_textured_square(&mut builder).unwrap();
    builder.add(vec![cb.gl_active_texture(GLenum::GL_TEXTURE0)]);
    let after = builder.last();

    let stream = opcodes(&builder);
    assert_eq!(stream.len(), 2 + 9 + 1 + 28 + 1);
    assert_eq!(&stream[..2], &[Opcode::GlEnable, Opcode::GlClearColor][..]);
    assert_eq!(
        &stream[2..11],
        &[
            Opcode::GlCreateProgram,
            Opcode::GlCreateShader,
            Opcode::GlShaderSource,
            Opcode::GlCompileShader,
            Opcode::GlCreateShader,
            Opcode::GlShaderSource,
            Opcode::GlCompileShader,
            Opcode::GlAttachShader,
            Opcode::GlAttachShader,
        ][..]
    );
    assert_eq!(stream[11], Opcode::GlUseProgram);

    let mut square = Builder::new();
    square.new_shader_id();
    square.new_shader_id();
    square.new_program_id();
    snippets::draw_textured_square(&mut square).unwrap();
    assert_eq!(&stream[12..40], &opcodes(&square)[..]);
    assert_eq!(stream[40], Opcode::GlActiveTexture);

    assert_eq!(before.index(), 1);
    assert_eq!(program_end.index(), 10);
    assert_eq!(between.index(), 11);
    assert_eq!(draw.index(), 38);
    assert_eq!(swap.index(), 39);
    assert_eq!(after.index(), 40);
}
