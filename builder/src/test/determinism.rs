use {
    crate::{snippets, Builder, Capture},
    replica_command::GLenum,
};

fn record(texels: &[Vec<u8>]) -> Capture {
    let mut builder = Builder::new();
    snippets::create_context(&mut builder, 256, 256, false).unwrap();
    let cb = builder.cb();
    for payload in texels {
        let texture = builder.new_texture_id();
        let data = builder.data(payload.clone()).unwrap();
        builder.add(vec![
            cb.gl_bind_texture(GLenum::GL_TEXTURE_2D, texture),
            cb.gl_tex_image_2d(
                GLenum::GL_TEXTURE_2D,
                0,
                GLenum::GL_RGBA.0 as i32,
                1,
                (payload.len() / 4) as i32,
                0,
                GLenum::GL_RGBA,
                GLenum::GL_UNSIGNED_BYTE,
                data.ptr(),
            )
            .add_read(data.data()),
        ]);
    }
    snippets::draw_textured_square(&mut builder).unwrap();
    builder.finish()
}

#[test]
fn same_client_code_same_capture() {
    let texels: Vec<Vec<u8>> = (0..16)
        .map(|_| {
            let size = 4 * (rand::random::<usize>() % 64);
            (0..size).map(|_| rand::random::<u8>()).collect()
        })
        .collect();

    let first = record(&texels);
    let second = record(&texels);

    assert!(first.commands().eq(second.commands()));
    let shapes = |capture: &Capture| {
        capture
            .blocks()
            .map(|(id, block)| (id, block.range(), block.data().to_vec()))
            .collect::<Vec<_>>()
    };
    assert_eq!(shapes(&first), shapes(&second));
    assert_eq!(first.validate(), Ok(()));
}
