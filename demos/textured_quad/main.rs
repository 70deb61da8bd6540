//! Draw a textured quad.
//!
//! Usage: `cargo run --example textured_quad [path/to/image.bmp]`
//!
//! Without an argument a checkerboard bitmap is generated in the system temp
//! directory and used instead.

mod quad;

use {
    anyhow::{Context, Result},
    ccthw_gl_utils::{
        glfw_window::{GlVersion, GlfwWindow},
        logging,
        shader::{ShaderProgram, ShaderSources, ValidationPolicy},
        texture::Texture2D,
    },
    image::{ImageFormat, Rgb, RgbImage},
    quad::Quad,
    std::path::{Path, PathBuf},
};

const SHADER_DIR: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/demos/textured_quad/shaders");

fn checkerboard() -> Result<PathBuf> {
    let path = std::env::temp_dir().join("ccthw_gl_utils_checkerboard.bmp");
    let image = RgbImage::from_fn(64, 64, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgb([230, 230, 230])
        } else {
            Rgb([40, 90, 160])
        }
    });
    image
        .save_with_format(&path, ImageFormat::Bmp)
        .with_context(|| format!("unable to write {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let _logger = logging::setup()?;

    let texture_path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => checkerboard()?,
    };

    let mut window = GlfwWindow::new("Textured Quad", GlVersion::default())?;
    let events = window.take_event_receiver()?;
    let gl = unsafe { window.load_gl()? };

    // Some drivers refuse to validate a program unless a vertex array is
    // bound, so the quad is created first.
    let quad = unsafe { Quad::new() };

    let shader_dir = Path::new(SHADER_DIR);
    let mut program = ShaderProgram::new(gl.clone())
        .with_validation(ValidationPolicy::WarnOnly);
    program
        .load(
            &ShaderSources::new()
                .vertex(shader_dir.join("quad.vert"))
                .fragment(shader_dir.join("quad.frag")),
        )
        .context("unable to load the quad shader program")?;
    if !program.error().is_empty() {
        log::warn!("Shader diagnostics:\n{}", program.error());
    }

    let mut texture = Texture2D::new(gl);
    texture
        .load(&texture_path)
        .with_context(|| format!("unable to load {}", texture_path.display()))?;

    while !window.window.should_close() {
        for (_, event) in window.flush_window_events(&events) {
            match event {
                glfw::WindowEvent::Key(
                    glfw::Key::Escape,
                    _,
                    glfw::Action::Press,
                    _,
                ) => {
                    window.window.set_should_close(true);
                }
                glfw::WindowEvent::FramebufferSize(width, height) => unsafe {
                    gl::Viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        unsafe {
            gl::ClearColor(0.1, 0.1, 0.1, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
        program.bind();
        texture.bind();
        unsafe { quad.draw() };
        texture.unbind();
        program.unbind();

        window.swap_buffers();
    }

    // GPU objects must be released while the context still exists.
    texture.delete();
    program.delete();
    drop(quad);

    Ok(())
}
