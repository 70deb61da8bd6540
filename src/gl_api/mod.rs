mod gl_context;
mod pixel_format;

#[cfg(test)]
pub(crate) mod mock_gl;

use gl::types::{GLenum, GLint, GLuint};

use crate::shader::ShaderStage;

pub use self::{gl_context::GlContext, pixel_format::PixelFormat};

/// The subset of the OpenGL API used by shader programs and textures.
///
/// Every method assumes the context it wraps is current on the calling
/// thread. Creation methods return `None` when the driver hands back the
/// invalid handle `0`.
pub trait GlApi {
    /// Create an empty shader object for the given stage.
    fn create_shader(&self, stage: ShaderStage) -> Option<GLuint>;

    /// Replace the shader's source text.
    fn shader_source(&self, shader: GLuint, source: &str);

    fn compile_shader(&self, shader: GLuint);

    /// True when the last compilation of the shader succeeded.
    fn shader_compile_status(&self, shader: GLuint) -> bool;

    /// The compiler's diagnostic log for the shader. Possibly empty.
    fn shader_info_log(&self, shader: GLuint) -> String;

    fn delete_shader(&self, shader: GLuint);

    /// Create an empty program object.
    fn create_program(&self) -> Option<GLuint>;

    fn attach_shader(&self, program: GLuint, shader: GLuint);

    fn detach_shader(&self, program: GLuint, shader: GLuint);

    fn link_program(&self, program: GLuint);

    fn program_link_status(&self, program: GLuint) -> bool;

    /// Ask the driver whether the program can execute given the current
    /// context state.
    fn validate_program(&self, program: GLuint);

    fn program_validate_status(&self, program: GLuint) -> bool;

    /// The linker or validator log for the program. Possibly empty.
    fn program_info_log(&self, program: GLuint) -> String;

    /// Make the program current, or clear the current program with `None`.
    fn use_program(&self, program: Option<GLuint>);

    fn delete_program(&self, program: GLuint);

    /// Generate a texture name.
    fn create_texture(&self) -> Option<GLuint>;

    /// Bind the texture to the `TEXTURE_2D` target, or unbind with `None`.
    fn bind_texture_2d(&self, texture: Option<GLuint>);

    /// Set an integer parameter on the texture bound to `TEXTURE_2D`.
    fn texture_2d_parameter(&self, parameter: GLenum, value: GLint);

    /// Upload tightly packed pixels to level 0 of the texture bound to
    /// `TEXTURE_2D`. The internal format is always RGBA.
    fn texture_2d_image(
        &self,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[u8],
    );

    fn generate_texture_2d_mipmap(&self);

    fn delete_texture(&self, texture: GLuint);
}
