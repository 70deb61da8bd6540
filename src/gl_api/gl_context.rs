use {
    crate::{
        gl_api::{GlApi, PixelFormat},
        shader::ShaderStage,
    },
    gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint},
    std::{ffi::c_void, marker::PhantomData},
};

/// A `GlApi` implementation which calls straight into the `gl` crate's
/// global function pointers.
///
/// The `PhantomData` keeps this type `!Send` and `!Sync`: an OpenGL context
/// is only current on the thread that created it.
pub struct GlContext {
    _not_send: PhantomData<*const ()>,
}

impl GlContext {
    /// Load the OpenGL function pointers.
    ///
    /// # Params
    ///
    /// * `loader` - resolves a GL symbol name to its address, typically the
    ///   window system's `get_proc_address`.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - the context the pointers were resolved for must be current on the
    ///     calling thread for as long as this instance is used
    ///   - every object created through this instance must be deleted before
    ///     the context is destroyed
    pub unsafe fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        log::debug!(
            "Loaded OpenGL function pointers, CreateProgram available: {}",
            gl::CreateProgram::is_loaded()
        );
        Self {
            _not_send: PhantomData,
        }
    }
}

/// Read an info log using the matching `Get*iv`/`Get*InfoLog` pair.
unsafe fn read_info_log(
    object: GLuint,
    get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
    get_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    let mut log_length: GLint = 0;
    get_iv(object, gl::INFO_LOG_LENGTH, &mut log_length);
    if log_length <= 0 {
        return String::new();
    }

    let mut buffer = vec![0_u8; log_length as usize];
    let mut written: GLsizei = 0;
    get_log(
        object,
        log_length,
        &mut written,
        buffer.as_mut_ptr() as *mut GLchar,
    );
    buffer.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buffer)
        .trim_end_matches('\0')
        .to_owned()
}

impl GlApi for GlContext {
    fn create_shader(&self, stage: ShaderStage) -> Option<GLuint> {
        let shader = unsafe { gl::CreateShader(stage.gl_enum()) };
        (shader != 0).then_some(shader)
    }

    fn shader_source(&self, shader: GLuint, source: &str) {
        // An explicit length means the text does not need a nul terminator.
        let text = source.as_ptr() as *const GLchar;
        let length = source.len() as GLint;
        unsafe { gl::ShaderSource(shader, 1, &text, &length) };
    }

    fn compile_shader(&self, shader: GLuint) {
        unsafe { gl::CompileShader(shader) };
    }

    fn shader_compile_status(&self, shader: GLuint) -> bool {
        let mut status = gl::FALSE as GLint;
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status) };
        status != gl::FALSE as GLint
    }

    fn shader_info_log(&self, shader: GLuint) -> String {
        unsafe {
            read_info_log(shader, gl::GetShaderiv, gl::GetShaderInfoLog)
        }
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) };
    }

    fn create_program(&self) -> Option<GLuint> {
        let program = unsafe { gl::CreateProgram() };
        (program != 0).then_some(program)
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) };
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::DetachShader(program, shader) };
    }

    fn link_program(&self, program: GLuint) {
        unsafe { gl::LinkProgram(program) };
    }

    fn program_link_status(&self, program: GLuint) -> bool {
        let mut status = gl::FALSE as GLint;
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut status) };
        status != gl::FALSE as GLint
    }

    fn validate_program(&self, program: GLuint) {
        unsafe { gl::ValidateProgram(program) };
    }

    fn program_validate_status(&self, program: GLuint) -> bool {
        let mut status = gl::FALSE as GLint;
        unsafe {
            gl::GetProgramiv(program, gl::VALIDATE_STATUS, &mut status)
        };
        status != gl::FALSE as GLint
    }

    fn program_info_log(&self, program: GLuint) -> String {
        unsafe {
            read_info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog)
        }
    }

    fn use_program(&self, program: Option<GLuint>) {
        unsafe { gl::UseProgram(program.unwrap_or(0)) };
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) };
    }

    fn create_texture(&self) -> Option<GLuint> {
        let mut texture: GLuint = 0;
        unsafe { gl::GenTextures(1, &mut texture) };
        (texture != 0).then_some(texture)
    }

    fn bind_texture_2d(&self, texture: Option<GLuint>) {
        unsafe { gl::BindTexture(gl::TEXTURE_2D, texture.unwrap_or(0)) };
    }

    fn texture_2d_parameter(&self, parameter: GLenum, value: GLint) {
        unsafe { gl::TexParameteri(gl::TEXTURE_2D, parameter, value) };
    }

    fn texture_2d_image(
        &self,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[u8],
    ) {
        unsafe {
            // rows are tightly packed, 3 byte pixels would otherwise be
            // read with a 4 byte row alignment
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as GLint,
                width as GLsizei,
                height as GLsizei,
                0,
                format.gl_enum(),
                gl::UNSIGNED_BYTE,
                pixels.as_ptr() as *const c_void,
            );
        }
    }

    fn generate_texture_2d_mipmap(&self) {
        unsafe { gl::GenerateMipmap(gl::TEXTURE_2D) };
    }

    fn delete_texture(&self, texture: GLuint) {
        unsafe { gl::DeleteTextures(1, &texture) };
    }
}
