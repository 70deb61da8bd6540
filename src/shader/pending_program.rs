use {
    crate::{gl_api::GlApi, shader::ShaderError},
    gl::types::GLuint,
};

/// A program object, and the compiled stages attached to it, while a load is
/// still in progress.
///
/// Dropping a pending program detaches and deletes every attached stage and
/// then deletes the program itself, so any early return from a load releases
/// everything created so far. `into_linked` is the only way to keep the
/// program.
pub(super) struct PendingProgram<'gl> {
    gl: &'gl dyn GlApi,
    program: GLuint,
    stages: Vec<GLuint>,
    keep_program: bool,
}

impl<'gl> PendingProgram<'gl> {
    pub fn create(gl: &'gl dyn GlApi) -> Result<Self, ShaderError> {
        let program =
            gl.create_program().ok_or(ShaderError::ProgramCreationFailed)?;
        Ok(Self {
            gl,
            program,
            stages: vec![],
            keep_program: false,
        })
    }

    pub fn raw(&self) -> GLuint {
        self.program
    }

    /// Attach a compiled stage. The pending program takes ownership of the
    /// stage object.
    pub fn attach(&mut self, shader: GLuint) {
        self.gl.attach_shader(self.program, shader);
        self.stages.push(shader);
    }

    /// Release the stage objects and hand back the program handle.
    ///
    /// Stage objects are not needed once the program has been linked.
    pub fn into_linked(mut self) -> GLuint {
        self.release_stages();
        self.keep_program = true;
        self.program
    }

    fn release_stages(&mut self) {
        for shader in self.stages.drain(..) {
            self.gl.detach_shader(self.program, shader);
            self.gl.delete_shader(shader);
        }
    }
}

impl Drop for PendingProgram<'_> {
    fn drop(&mut self) {
        self.release_stages();
        if !self.keep_program {
            self.gl.delete_program(self.program);
        }
    }
}
