use {
    crate::{
        gl_api::GlApi,
        logging::PrettyList,
        shader::{
            pending_program::PendingProgram, ShaderError, ShaderSources,
            ShaderStage, StageSource,
        },
    },
    gl::types::GLuint,
    scopeguard::ScopeGuard,
    std::sync::Arc,
};

/// What to do when the driver rejects a linked program during validation.
///
/// Validation checks the program against the *current* context state. Some
/// drivers fail it when unrelated state is missing, e.g. when no vertex array
/// object is bound, so a failure is not always a problem with the program.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// A validation failure fails the load.
    #[default]
    Required,

    /// A validation failure is recorded as a warning and the load succeeds.
    WarnOnly,
}

/// An OpenGL program built from up to five shader stages.
///
/// Call `load` to compile and link, then `bind` before drawing. The program
/// object is released by `delete` or when this value is dropped.
pub struct ShaderProgram {
    gl: Arc<dyn GlApi>,
    program: Option<GLuint>,
    validation: ValidationPolicy,
    diagnostics: Vec<String>,
}

impl ShaderProgram {
    pub fn new(gl: Arc<dyn GlApi>) -> Self {
        Self {
            gl,
            program: None,
            validation: ValidationPolicy::default(),
            diagnostics: vec![],
        }
    }

    /// Choose how validation failures are handled by future loads.
    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }

    /// Compile, link, and validate a program from the given stages.
    ///
    /// Any program already owned by this instance is deleted first. On
    /// failure nothing created during the attempt survives, the instance is
    /// left unlinked, and the rendered error is available from `error`.
    ///
    /// # Params
    ///
    /// * `sources` - at least one stage, at most one of each kind. Stages
    ///   are compiled in pipeline order regardless of insertion order.
    pub fn load(&mut self, sources: &ShaderSources) -> Result<(), ShaderError> {
        self.diagnostics.clear();
        self.delete();

        match self.build(sources) {
            Ok(program) => {
                log::debug!("Linked shader program {}", program);
                self.program = Some(program);
                Ok(())
            }
            Err(error) => {
                log::debug!("Shader program failed to load: {}", error);
                self.diagnostics.push(error.to_string());
                Err(error)
            }
        }
    }

    /// Release the program object. Safe to call when nothing is loaded.
    pub fn delete(&mut self) {
        if let Some(program) = self.program.take() {
            self.gl.delete_program(program);
            log::debug!("Deleted shader program {}", program);
        }
    }

    /// Use this program for subsequent draw calls. Does nothing unless a
    /// program is loaded.
    pub fn bind(&self) {
        if let Some(program) = self.program {
            self.gl.use_program(Some(program));
        }
    }

    /// Clear the current program, whichever program that is.
    pub fn unbind(&self) {
        self.gl.use_program(None);
    }

    /// The raw program handle, if a program is loaded.
    pub fn handle(&self) -> Option<GLuint> {
        self.program
    }

    pub fn is_linked(&self) -> bool {
        self.program.is_some()
    }

    /// Every diagnostic recorded by the most recent `load`, one per line.
    ///
    /// Empty when the last load succeeded without warnings.
    pub fn error(&self) -> String {
        self.diagnostics
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    fn build(
        &mut self,
        sources: &ShaderSources,
    ) -> Result<GLuint, ShaderError> {
        let stages = sources.ordered()?;
        log::trace!(
            "Building shader program from stages {}",
            PrettyList(
                &stages
                    .iter()
                    .map(|(stage, source)| {
                        format!("{}: {}", stage, source.name(*stage))
                    })
                    .collect::<Vec<String>>()
            )
        );

        let gl = Arc::clone(&self.gl);
        let mut pending = PendingProgram::create(gl.as_ref())?;
        for (stage, source) in stages {
            let shader = self.compile_stage(gl.as_ref(), stage, source)?;
            pending.attach(shader);
        }

        gl.link_program(pending.raw());
        if !gl.program_link_status(pending.raw()) {
            return Err(ShaderError::LinkError {
                log: gl.program_info_log(pending.raw()),
            });
        }

        gl.validate_program(pending.raw());
        if !gl.program_validate_status(pending.raw()) {
            let error = ShaderError::ValidationError {
                log: gl.program_info_log(pending.raw()),
            };
            match self.validation {
                ValidationPolicy::Required => return Err(error),
                ValidationPolicy::WarnOnly => self.warn(error.to_string()),
            }
        }

        Ok(pending.into_linked())
    }

    /// Create and compile one stage, returning the compiled stage object.
    ///
    /// The stage object is deleted if anything goes wrong before it is
    /// returned.
    fn compile_stage(
        &mut self,
        gl: &dyn GlApi,
        stage: ShaderStage,
        source: &StageSource,
    ) -> Result<GLuint, ShaderError> {
        let shader = gl
            .create_shader(stage)
            .ok_or(ShaderError::StageCreationFailed(stage))?;
        let shader =
            scopeguard::guard(shader, |shader| gl.delete_shader(shader));

        let text = source.read(stage)?;
        gl.shader_source(*shader, &text);
        gl.compile_shader(*shader);

        let log = gl.shader_info_log(*shader);
        if !gl.shader_compile_status(*shader) {
            return Err(ShaderError::CompileError { stage, log });
        }
        if !log.trim().is_empty() {
            self.warn(format!(
                "{} shader compiled with messages: {}",
                stage,
                log.trim_end()
            ));
        }

        Ok(ScopeGuard::into_inner(shader))
    }

    fn warn(&mut self, message: String) {
        log::warn!("{}", message);
        self.diagnostics.push(format!("Warning: {}", message));
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.delete();
    }
}
