use {crate::shader::ShaderStage, std::path::PathBuf, thiserror::Error};

/// Everything which can stop a shader program from loading.
///
/// The `Display` rendering of each variant is the diagnostic line recorded
/// by `ShaderProgram::error`.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("No shader stages were provided")]
    NoStages,

    #[error("The {0} shader stage was provided more than once")]
    DuplicateStage(ShaderStage),

    #[error("Error creating shader program: the driver returned handle 0")]
    ProgramCreationFailed,

    #[error("Error creating {0} shader")]
    StageCreationFailed(ShaderStage),

    #[error("Error opening file: {} ({stage} shader)", .path.display())]
    FileUnreadable {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is empty: {name} ({stage} shader)")]
    EmptySource { stage: ShaderStage, name: String },

    #[error("Error compiling {stage} shader: {log}")]
    CompileError { stage: ShaderStage, log: String },

    #[error("Error linking shader program: {log}")]
    LinkError { log: String },

    #[error("Error validating shader program: {log}")]
    ValidationError { log: String },
}

impl ShaderError {
    /// The stage the error is about, if any.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderError::DuplicateStage(stage)
            | ShaderError::StageCreationFailed(stage)
            | ShaderError::FileUnreadable { stage, .. }
            | ShaderError::EmptySource { stage, .. }
            | ShaderError::CompileError { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
