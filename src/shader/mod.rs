//! Multi-stage OpenGL shader programs.
//!
//! # Example
//!
//! ```ignore
//! let mut program = ShaderProgram::new(gl.clone());
//! program.load(
//!     &ShaderSources::new()
//!         .vertex("shaders/quad.vert")
//!         .fragment("shaders/quad.frag"),
//! )?;
//! program.bind();
//! ```

mod pending_program;
mod shader_error;
mod shader_program;
mod shader_sources;
mod shader_stage;

pub use self::{
    shader_error::ShaderError,
    shader_program::{ShaderProgram, ValidationPolicy},
    shader_sources::{ShaderSources, StageSource},
    shader_stage::ShaderStage,
};
