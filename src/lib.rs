//! Small OpenGL wrappers for shader programs and bitmap textures.
//!
//! Both wrappers talk to OpenGL through the [`gl_api::GlApi`] trait, so
//! they can be driven by a real context ([`gl_api::GlContext`]) or by any
//! other implementation.

pub mod gl_api;
pub mod glfw_window;
pub mod logging;
pub mod shader;
pub mod texture;
