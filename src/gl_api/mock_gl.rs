//! A recording `GlApi` used by the unit tests.
//!
//! Handles are handed out from a single counter so shader, program, and
//! texture names never collide, which keeps assertions about "which handle
//! was deleted" unambiguous.

use {
    crate::{
        gl_api::{GlApi, PixelFormat},
        shader::ShaderStage,
    },
    gl::types::{GLenum, GLint, GLuint},
    std::{
        collections::{BTreeSet, HashMap},
        io::Write,
        sync::{Mutex, MutexGuard},
    },
    tempfile::NamedTempFile,
};

/// Sources containing this token fail to compile.
pub const SYNTAX_ERROR_TOKEN: &str = "syntax_error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureUpload {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub byte_count: usize,
}

/// Scripted failures.
#[derive(Debug, Default, Clone)]
pub struct Failures {
    pub create_program: bool,
    pub create_shader: Option<ShaderStage>,
    pub create_texture: bool,
    pub link: bool,
    pub validate: bool,

    /// Log returned for successful compiles.
    pub compile_warning: Option<String>,
}

#[derive(Debug, Default)]
pub struct MockState {
    next_handle: GLuint,

    pub failures: Failures,

    pub shaders_created: usize,
    pub shaders_deleted: usize,
    pub programs_created: usize,
    pub programs_deleted: usize,
    pub textures_created: usize,
    pub textures_deleted: usize,

    pub live_shaders: BTreeSet<GLuint>,
    pub live_programs: BTreeSet<GLuint>,
    pub live_textures: BTreeSet<GLuint>,

    pub shader_stages: HashMap<GLuint, ShaderStage>,
    pub shader_sources: HashMap<GLuint, String>,
    pub compiled: Vec<ShaderStage>,
    pub attached: HashMap<GLuint, BTreeSet<GLuint>>,
    pub linked: BTreeSet<GLuint>,

    pub current_program: Option<GLuint>,
    pub use_program_calls: Vec<Option<GLuint>>,

    pub bound_texture: Option<GLuint>,
    pub texture_parameters: Vec<(GLenum, GLint)>,
    pub uploads: Vec<TextureUpload>,
    pub mipmaps_generated: usize,
}

impl MockState {
    fn next_handle(&mut self) -> GLuint {
        self.next_handle += 1;
        self.next_handle
    }

    /// Deleting a name which was never created, or deleting it twice, is a
    /// bug in the wrappers even though real drivers silently accept it.
    fn assert_live(set: &BTreeSet<GLuint>, handle: GLuint, kind: &str) {
        assert!(
            set.contains(&handle),
            "deleted {} {} which is not alive",
            kind,
            handle
        );
    }
}

#[derive(Debug, Default)]
pub struct MockGl {
    state: Mutex<MockState>,
}

impl MockGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failures(failures: Failures) -> Self {
        let mock = Self::default();
        mock.state().failures = failures;
        mock
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock gl state poisoned")
    }

    /// True when every created shader and program has been deleted.
    pub fn shader_objects_balanced(&self) -> bool {
        let state = self.state();
        state.shaders_created == state.shaders_deleted
            && state.live_shaders.is_empty()
    }
}

impl GlApi for MockGl {
    fn create_shader(&self, stage: ShaderStage) -> Option<GLuint> {
        let mut state = self.state();
        if state.failures.create_shader == Some(stage) {
            return None;
        }
        let handle = state.next_handle();
        state.shaders_created += 1;
        state.live_shaders.insert(handle);
        state.shader_stages.insert(handle, stage);
        Some(handle)
    }

    fn shader_source(&self, shader: GLuint, source: &str) {
        self.state().shader_sources.insert(shader, source.to_owned());
    }

    fn compile_shader(&self, shader: GLuint) {
        let mut state = self.state();
        let stage = state.shader_stages[&shader];
        state.compiled.push(stage);
    }

    fn shader_compile_status(&self, shader: GLuint) -> bool {
        let state = self.state();
        state
            .shader_sources
            .get(&shader)
            .map(|source| !source.contains(SYNTAX_ERROR_TOKEN))
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: GLuint) -> String {
        let state = self.state();
        match state.shader_sources.get(&shader) {
            Some(source) if source.contains(SYNTAX_ERROR_TOKEN) => {
                format!(
                    "0:3(1): error: syntax error, unexpected IDENTIFIER \
                     '{}'",
                    SYNTAX_ERROR_TOKEN
                )
            }
            _ => state.failures.compile_warning.clone().unwrap_or_default(),
        }
    }

    fn delete_shader(&self, shader: GLuint) {
        let mut state = self.state();
        MockState::assert_live(&state.live_shaders, shader, "shader");
        state.live_shaders.remove(&shader);
        state.shaders_deleted += 1;
        for attached in state.attached.values() {
            assert!(
                !attached.contains(&shader),
                "shader {} deleted while still attached",
                shader
            );
        }
    }

    fn create_program(&self) -> Option<GLuint> {
        let mut state = self.state();
        if state.failures.create_program {
            return None;
        }
        let handle = state.next_handle();
        state.programs_created += 1;
        state.live_programs.insert(handle);
        state.attached.insert(handle, BTreeSet::new());
        Some(handle)
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        let mut state = self.state();
        state
            .attached
            .get_mut(&program)
            .expect("attach to an unknown program")
            .insert(shader);
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        let mut state = self.state();
        let removed = state
            .attached
            .get_mut(&program)
            .map(|attached| attached.remove(&shader))
            .unwrap_or(false);
        assert!(removed, "detached shader {} was not attached", shader);
    }

    fn link_program(&self, program: GLuint) {
        let mut state = self.state();
        if !state.failures.link {
            state.linked.insert(program);
        }
    }

    fn program_link_status(&self, program: GLuint) -> bool {
        self.state().linked.contains(&program)
    }

    fn validate_program(&self, _program: GLuint) {}

    fn program_validate_status(&self, program: GLuint) -> bool {
        let state = self.state();
        state.linked.contains(&program) && !state.failures.validate
    }

    fn program_info_log(&self, program: GLuint) -> String {
        let state = self.state();
        if !state.linked.contains(&program) {
            "error: vertex shader output `uv' not read by fragment shader"
                .to_owned()
        } else if state.failures.validate {
            "Validation Failed: No vertex array object bound.".to_owned()
        } else {
            String::new()
        }
    }

    fn use_program(&self, program: Option<GLuint>) {
        let mut state = self.state();
        state.current_program = program;
        state.use_program_calls.push(program);
    }

    fn delete_program(&self, program: GLuint) {
        let mut state = self.state();
        MockState::assert_live(&state.live_programs, program, "program");
        state.live_programs.remove(&program);
        state.programs_deleted += 1;
        // attached shaders are flagged for deletion by the driver, but the
        // wrappers are expected to detach everything themselves
        state.attached.remove(&program);
        if state.current_program == Some(program) {
            state.current_program = None;
        }
    }

    fn create_texture(&self) -> Option<GLuint> {
        let mut state = self.state();
        if state.failures.create_texture {
            return None;
        }
        let handle = state.next_handle();
        state.textures_created += 1;
        state.live_textures.insert(handle);
        Some(handle)
    }

    fn bind_texture_2d(&self, texture: Option<GLuint>) {
        self.state().bound_texture = texture;
    }

    fn texture_2d_parameter(&self, parameter: GLenum, value: GLint) {
        let mut state = self.state();
        assert!(state.bound_texture.is_some(), "no texture bound");
        state.texture_parameters.push((parameter, value));
    }

    fn texture_2d_image(
        &self,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[u8],
    ) {
        let mut state = self.state();
        assert!(state.bound_texture.is_some(), "no texture bound");
        assert_eq!(
            pixels.len(),
            width as usize * height as usize * format.bytes_per_pixel(),
            "pixel data does not match a tightly packed {:?} image",
            format
        );
        state.uploads.push(TextureUpload {
            width,
            height,
            format,
            byte_count: pixels.len(),
        });
    }

    fn generate_texture_2d_mipmap(&self) {
        self.state().mipmaps_generated += 1;
    }

    fn delete_texture(&self, texture: GLuint) {
        let mut state = self.state();
        MockState::assert_live(&state.live_textures, texture, "texture");
        state.live_textures.remove(&texture);
        state.textures_deleted += 1;
    }
}

/// Write `contents` to a fresh temp file ending in `suffix`. The file is
/// removed when the returned handle is dropped.
pub fn write_temp_file(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("ccthw_gl_utils_")
        .suffix(suffix)
        .tempfile()
        .expect("unable to create temp file");
    file.write_all(contents).expect("unable to write temp file");
    file.flush().expect("unable to flush temp file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_files_are_removed_on_drop() {
        let file = write_temp_file(".txt", b"contents");
        let path = file.path().to_owned();
        assert_eq!(std::fs::read(&path).unwrap(), b"contents");
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("txt"));

        drop(file);

        assert!(!path.exists());
    }
}
