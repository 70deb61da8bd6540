use {
    crate::{
        gl_api::GlApi,
        texture::{BmpDecoder, ImageDecoder, TextureError},
    },
    gl::types::{GLenum, GLint, GLuint},
    std::{path::Path, sync::Arc},
};

/// Wrapping and filtering applied to every loaded texture.
const SAMPLING_POLICY: [(GLenum, GLint); 5] = [
    (gl::TEXTURE_WRAP_S, gl::REPEAT as GLint),
    (gl::TEXTURE_WRAP_T, gl::REPEAT as GLint),
    (gl::TEXTURE_WRAP_R, gl::REPEAT as GLint),
    (gl::TEXTURE_MAG_FILTER, gl::NEAREST as GLint),
    (gl::TEXTURE_MIN_FILTER, gl::NEAREST_MIPMAP_LINEAR as GLint),
];

/// A 2D texture loaded from an image file.
pub struct Texture2D {
    gl: Arc<dyn GlApi>,
    decoder: Box<dyn ImageDecoder>,
    texture: Option<GLuint>,
    error: Option<String>,
}

impl Texture2D {
    /// Create an empty texture which decodes bitmap files.
    pub fn new(gl: Arc<dyn GlApi>) -> Self {
        Self::with_decoder(gl, Box::new(BmpDecoder))
    }

    pub fn with_decoder(
        gl: Arc<dyn GlApi>,
        decoder: Box<dyn ImageDecoder>,
    ) -> Self {
        Self {
            gl,
            decoder,
            texture: None,
            error: None,
        }
    }

    /// Decode the image at `path` and upload it as this texture's storage.
    ///
    /// Any texture already owned by this instance is deleted first. The new
    /// texture is left bound to `TEXTURE_2D`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), TextureError> {
        self.error = None;
        self.delete();

        match self.upload(path.as_ref()) {
            Ok(texture) => {
                self.texture = Some(texture);
                Ok(())
            }
            Err(error) => {
                log::debug!("Texture failed to load: {}", error);
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Unbind and release the texture. Safe to call when nothing is loaded.
    pub fn delete(&mut self) {
        if let Some(texture) = self.texture.take() {
            self.gl.bind_texture_2d(None);
            self.gl.delete_texture(texture);
            log::debug!("Deleted texture {}", texture);
        }
    }

    /// Bind to `TEXTURE_2D`. Does nothing unless a texture is loaded.
    pub fn bind(&self) {
        if let Some(texture) = self.texture {
            self.gl.bind_texture_2d(Some(texture));
        }
    }

    /// Clear the `TEXTURE_2D` binding, whichever texture that is.
    pub fn unbind(&self) {
        self.gl.bind_texture_2d(None);
    }

    pub fn handle(&self) -> Option<GLuint> {
        self.texture
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// The reason the most recent `load` failed, or an empty string.
    pub fn error(&self) -> String {
        self.error
            .as_ref()
            .map(|error| format!("{}\n", error))
            .unwrap_or_default()
    }

    fn upload(&self, path: &Path) -> Result<GLuint, TextureError> {
        let surface = {
            let decoded = self.decoder.decode(path)?;
            decoded.normalized()?
        };
        let format = surface.format.upload_format()?;

        let texture = self
            .gl
            .create_texture()
            .ok_or(TextureError::TextureCreationFailed)?;
        self.gl.bind_texture_2d(Some(texture));
        for (parameter, value) in SAMPLING_POLICY {
            self.gl.texture_2d_parameter(parameter, value);
        }
        self.gl.texture_2d_image(
            surface.width,
            surface.height,
            format,
            &surface.pixels,
        );
        self.gl.generate_texture_2d_mipmap();

        log::debug!(
            "Uploaded {} as texture {} ({}x{} {:?})",
            path.display(),
            texture,
            surface.width,
            surface.height,
            format
        );
        Ok(texture)
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        self.delete();
    }
}
