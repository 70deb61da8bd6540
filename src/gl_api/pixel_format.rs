use gl::types::GLenum;

/// The channel order of pixel data handed to the GPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Bgr,
    Rgba,
    Bgra,
}

impl PixelFormat {
    /// Bytes used by a single pixel in this format.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb | PixelFormat::Bgr => 3,
            PixelFormat::Rgba | PixelFormat::Bgra => 4,
        }
    }

    pub fn gl_enum(self) -> GLenum {
        match self {
            PixelFormat::Rgb => gl::RGB,
            PixelFormat::Bgr => gl::BGR,
            PixelFormat::Rgba => gl::RGBA,
            PixelFormat::Bgra => gl::BGRA,
        }
    }
}
