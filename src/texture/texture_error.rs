use {std::path::PathBuf, thiserror::Error};

/// Things which can go wrong while normalizing a decoded surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Surfaces with {0} bytes per pixel are not supported")]
    UnsupportedBytesPerPixel(usize),

    #[error("The surface has no pixels ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("The surface's pitch {pitch} is too small for {width} pixels")]
    PitchTooSmall { pitch: usize, width: u32 },

    #[error(
        "The surface needs {expected} bytes of pixel data but only has {actual}"
    )]
    PixelDataTooShort { expected: usize, actual: usize },

    #[error("The surface's channel masks do not describe 8 bit RGB channels")]
    UnsupportedChannelMasks,
}

/// Everything which can stop a texture from loading.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("Error loading texture {}: {message}", .path.display())]
    DecodeError { path: PathBuf, message: String },

    #[error("Error converting surface: {0}")]
    SurfaceConversion(#[from] SurfaceError),

    #[error("Error creating texture: the driver returned handle 0")]
    TextureCreationFailed,
}
