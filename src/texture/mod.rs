//! Bitmap textures.

mod decoder;
mod surface;
mod texture_2d;
mod texture_error;

pub use self::{
    decoder::{BmpDecoder, ImageDecoder},
    surface::{Surface, SurfaceFormat},
    texture_2d::Texture2D,
    texture_error::{SurfaceError, TextureError},
};
