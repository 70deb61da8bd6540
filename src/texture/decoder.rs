use {
    crate::texture::{Surface, SurfaceFormat, TextureError},
    image::ImageFormat,
    std::{fs::File, io::BufReader, path::Path},
};

/// Turns an image file into a host-memory surface.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<Surface, TextureError>;
}

/// Decodes uncompressed bitmap files with the `image` crate.
///
/// Images with an alpha channel decode to 4 bytes per pixel, everything else
/// decodes to 3.
#[derive(Debug, Default, Copy, Clone)]
pub struct BmpDecoder;

impl ImageDecoder for BmpDecoder {
    fn decode(&self, path: &Path) -> Result<Surface, TextureError> {
        let decode_error = |message: String| TextureError::DecodeError {
            path: path.to_owned(),
            message,
        };

        let file =
            File::open(path).map_err(|err| decode_error(err.to_string()))?;
        let image = image::load(BufReader::new(file), ImageFormat::Bmp)
            .map_err(|err| decode_error(err.to_string()))?;

        let surface = if image.color().has_alpha() {
            let pixels = image.into_rgba8();
            let (width, height) = pixels.dimensions();
            Surface::packed(
                width,
                height,
                SurfaceFormat::canonical(true),
                pixels.into_raw(),
            )
        } else {
            let pixels = image.into_rgb8();
            let (width, height) = pixels.dimensions();
            Surface::packed(
                width,
                height,
                SurfaceFormat::canonical(false),
                pixels.into_raw(),
            )
        };
        log::trace!(
            "Decoded {} as {}x{} with {} bytes per pixel",
            path.display(),
            surface.width,
            surface.height,
            surface.format.bytes_per_pixel
        );

        Ok(surface)
    }
}
