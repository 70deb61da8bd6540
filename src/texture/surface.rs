use crate::{gl_api::PixelFormat, texture::SurfaceError};

/// Bit masks which locate each 8 bit channel within one pixel value.
///
/// A pixel value is the pixel's bytes read as a host-order integer, so the
/// same masks describe different byte orders on little and big endian hosts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceFormat {
    pub bytes_per_pixel: usize,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,

    /// Zero when the surface has no alpha channel.
    pub alpha_mask: u32,
}

impl SurfaceFormat {
    /// The layout every decoded surface is normalized into: 3 bytes per
    /// pixel without alpha, 4 with, and red always the first byte in memory.
    pub fn canonical(has_alpha: bool) -> Self {
        let (bytes_per_pixel, red_mask, green_mask, blue_mask, alpha_mask) =
            match (has_alpha, cfg!(target_endian = "big")) {
                (true, true) => {
                    (4, 0xff00_0000, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff)
                }
                (true, false) => {
                    (4, 0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000)
                }
                (false, true) => (3, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0),
                (false, false) => (3, 0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0),
            };
        Self {
            bytes_per_pixel,
            red_mask,
            green_mask,
            blue_mask,
            alpha_mask,
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha_mask != 0
    }

    /// Pick the GPU upload format which matches this layout.
    ///
    /// The choice depends on where the red channel sits in memory: first
    /// byte means RGB ordering, blue first means BGR ordering. The byte
    /// count picks between the alpha and no-alpha variants.
    pub fn upload_format(&self) -> Result<PixelFormat, SurfaceError> {
        self.check()?;
        let red = self.byte_index(self.red_mask);
        let blue = self.byte_index(self.blue_mask);
        let format = match self.bytes_per_pixel {
            3 if red == Some(0) && blue == Some(2) => PixelFormat::Rgb,
            3 if red == Some(2) && blue == Some(0) => PixelFormat::Bgr,
            4 if red == Some(0) && blue == Some(2) => PixelFormat::Rgba,
            4 if red == Some(2) && blue == Some(0) => PixelFormat::Bgra,
            _ => return Err(SurfaceError::UnsupportedChannelMasks),
        };
        Ok(format)
    }

    fn check(&self) -> Result<(), SurfaceError> {
        if !(3..=4).contains(&self.bytes_per_pixel) {
            return Err(SurfaceError::UnsupportedBytesPerPixel(
                self.bytes_per_pixel,
            ));
        }
        let colors = [self.red_mask, self.green_mask, self.blue_mask];
        if colors.iter().any(|mask| self.byte_index(*mask).is_none()) {
            return Err(SurfaceError::UnsupportedChannelMasks);
        }
        if self.has_alpha()
            && (self.bytes_per_pixel != 4
                || self.byte_index(self.alpha_mask).is_none())
        {
            return Err(SurfaceError::UnsupportedChannelMasks);
        }
        Ok(())
    }

    /// Memory position of the byte selected by a single-channel mask.
    fn byte_index(&self, mask: u32) -> Option<usize> {
        let shift = mask.trailing_zeros();
        if mask.count_ones() != 8 || shift % 8 != 0 {
            return None;
        }
        let byte = (shift / 8) as usize;
        if byte >= self.bytes_per_pixel {
            return None;
        }
        if cfg!(target_endian = "big") {
            Some(self.bytes_per_pixel - 1 - byte)
        } else {
            Some(byte)
        }
    }

    fn read_pixel(&self, bytes: &[u8]) -> u32 {
        let mut value = 0_u32;
        for (index, byte) in bytes[..self.bytes_per_pixel].iter().enumerate()
        {
            value |= (*byte as u32) << (self.shift_for_byte(index) * 8);
        }
        value
    }

    fn write_pixel(&self, value: u32, bytes: &mut [u8]) {
        for (index, byte) in
            bytes[..self.bytes_per_pixel].iter_mut().enumerate()
        {
            *byte = (value >> (self.shift_for_byte(index) * 8)) as u8;
        }
    }

    /// Significance of the byte at a memory position within a pixel value.
    fn shift_for_byte(&self, index: usize) -> usize {
        if cfg!(target_endian = "big") {
            self.bytes_per_pixel - 1 - index
        } else {
            index
        }
    }
}

fn extract(value: u32, mask: u32) -> u32 {
    if mask == 0 {
        0xff
    } else {
        (value & mask) >> mask.trailing_zeros()
    }
}

fn place(channel: u32, mask: u32) -> u32 {
    if mask == 0 {
        0
    } else {
        (channel << mask.trailing_zeros()) & mask
    }
}

/// A host-memory pixel buffer waiting to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,

    /// Bytes from the start of one row to the start of the next.
    pub pitch: usize,

    pub format: SurfaceFormat,
    pub pixels: Vec<u8>,
}

impl Surface {
    /// A surface whose rows are tightly packed.
    pub fn packed(
        width: u32,
        height: u32,
        format: SurfaceFormat,
        pixels: Vec<u8>,
    ) -> Self {
        Self {
            width,
            height,
            pitch: width as usize * format.bytes_per_pixel,
            format,
            pixels,
        }
    }

    /// Copy this surface into the canonical layout with tightly packed rows.
    ///
    /// The alpha channel is kept only if this surface has one.
    pub fn normalized(&self) -> Result<Surface, SurfaceError> {
        self.format.check()?;
        if self.width == 0 || self.height == 0 {
            return Err(SurfaceError::EmptySurface {
                width: self.width,
                height: self.height,
            });
        }

        let source_bpp = self.format.bytes_per_pixel;
        let row_bytes = self.width as usize * source_bpp;
        if self.pitch < row_bytes {
            return Err(SurfaceError::PitchTooSmall {
                pitch: self.pitch,
                width: self.width,
            });
        }
        let expected = self.pitch * (self.height as usize - 1) + row_bytes;
        if self.pixels.len() < expected {
            return Err(SurfaceError::PixelDataTooShort {
                expected,
                actual: self.pixels.len(),
            });
        }

        let target = SurfaceFormat::canonical(self.format.has_alpha());
        let target_bpp = target.bytes_per_pixel;
        let mut pixels =
            vec![0_u8; self.width as usize * self.height as usize * target_bpp];

        let rows = self
            .pixels
            .chunks(self.pitch)
            .zip(pixels.chunks_mut(self.width as usize * target_bpp));
        for (source_row, target_row) in rows {
            let source_pixels = source_row[..row_bytes].chunks(source_bpp);
            let target_pixels = target_row.chunks_mut(target_bpp);
            for (source, target_pixel) in source_pixels.zip(target_pixels) {
                let value = self.format.read_pixel(source);
                let converted = place(
                    extract(value, self.format.red_mask),
                    target.red_mask,
                ) | place(
                    extract(value, self.format.green_mask),
                    target.green_mask,
                ) | place(
                    extract(value, self.format.blue_mask),
                    target.blue_mask,
                ) | place(
                    extract(value, self.format.alpha_mask),
                    target.alpha_mask,
                );
                target.write_pixel(converted, target_pixel);
            }
        }

        Ok(Surface::packed(self.width, self.height, target, pixels))
    }
}
