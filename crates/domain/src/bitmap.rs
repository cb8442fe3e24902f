use crate::DomainError;

/// Linear scale-down applied when decoding pages for the partial check.
pub const DOWNSAMPLE_FACTOR: u32 = 16;

/// A decoded, downsampled page with packed ARGB pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl SampledBitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, DomainError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(DomainError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Copies the `width` x `height` region at (`x`, `y`) into `buffer`, row by row.
    pub fn read_pixels(
        &self,
        buffer: &mut [u32],
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<(), DomainError> {
        let fits_x = x.checked_add(width).is_some_and(|end| end <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|end| end <= self.height);
        if !fits_x || !fits_y {
            return Err(DomainError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                bitmap_width: self.width,
                bitmap_height: self.height,
            });
        }

        let row_len = width as usize;
        let required = row_len * height as usize;
        if buffer.len() < required {
            return Err(DomainError::BufferTooSmall {
                required,
                actual: buffer.len(),
            });
        }

        for row in 0..height as usize {
            let src_start = (y as usize + row) * self.width as usize + x as usize;
            let dst_start = row * row_len;
            buffer[dst_start..dst_start + row_len]
                .copy_from_slice(&self.pixels[src_start..src_start + row_len]);
        }
        Ok(())
    }
}

/// A band is blank when no pixel in it was ever painted.
pub fn is_blank_band(pixels: &[u32]) -> bool {
    pixels.iter().all(|&pixel| pixel == 0)
}
