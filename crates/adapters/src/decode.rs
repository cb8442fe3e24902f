use std::io::Read;
use std::path::Path;

use image::{io::Reader as ImageReader, ImageFormat, Rgba, RgbaImage};
use partial_pages_application::{ApplicationError, PageDecoder};
use partial_pages_domain::{DomainError, SampledBitmap};
use png::{ColorType, Transformations};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl PageDecoder for ImageCrateDecoder {
    fn decode_downsampled(
        &self,
        path: &Path,
        factor: u32,
    ) -> Result<SampledBitmap, ApplicationError> {
        if factor == 0 {
            return Err(ApplicationError::InvalidInput(
                "downsample factor must be positive".to_string(),
            ));
        }

        let reader = ImageReader::open(path)
            .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))?
            .with_guessed_format()
            .map_err(|error| decode_error(path, error))?;

        let rgba = if reader.format() == Some(ImageFormat::Png) {
            decode_png_rows(reader.into_inner(), path)?
        } else {
            reader
                .decode()
                .map_err(|error| decode_error(path, error))?
                .to_rgba8()
        };

        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(ApplicationError::Decode(format!(
                "{}: image has no pixels",
                path.display()
            )));
        }
        Ok(subsample(&rgba, factor)?)
    }
}

fn decode_error(path: &Path, error: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Decode(format!("{}: {error}", path.display()))
}

/// Decodes a PNG row by row onto a transparent canvas.
///
/// A file cut off mid-stream keeps the rows that arrived and leaves the
/// rest at zero. Only an unreadable header is an error. Interlaced files
/// spread rows across passes, so those must decode completely.
fn decode_png_rows(source: impl Read, path: &Path) -> Result<RgbaImage, ApplicationError> {
    let mut decoder = png::Decoder::new(source);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|error| decode_error(path, error))?;

    let (width, height, interlaced) = {
        let info = reader.info();
        (info.width, info.height, info.interlaced)
    };
    let (color_type, _) = reader.output_color_type();
    if color_type == ColorType::Indexed {
        return Err(decode_error(path, "palette was not expanded"));
    }

    let mut canvas = RgbaImage::new(width, height);
    if interlaced {
        let mut buffer = vec![0; reader.output_buffer_size()];
        reader
            .next_frame(&mut buffer)
            .map_err(|error| decode_error(path, error))?;
        let line_size = reader.output_line_size(width);
        for (y, line) in buffer.chunks_exact(line_size).enumerate() {
            paint_row(&mut canvas, y as u32, line, color_type);
        }
        return Ok(canvas);
    }

    for y in 0..height {
        match reader.next_row() {
            Ok(Some(row)) => paint_row(&mut canvas, y, row.data(), color_type),
            Ok(None) => break,
            Err(error) => {
                debug!(path = %path.display(), %error, "image data ends at row {y}");
                break;
            }
        }
    }
    Ok(canvas)
}

fn paint_row(canvas: &mut RgbaImage, y: u32, samples: &[u8], color_type: ColorType) {
    let pixels = samples
        .chunks_exact(color_type.samples())
        .take(canvas.width() as usize);
    for (x, sample) in pixels.enumerate() {
        let rgba = match color_type {
            ColorType::Grayscale => [sample[0], sample[0], sample[0], 255],
            ColorType::GrayscaleAlpha => [sample[0], sample[0], sample[0], sample[1]],
            ColorType::Rgb => [sample[0], sample[1], sample[2], 255],
            ColorType::Rgba => [sample[0], sample[1], sample[2], sample[3]],
            ColorType::Indexed => continue,
        };
        canvas.put_pixel(x as u32, y, Rgba(rgba));
    }
}

/// Keeps one source pixel per `factor` x `factor` block, taken from the
/// block centre. Output dimensions round down but never reach zero.
fn subsample(source: &RgbaImage, factor: u32) -> Result<SampledBitmap, DomainError> {
    let width = (source.width() / factor).max(1);
    let height = (source.height() / factor).max(1);
    let offset = factor / 2;
    let max_x = source.width() - 1;
    let max_y = source.height() - 1;

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let source_y = y.saturating_mul(factor).saturating_add(offset).min(max_y);
        for x in 0..width {
            let source_x = x.saturating_mul(factor).saturating_add(offset).min(max_x);
            pixels.push(pack_argb(source.get_pixel(source_x, source_y).0));
        }
    }
    SampledBitmap::new(width, height, pixels)
}

fn pack_argb([r, g, b, a]: [u8; 4]) -> u32 {
    u32::from(a) << 24 | u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b)
}
