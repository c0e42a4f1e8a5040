//! PNG image format support

use crate::{IoError, IoResult};
use colorextract_core::{Color, PixelGrid};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette, low bit-depth and 16-bit images are normalized to 8 bits per
/// sample by the decoder before conversion.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG color type {:?} was not expanded",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..][..width as usize * samples];
        for px in row.chunks_exact(samples) {
            let color = match samples {
                1 | 2 => Color::gray(px[0]),
                _ => Color::new(px[0], px[1], px[2]),
            };
            pixels.push(color);
        }
    }

    Ok(PixelGrid::from_vec(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(grid: &PixelGrid, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data: Vec<u8> = grid.pixels().iter().flat_map(|c| c.channels()).collect();

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut grid = PixelGrid::new(5, 5).unwrap();
        grid.set(0, 0, Color::new(255, 0, 0)).unwrap();
        grid.set(1, 1, Color::new(0, 255, 0)).unwrap();
        grid.set(2, 2, Color::new(0, 0, 255)).unwrap();

        let mut buffer = Vec::new();
        write_png(&grid, &mut buffer).unwrap();

        let grid2 = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid2.dimensions(), (5, 5));
        assert_eq!(grid2.get(0, 0), Some(Color::new(255, 0, 0)));
        assert_eq!(grid2.get(1, 1), Some(Color::new(0, 255, 0)));
        assert_eq!(grid2.get(2, 2), Some(Color::new(0, 0, 255)));
        assert_eq!(grid2, grid);
    }

    #[test]
    fn test_png_grayscale_is_replicated() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 3, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 128, 255]).unwrap();
            writer.finish().unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.get(0, 0), Some(Color::gray(0)));
        assert_eq!(grid.get(1, 0), Some(Color::gray(128)));
        assert_eq!(grid.get(2, 0), Some(Color::gray(255)));
    }

    #[test]
    fn test_png_rgba_drops_alpha() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgba);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[10, 20, 30, 0, 40, 50, 60, 255]).unwrap();
            writer.finish().unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.pixels(), &[Color::new(10, 20, 30), Color::new(40, 50, 60)]);
    }

    #[test]
    fn test_png_garbage_is_decode_error() {
        let data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
        assert!(matches!(
            read_png(Cursor::new(data)),
            Err(IoError::DecodeError(_))
        ));
    }
}
