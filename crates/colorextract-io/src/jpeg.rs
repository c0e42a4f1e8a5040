//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes baseline
//! JPEG with `jpeg-encoder`. Grayscale, RGB and CMYK sources all decode
//! to RGB.

use crate::{IoError, IoResult};
use colorextract_core::{Color, PixelGrid};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use std::io::{Read, Write};

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let pixels: Vec<Color> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&v| Color::gray(v)).collect(),
        // Big-endian samples; keep the high byte.
        PixelFormat::L16 => data.chunks_exact(2).map(|s| Color::gray(s[0])).collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|s| Color::new(s[0], s[1], s[2]))
            .collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|s| {
                let k = 255 - s[3] as u32;
                let channel = |v: u8| ((255 - v as u32) * k / 255) as u8;
                Color::new(channel(s[0]), channel(s[1]), channel(s[2]))
            })
            .collect(),
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    Ok(PixelGrid::from_vec(
        u32::from(info.width),
        u32::from(info.height),
        pixels,
    )?)
}

/// Write a grid as baseline RGB JPEG.
///
/// # Arguments
/// * `quality` - Encoder quality, 1..=100
pub fn write_jpeg<W: Write>(grid: &PixelGrid, writer: W, quality: u8) -> IoResult<()> {
    let (width, height) = grid.dimensions();
    let too_large = || IoError::InvalidData(format!("{}x{} exceeds JPEG limits", width, height));
    let w = u16::try_from(width).map_err(|_| too_large())?;
    let h = u16::try_from(height).map_err(|_| too_large())?;

    let data: Vec<u8> = grid.pixels().iter().flat_map(|c| c.channels()).collect();
    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(&data, w, h, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
