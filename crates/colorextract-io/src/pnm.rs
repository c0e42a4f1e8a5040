//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P5 binary) and PPM (P6 binary), writes PPM (P6).
//! ASCII variants (P2/P3) and PAM (P7) are not supported.
//! Samples with `maxval > 255` are stored as two big-endian bytes. Every
//! sample is rescaled from `0..=maxval` to `0..=255`.

use crate::{IoError, IoResult};
use colorextract_core::{Color, PixelGrid};
use std::io::{BufRead, Write};

/// Read a PNM image (P5/P6) from a reader.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<PixelGrid> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut header = HeaderCursor { data: &data, pos: 0 };
    let magic = header.token()?;
    let channels = match magic {
        b"P5" => 1,
        b"P6" => 3,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant {:?}",
                String::from_utf8_lossy(magic)
            )));
        }
    };
    let width = header.number()?;
    let height = header.number()?;
    let maxval = header.number()?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("invalid PNM maxval {}", maxval)));
    }
    // Exactly one whitespace byte separates the header from the raster.
    let raster = &data[(header.pos + 1).min(data.len())..];

    let bytes_per_sample = if maxval > 255 { 2 } else { 1 };
    let stride = channels * bytes_per_sample;
    let expected = width as usize * height as usize * stride;
    if raster.len() < expected {
        return Err(IoError::InvalidData(format!(
            "PNM raster truncated: expected {} bytes, got {}",
            expected,
            raster.len()
        )));
    }

    let scale = |v: u32| -> u8 {
        if maxval == 255 {
            v as u8
        } else {
            ((v * 255 + maxval / 2) / maxval).min(255) as u8
        }
    };
    let pixels = raster[..expected]
        .chunks_exact(stride)
        .map(|px| {
            let sample = |c: usize| {
                let at = c * bytes_per_sample;
                if bytes_per_sample == 2 {
                    scale((u32::from(px[at]) << 8) | u32::from(px[at + 1]))
                } else {
                    scale(u32::from(px[at]))
                }
            };
            if channels == 1 {
                Color::gray(sample(0))
            } else {
                Color::new(sample(0), sample(1), sample(2))
            }
        })
        .collect();

    Ok(PixelGrid::from_vec(width, height, pixels)?)
}

/// Write a grid as binary PPM (P6, maxval 255).
pub fn write_pnm<W: Write>(grid: &PixelGrid, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", grid.width(), grid.height())?;
    let data: Vec<u8> = grid.pixels().iter().flat_map(|c| c.channels()).collect();
    writer.write_all(&data)?;
    Ok(())
}

/// Whitespace- and comment-aware tokenizer over the PNM header.
struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn token(&mut self) -> IoResult<&'a [u8]> {
        loop {
            match self.data.get(self.pos) {
                Some(b'#') => {
                    while self.data.get(self.pos).is_some_and(|&b| b != b'\n') {
                        self.pos += 1;
                    }
                }
                Some(b) if b.is_ascii_whitespace() => self.pos += 1,
                Some(_) => break,
                None => return Err(IoError::InvalidData("PNM header truncated".to_string())),
            }
        }
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "bad PNM header field {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pnm_roundtrip() {
        let grid = PixelGrid::from_fn(4, 3, |x, y| Color::new(x as u8 * 60, y as u8 * 80, 5)).unwrap();
        let mut buffer = Vec::new();
        write_pnm(&grid, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P6\n4 3\n255\n"));
        assert_eq!(read_pnm(Cursor::new(buffer)).unwrap(), grid);
    }

    #[test]
    fn test_pgm_with_comment() {
        let mut data = b"P5\n# made by hand\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[7, 250]);
        let grid = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(grid.pixels(), &[Color::gray(7), Color::gray(250)]);
    }

    #[test]
    fn test_pnm_low_maxval_is_rescaled() {
        let mut data = b"P6 1 1 15\n".to_vec();
        data.extend_from_slice(&[15, 0, 8]);
        let grid = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(grid.get(0, 0), Some(Color::new(255, 0, 136)));
    }

    #[test]
    fn test_pnm_wide_maxval_is_rescaled() {
        let mut data = b"P5 3 1 1023\n".to_vec();
        data.extend_from_slice(&[0x03, 0xFF, 0x02, 0x00, 0x00, 0x00]);
        let grid = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(
            grid.pixels(),
            &[Color::WHITE, Color::gray(128), Color::BLACK]
        );

        let mut data = b"P6 1 1 65535\n".to_vec();
        data.extend_from_slice(&[0xFF, 0xFF, 0x80, 0x00, 0x00, 0xFF]);
        let grid = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(grid.get(0, 0), Some(Color::new(255, 128, 1)));
    }

    #[test]
    fn test_pnm_truncated_raster() {
        let mut data = b"P6\n2 2\n255\n".to_vec();
        data.extend_from_slice(&[1, 2, 3]);
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_pnm_ascii_rejected() {
        let data = b"P3\n1 1\n255\n1 2 3\n".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
