//! colorextract-io - Image I/O for colorextract
//!
//! Decodes image files into a [`PixelGrid`] and encodes grids back to disk.
//! Every decoder flattens its input to opaque 8-bit RGB: grayscale is
//! replicated across the three channels and alpha is dropped.
//!
//! | format | read | write | feature |
//! |--------|------|-------|---------|
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | yes   | `jpeg` |
//! | PNM (P5/P6) | yes | yes (P6) | `pnm` |
//!
//! The format is sniffed from the file header on read, and chosen by the
//! caller on write.

pub mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use colorextract_core::ImageFormat;
pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};

use colorextract_core::PixelGrid;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Default quality used when writing JPEG files.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read, and
/// [`IoError::UnsupportedFormat`] if the header matches no enabled format.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let grid = read_image_mem(&data)?;
    log::debug!(
        "read {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelGrid> {
    let format = detect_format_from_bytes(data)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

/// Write an image to a file path in the given format.
///
/// Passing [`ImageFormat::Unknown`] picks the format from the path's
/// extension.
pub fn write_image<P: AsRef<Path>>(grid: &PixelGrid, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => ImageFormat::from_path(path),
        f => f,
    };
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(grid, &mut writer, format)?;
    writer.flush()?;
    log::debug!("wrote {} as {:?}", path.display(), format);
    Ok(())
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(grid: &PixelGrid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(grid, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_to<W: Write>(grid: &PixelGrid, writer: W, format: ImageFormat) -> IoResult<()> {
    if grid.is_empty() {
        return Err(IoError::InvalidData(
            "cannot encode an image with no pixels".to_string(),
        ));
    }
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(grid, writer, DEFAULT_JPEG_QUALITY),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(grid, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write {:?}",
            other
        ))),
    }
}
