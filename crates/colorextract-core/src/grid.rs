//! PixelGrid - The decoded image container
//!
//! A `PixelGrid` is a `width x height` array of [`Color`] with the origin at
//! the top-left corner.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major: index `y * width + x`
//! - Every iterator on this type visits pixels in that order, which is the
//!   scan order all histogram tie-breaking relies on
//! - Zero-sized grids are representable; consumers decide whether an empty
//!   image is an error

use crate::color::Color;
use crate::error::{Error, Result};

/// Row-major grid of RGB pixels.
///
/// # Examples
///
/// ```
/// use colorextract_core::{Color, PixelGrid};
///
/// let grid = PixelGrid::from_fn(2, 2, |x, y| Color::gray((x + 2 * y) as u8)).unwrap();
/// let order: Vec<u8> = grid.pixels().iter().map(|c| c.red).collect();
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<Color>,
}

impl PixelGrid {
    /// Create a grid with every pixel set to black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Color::BLACK)
    }

    /// Create a grid with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![color; len],
        })
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<Color>) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel, row by row.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Exact number of pixels, `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check whether the grid has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if the coordinate is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = color;
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    /// Get one row of pixels, or `None` if `y` is out of bounds.
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        Some(&self.data[start..start + self.width as usize])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // An empty buffer yields no chunks, so width 0 never reaches chunks(0).
        self.data.chunks(self.width.max(1) as usize)
    }

    /// Split the grid into at most `bands` contiguous horizontal bands of
    /// whole rows, top to bottom. Every pixel lands in exactly one band.
    pub fn row_bands(&self, bands: usize) -> impl Iterator<Item = &[Color]> {
        let bands = bands.max(1).min(self.height.max(1) as usize);
        let rows_per_band = (self.height as usize).div_ceil(bands).max(1);
        self.data.chunks(rows_per_band * self.width.max(1) as usize)
    }

    /// Create a new grid of the same size by mapping every pixel.
    pub fn map(&self, f: impl FnMut(&Color) -> Color) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let grid = PixelGrid::new(3, 2).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.pixel_count(), 6);
        assert!(grid.pixels().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn test_empty_grid_allowed() {
        let grid = PixelGrid::new(0, 5).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.pixel_count(), 0);
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.row_bands(4).count(), 0);
    }

    #[test]
    fn test_from_vec_length_check() {
        let err = PixelGrid::from_vec(2, 2, vec![Color::WHITE; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataLengthMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_get_set() {
        let mut grid = PixelGrid::new(4, 3).unwrap();
        grid.set(3, 2, Color::new(1, 2, 3)).unwrap();
        assert_eq!(grid.get(3, 2), Some(Color::new(1, 2, 3)));
        assert_eq!(grid.pixels()[11], Color::new(1, 2, 3));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(matches!(
            grid.set(0, 3, Color::WHITE),
            Err(Error::PixelOutOfBounds { x: 0, y: 3, .. })
        ));
    }

    #[test]
    fn test_rows_are_row_major() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| Color::new(x as u8, y as u8, 0)).unwrap();
        let rows: Vec<&[Color]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][2], Color::new(2, 0, 0));
        assert_eq!(rows[1][0], Color::new(0, 1, 0));
        assert_eq!(grid.row(1).unwrap(), rows[1]);
        assert!(grid.row(2).is_none());
    }

    #[test]
    fn test_row_bands_partition() {
        let grid = PixelGrid::from_fn(5, 7, |x, y| Color::new(x as u8, y as u8, 9)).unwrap();
        for bands in 1..10 {
            let parts: Vec<&[Color]> = grid.row_bands(bands).collect();
            assert!(parts.len() <= bands.max(1));
            assert!(parts.iter().all(|p| p.len() % 5 == 0));
            let joined: Vec<Color> = parts.concat();
            assert_eq!(joined, grid.pixels());
        }
    }

    #[test]
    fn test_map() {
        let grid = PixelGrid::filled(2, 2, Color::gray(10)).unwrap();
        let inverted = grid.map(|c| c.map_channels(|v| 255 - v));
        assert_eq!(inverted.get(1, 1), Some(Color::gray(245)));
        assert_eq!(inverted.dimensions(), grid.dimensions());
    }
}
