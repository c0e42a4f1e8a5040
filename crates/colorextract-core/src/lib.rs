//! colorextract Core - Basic data structures for dominant color extraction
//!
//! This crate provides the fundamental data structures used throughout
//! the colorextract workspace:
//!
//! - [`Color`] - An exact 8-bit RGB triple, usable as a map key
//! - [`PixelGrid`] - A decoded, row-major image of [`Color`] values
//! - [`ImageFormat`] - Container formats understood by `colorextract-io`
//!
//! # Example
//!
//! ```
//! use colorextract_core::{Color, PixelGrid};
//!
//! let grid = PixelGrid::filled(4, 3, Color::new(255, 0, 0)).unwrap();
//! assert_eq!(grid.pixel_count(), 12);
//! assert_eq!(grid.get(3, 2), Some(Color::new(255, 0, 0)));
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod grid;

pub use color::Color;
pub use error::{Error, Result};
pub use format::ImageFormat;
pub use grid::PixelGrid;
