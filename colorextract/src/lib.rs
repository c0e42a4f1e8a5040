//! colorextract - Dominant color extraction and naming
//!
//! Finds the few colors that dominate an image and names each one after
//! the nearest X11 color.
//!
//! # Overview
//!
//! - Image I/O (PNG, JPEG, binary PPM/PGM) in [`io`]
//! - Quantization, histogram peaks, clustering and naming in [`color`]
//!
//! # Example
//!
//! ```
//! use colorextract::color::{ExtractOptions, ReferencePalette, extract_dominant_colors};
//! use colorextract::{Color, PixelGrid};
//!
//! let grid = PixelGrid::from_fn(4, 4, |x, _| {
//!     if x < 2 { Color::WHITE } else { Color::new(0, 0, 255) }
//! })
//! .unwrap();
//! let palette = ReferencePalette::builtin().unwrap();
//! let result = extract_dominant_colors(&grid, palette, &ExtractOptions::default()).unwrap();
//! // White is seen first, so of the two equal halves it is the background.
//! assert_eq!(result.colors.len(), 1);
//! assert_eq!(result.colors[0].name, "Blue");
//! ```

// Re-export core types
pub use colorextract_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use colorextract_color as color;
pub use colorextract_io as io;
