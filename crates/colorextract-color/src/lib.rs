//! colorextract Color - Dominant color extraction and naming
//!
//! This crate finds the few colors that dominate an image and names them:
//!
//! - **Quantization** ([`quantize`]): reduce each channel to `2^bits` levels
//! - **Histogram** ([`histogram`]): count quantized colors, sequentially or on a thread pool
//! - **Peak detection** ([`peaks`]): keep colors above the uniform share, drop the background
//! - **Clustering** ([`cluster`]): group peaks at a coarse depth and average them
//! - **Reference palette** ([`palette`]): the X11 color names, or any `Name #RRGGBB` table
//! - **Naming** ([`namer`]): nearest palette color by Euclidean RGB distance
//! - **Pipeline** ([`pipeline`]): all of the above in one call
//!
//! # Example
//!
//! ```
//! use colorextract_color::{BackgroundPolicy, ExtractOptions, ReferencePalette, extract_dominant_colors};
//! use colorextract_core::{Color, PixelGrid};
//!
//! let red = Color::new(255, 0, 0);
//! let blue = Color::new(0, 0, 255);
//! let grid = PixelGrid::from_vec(2, 2, vec![red, red, red, blue]).unwrap();
//!
//! let options = ExtractOptions {
//!     background: BackgroundPolicy::Keep,
//!     ..Default::default()
//! };
//! let result = extract_dominant_colors(&grid, ReferencePalette::builtin().unwrap(), &options).unwrap();
//! assert_eq!(result.colors.len(), 1);
//! assert_eq!(result.colors[0].name, "Red");
//! ```

pub mod cluster;
pub mod error;
pub mod histogram;
pub mod namer;
pub mod palette;
pub mod peaks;
pub mod pipeline;
pub mod quantize;

// Re-export core types
pub use colorextract_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export quantization
pub use quantize::{QuantizeBits, quantize, quantize_channel};

// Re-export histogram
pub use histogram::{Histogram, build_histogram, build_histogram_parallel, default_workers};

// Re-export peak detection
pub use peaks::{BackgroundPolicy, Peak, PeakSet, detect_peaks};

// Re-export clustering
pub use cluster::{Cluster, Clusters, average_color, group_clusters, merge_clusters};

// Re-export palette and naming
pub use namer::{euclidean_distance, name, nearest, nearest_entry};
pub use palette::{ALIAS_SEPARATOR, PaletteEntry, ReferencePalette, X11_TABLE};

// Re-export the pipeline
pub use pipeline::{ExtractOptions, Extraction, NamedColor, extract_dominant_colors};
