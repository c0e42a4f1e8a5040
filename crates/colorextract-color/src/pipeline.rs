//! Dominant color extraction
//!
//! Runs the full pipeline over one image:
//!
//! 1. quantize every pixel at `fine_bits` and build the histogram
//! 2. keep the peaks (colors at or above the uniform share), optionally
//!    dropping the most frequent one as background
//! 3. group the peaks by their quantization at `coarse_bits` and average
//!    each group
//! 4. name every average after its nearest palette color
//!
//! Stages run in this order and any error aborts the whole extraction.

use crate::cluster::merge_clusters;
use crate::histogram::{Histogram, build_histogram_parallel};
use crate::namer::nearest_entry;
use crate::palette::ReferencePalette;
use crate::peaks::{BackgroundPolicy, PeakSet, detect_peaks};
use crate::quantize::QuantizeBits;
use crate::{ColorError, ColorResult};
use colorextract_core::{Color, PixelGrid};

/// Options for [`extract_dominant_colors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractOptions {
    /// Bits per channel for the histogram (0..=8)
    pub fine_bits: u8,
    /// Bits per channel for clustering peaks (0..=8)
    pub coarse_bits: u8,
    /// Whether the most frequent peak is discarded
    pub background: BackgroundPolicy,
    /// Threads used for the histogram scan (at least 1)
    pub workers: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            fine_bits: QuantizeBits::FINE.bits(),
            coarse_bits: QuantizeBits::COARSE.bits(),
            background: BackgroundPolicy::RemoveMostFrequent,
            workers: 1,
        }
    }
}

impl ExtractOptions {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] for a bit depth above 8 or
    /// zero workers.
    pub fn validate(&self) -> ColorResult<()> {
        self.bits()?;
        if self.workers == 0 {
            return Err(ColorError::InvalidParameters(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn bits(&self) -> ColorResult<(QuantizeBits, QuantizeBits)> {
        Ok((
            QuantizeBits::new(self.fine_bits)?,
            QuantizeBits::new(self.coarse_bits)?,
        ))
    }
}

/// A representative color and the name of its nearest palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedColor {
    pub color: Color,
    pub name: String,
}

/// Result of [`extract_dominant_colors`], with the intermediate stages
/// kept for diagnostics.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Named representative colors, in cluster creation order
    pub colors: Vec<NamedColor>,
    /// Histogram at `fine_bits`
    pub histogram: Histogram,
    /// Peaks selected from the histogram
    pub peaks: PeakSet,
    /// The input quantized at `fine_bits`
    pub quantized: PixelGrid,
}

impl Extraction {
    /// Relative-frequency threshold used to select peaks.
    pub fn threshold(&self) -> f64 {
        self.peaks.threshold()
    }
}

/// Extract and name the dominant colors of `grid`.
///
/// # Errors
///
/// - [`ColorError::InvalidParameters`] if `options` fail
///   [`ExtractOptions::validate`] or `palette` is empty
/// - [`ColorError::EmptyImage`] if `grid` has no pixels
pub fn extract_dominant_colors(
    grid: &PixelGrid,
    palette: &ReferencePalette,
    options: &ExtractOptions,
) -> ColorResult<Extraction> {
    options.validate()?;
    let (fine, coarse) = options.bits()?;
    if palette.is_empty() {
        return Err(ColorError::InvalidParameters(
            "reference palette is empty".to_string(),
        ));
    }
    if grid.is_empty() {
        return Err(ColorError::EmptyImage);
    }

    let (histogram, quantized) = build_histogram_parallel(grid, fine, options.workers)?;
    let peaks = detect_peaks(&histogram, grid.pixel_count(), options.background)?;

    let mut colors = Vec::new();
    for color in merge_clusters(&peaks, coarse) {
        let entry = nearest_entry(color, palette).ok_or_else(|| {
            ColorError::InvalidParameters("reference palette is empty".to_string())
        })?;
        log::trace!("named {} as {}", color, entry.name());
        colors.push(NamedColor {
            color,
            name: entry.name().to_string(),
        });
    }

    log::debug!(
        "extract: {}x{} image, {} dominant colors",
        grid.width(),
        grid.height(),
        colors.len()
    );

    Ok(Extraction {
        colors,
        histogram,
        peaks,
        quantized,
    })
}
