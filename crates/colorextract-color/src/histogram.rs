//! Quantized color histogram
//!
//! Counts how many pixels fall into each quantized color.
//!
//! # Scan order
//!
//! Pixels are visited row-major (top row first, left to right), and the
//! histogram iterates its colors in the order they were first seen during
//! that scan. Every later tie-break in the pipeline ("first seen wins")
//! refers to this order, so it is part of the contract rather than an
//! accident of the container.

use crate::quantize::{QuantizeBits, quantize};
use crate::{ColorError, ColorResult};
use colorextract_core::{Color, PixelGrid};
use std::collections::HashMap;
use std::thread;

/// Occurrence counts per quantized color, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    entries: Vec<(Color, u64)>,
    index: HashMap<Color, usize>,
    total: u64,
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `color`.
    pub fn increment(&mut self, color: Color) {
        self.add(color, 1);
    }

    fn add(&mut self, color: Color, count: u64) {
        match self.index.get(&color) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push((color, count));
            }
        }
        self.total += count;
    }

    /// Fold `other` into `self`.
    ///
    /// Colors new to `self` are appended in `other`'s order, so merging
    /// partial histograms of consecutive image bands in band order yields
    /// the same first-seen order as a single scan.
    pub fn merge(&mut self, other: &Histogram) {
        for &(color, count) in &other.entries {
            self.add(color, count);
        }
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no pixel has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count for `color`, if it occurs.
    pub fn get(&self, color: Color) -> Option<u64> {
        self.index.get(&color).map(|&i| self.entries[i].1)
    }

    /// Check if `color` occurs.
    pub fn contains(&self, color: Color) -> bool {
        self.index.contains_key(&color)
    }

    /// Iterate `(color, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Quantize every pixel and count the results.
///
/// Returns the histogram together with the quantized grid, which is only
/// a diagnostic for visual inspection.
///
/// # Examples
///
/// ```
/// use colorextract_color::{QuantizeBits, build_histogram};
/// use colorextract_core::{Color, PixelGrid};
///
/// let grid = PixelGrid::filled(3, 2, Color::new(255, 0, 0)).unwrap();
/// let (hist, quantized) = build_histogram(&grid, QuantizeBits::FINE);
/// assert_eq!(hist.len(), 1);
/// assert_eq!(hist.total(), 6);
/// assert_eq!(quantized, grid);
/// ```
pub fn build_histogram(grid: &PixelGrid, bits: QuantizeBits) -> (Histogram, PixelGrid) {
    let mut histogram = Histogram::new();
    let quantized = grid.map(|&pixel| {
        let q = quantize(pixel, bits);
        histogram.increment(q);
        q
    });
    log::debug!(
        "histogram: {} distinct colors at {} over {} pixels",
        histogram.len(),
        bits,
        histogram.total()
    );
    (histogram, quantized)
}

/// Multi-threaded [`build_histogram`].
///
/// The grid is cut into `workers` bands of whole rows; each scoped thread
/// quantizes one band into its own partial histogram, and the partials are
/// merged in band order. The result is identical to the sequential scan,
/// including first-seen order.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `workers == 0`.
pub fn build_histogram_parallel(
    grid: &PixelGrid,
    bits: QuantizeBits,
    workers: usize,
) -> ColorResult<(Histogram, PixelGrid)> {
    if workers == 0 {
        return Err(ColorError::InvalidParameters(
            "workers must be at least 1".to_string(),
        ));
    }
    if workers == 1 || grid.height() < 2 {
        return Ok(build_histogram(grid, bits));
    }

    let partials: Vec<thread::Result<(Histogram, Vec<Color>)>> = thread::scope(|s| {
        let handles: Vec<_> = grid
            .row_bands(workers)
            .map(|band| {
                s.spawn(move || {
                    let mut histogram = Histogram::new();
                    let quantized: Vec<Color> = band
                        .iter()
                        .map(|&pixel| {
                            let q = quantize(pixel, bits);
                            histogram.increment(q);
                            q
                        })
                        .collect();
                    (histogram, quantized)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });

    let mut histogram = Histogram::new();
    let mut data = Vec::with_capacity(grid.pixels().len());
    let bands = partials.len();
    for partial in partials {
        let (part, quantized) = partial
            .map_err(|_| ColorError::QuantizationError("histogram worker panicked".to_string()))?;
        histogram.merge(&part);
        data.extend(quantized);
    }
    let quantized = PixelGrid::from_vec(grid.width(), grid.height(), data)?;

    log::debug!(
        "histogram: {} distinct colors at {} over {} pixels ({} bands)",
        histogram.len(),
        bits,
        histogram.total(),
        bands
    );
    Ok((histogram, quantized))
}

/// Number of worker threads used when the caller does not choose one.
pub fn default_workers() -> usize {
    num_cpus::get().max(1)
}
