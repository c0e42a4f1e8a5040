//! Histogram peak detection
//!
//! A quantized color is a *peak* when its relative frequency reaches the
//! frequency every color would have if the pixels were spread uniformly
//! over the distinct colors actually observed:
//!
//! ```text
//! threshold = (total / distinct) / total = 1 / distinct
//! peak      <=> count / total >= threshold
//! ```
//!
//! The comparison is done exactly as `count * distinct >= total`.

use crate::histogram::Histogram;
use crate::{ColorError, ColorResult};
use colorextract_core::Color;

/// What to do with the single most frequent peak.
///
/// Removing it assumes the dominant color of a photo or scan is its
/// background (paper, sky, studio wall), not a subject color. This is a
/// simple heuristic; images with large subjects will lose a real color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackgroundPolicy {
    /// Drop the most frequent peak before clustering
    #[default]
    RemoveMostFrequent,
    /// Keep every peak
    Keep,
}

/// A histogram entry that met the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Quantized color
    pub color: Color,
    /// Pixel count
    pub count: u64,
    /// `count / total`
    pub relative_frequency: f64,
}

/// The peaks selected from one histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakSet {
    peaks: Vec<Peak>,
    threshold: f64,
    background: Option<Peak>,
}

impl PeakSet {
    /// Peaks in histogram order, background excluded.
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    /// Iterate peak colors in histogram order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.peaks.iter().map(|p| p.color)
    }

    /// Number of peaks.
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    /// Check if no peak survived.
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Check if `color` is a peak.
    pub fn contains(&self, color: Color) -> bool {
        self.peaks.iter().any(|p| p.color == color)
    }

    /// The relative-frequency threshold, `1 / distinct colors`.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The peak removed as background, if any.
    pub fn background(&self) -> Option<&Peak> {
        self.background.as_ref()
    }
}

/// Select the histogram peaks.
///
/// While scanning, the color with the strictly highest count is tracked,
/// so the first one seen wins ties. With
/// [`BackgroundPolicy::RemoveMostFrequent`] that color is left out of the
/// result.
///
/// # Errors
///
/// Returns [`ColorError::EmptyImage`] if the histogram has no colors or
/// `total_pixels` is zero.
pub fn detect_peaks(
    histogram: &Histogram,
    total_pixels: u64,
    background: BackgroundPolicy,
) -> ColorResult<PeakSet> {
    let distinct = histogram.len() as u64;
    if distinct == 0 || total_pixels == 0 {
        return Err(ColorError::EmptyImage);
    }

    let threshold = 1.0 / distinct as f64;
    let mut peaks: Vec<Peak> = Vec::new();
    let mut most_frequent: Option<usize> = None;

    for (color, count) in histogram.iter() {
        if u128::from(count) * u128::from(distinct) < u128::from(total_pixels) {
            continue;
        }
        let peak = Peak {
            color,
            count,
            relative_frequency: count as f64 / total_pixels as f64,
        };
        log::trace!(
            "peak {}: relative frequency {:.4}",
            color,
            peak.relative_frequency
        );
        if most_frequent.is_none_or(|i| count > peaks[i].count) {
            most_frequent = Some(peaks.len());
        }
        peaks.push(peak);
    }

    let removed = match (background, most_frequent) {
        (BackgroundPolicy::RemoveMostFrequent, Some(i)) => Some(peaks.remove(i)),
        _ => None,
    };

    log::debug!(
        "peaks: {} of {} colors over threshold {:.4}{}",
        peaks.len() + usize::from(removed.is_some()),
        distinct,
        threshold,
        removed
            .map(|p| format!(", background {} removed", p.color))
            .unwrap_or_default()
    );
    if peaks.is_empty() && removed.is_some() {
        log::warn!("background removal left no peaks");
    }

    Ok(PeakSet {
        peaks,
        threshold,
        background: removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(counts: &[(Color, u64)]) -> Histogram {
        let mut h = Histogram::new();
        for &(color, n) in counts {
            for _ in 0..n {
                h.increment(color);
            }
        }
        h
    }

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    #[test]
    fn test_threshold_is_uniform_share() {
        let h = histogram(&[(RED, 3), (BLUE, 1)]);
        let peaks = detect_peaks(&h, 4, BackgroundPolicy::Keep).unwrap();
        assert_eq!(peaks.threshold(), 0.5);
        assert_eq!(peaks.colors().collect::<Vec<_>>(), vec![RED]);
        assert_eq!(peaks.peaks()[0].relative_frequency, 0.75);
        assert!(peaks.background().is_none());
    }

    #[test]
    fn test_exact_threshold_is_a_peak() {
        let h = histogram(&[(RED, 2), (GREEN, 2), (BLUE, 2)]);
        let peaks = detect_peaks(&h, 6, BackgroundPolicy::Keep).unwrap();
        assert_eq!(peaks.len(), 3);
    }

    #[test]
    fn test_background_removal_drops_max() {
        let h = histogram(&[(GREEN, 4), (RED, 5), (BLUE, 1)]);
        let peaks = detect_peaks(&h, 10, BackgroundPolicy::RemoveMostFrequent).unwrap();
        assert_eq!(peaks.colors().collect::<Vec<_>>(), vec![GREEN]);
        assert_eq!(peaks.background().map(|p| p.color), Some(RED));
        assert!(!peaks.contains(RED));
    }

    #[test]
    fn test_tie_first_seen_is_background() {
        let h = histogram(&[(BLUE, 3), (GREEN, 3), (RED, 1)]);
        let peaks = detect_peaks(&h, 7, BackgroundPolicy::RemoveMostFrequent).unwrap();
        assert_eq!(peaks.background().map(|p| p.color), Some(BLUE));
        assert_eq!(peaks.colors().collect::<Vec<_>>(), vec![GREEN]);
    }

    #[test]
    fn test_single_color_removed_as_background() {
        let h = histogram(&[(GREEN, 9)]);
        let peaks = detect_peaks(&h, 9, BackgroundPolicy::RemoveMostFrequent).unwrap();
        assert!(peaks.is_empty());
        assert_eq!(peaks.threshold(), 1.0);
    }

    #[test]
    fn test_peaks_subset_of_histogram() {
        let h = histogram(&[(RED, 7), (GREEN, 2), (BLUE, 5), (Color::WHITE, 1)]);
        let peaks = detect_peaks(&h, 15, BackgroundPolicy::Keep).unwrap();
        assert!(peaks.colors().all(|c| h.contains(c)));
        for p in peaks.peaks() {
            assert_eq!(h.get(p.color), Some(p.count));
        }
    }

    #[test]
    fn test_empty_histogram_is_error() {
        let h = Histogram::new();
        assert!(matches!(
            detect_peaks(&h, 0, BackgroundPolicy::Keep),
            Err(ColorError::EmptyImage)
        ));
    }
}
