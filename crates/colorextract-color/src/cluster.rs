//! Coarse re-clustering of peaks
//!
//! Peaks are grouped by quantizing them again at a much lower depth: at
//! 1 bit per channel every channel of a key is `0`, `127` or `255`, which
//! gives 27 possible clusters. Each cluster is then replaced by the mean of
//! its members' fine colors.

use crate::peaks::PeakSet;
use crate::quantize::{QuantizeBits, quantize};
use colorextract_core::Color;
use std::collections::HashMap;

/// One group of peaks sharing a coarse bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Coarse quantization shared by every member
    pub key: Color,
    /// Fine (histogram-level) colors of the member peaks, in peak order
    pub members: Vec<Color>,
}

impl Cluster {
    /// Per-channel arithmetic mean of the members, truncated.
    pub fn average(&self) -> Color {
        average_color(&self.members).unwrap_or(self.key)
    }
}

/// Peaks partitioned by coarse bucket, in cluster creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clusters {
    clusters: Vec<Cluster>,
    index: HashMap<Color, usize>,
}

impl Clusters {
    /// Group `colors` by their quantization at `coarse`.
    pub fn from_colors<I>(colors: I, coarse: QuantizeBits) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        let mut out = Self::default();
        for color in colors {
            let key = quantize(color, coarse);
            match out.index.get(&key) {
                Some(&i) => out.clusters[i].members.push(color),
                None => {
                    out.index.insert(key, out.clusters.len());
                    out.clusters.push(Cluster {
                        key,
                        members: vec![color],
                    });
                }
            }
        }
        out
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Check if there are no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Iterate clusters in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    /// Look up the cluster for a coarse key.
    pub fn get(&self, key: Color) -> Option<&Cluster> {
        self.index.get(&key).map(|&i| &self.clusters[i])
    }

    /// One representative color per cluster, in creation order.
    pub fn representatives(&self) -> Vec<Color> {
        self.clusters.iter().map(Cluster::average).collect()
    }
}

/// Group the peaks of `peaks` into coarse clusters.
pub fn group_clusters(peaks: &PeakSet, coarse: QuantizeBits) -> Clusters {
    let clusters = Clusters::from_colors(peaks.colors(), coarse);
    log::debug!(
        "clusters: {} peaks into {} clusters at {}",
        peaks.len(),
        clusters.len(),
        coarse
    );
    clusters
}

/// Cluster the peaks and return one averaged color per cluster.
///
/// # Examples
///
/// ```
/// use colorextract_color::{BackgroundPolicy, QuantizeBits, build_histogram, detect_peaks, merge_clusters};
/// use colorextract_core::{Color, PixelGrid};
///
/// let grid = PixelGrid::from_vec(2, 1, vec![Color::new(255, 0, 0), Color::new(223, 0, 0)]).unwrap();
/// let (hist, _) = build_histogram(&grid, QuantizeBits::FINE);
/// let peaks = detect_peaks(&hist, grid.pixel_count(), BackgroundPolicy::Keep).unwrap();
/// assert_eq!(merge_clusters(&peaks, QuantizeBits::COARSE), vec![Color::new(239, 0, 0)]);
/// ```
pub fn merge_clusters(peaks: &PeakSet, coarse: QuantizeBits) -> Vec<Color> {
    group_clusters(peaks, coarse).representatives()
}

/// Per-channel mean with integer truncation, or `None` for no colors.
pub fn average_color(colors: &[Color]) -> Option<Color> {
    if colors.is_empty() {
        return None;
    }
    let n = colors.len() as u64;
    let (r, g, b) = colors.iter().fold((0u64, 0u64, 0u64), |(r, g, b), c| {
        (r + c.red as u64, g + c.green as u64, b + c.blue as u64)
    });
    Some(Color::new((r / n) as u8, (g / n) as u8, (b / n) as u8))
}
