//! Peak detection and clustering regression test

use colorextract_color::{
    BackgroundPolicy, QuantizeBits, build_histogram, detect_peaks, group_clusters, merge_clusters,
};
use colorextract_core::{Color, PixelGrid};
use colorextract_test::{RegParams, poster, stripes};

#[test]
fn peaks_reg() {
    let mut rp = RegParams::new("peaks");

    // Test 1-5: poster peaks with and without background removal
    eprintln!("=== Test 1: poster peaks ===");
    let grid = poster();
    let (hist, _) = build_histogram(&grid, QuantizeBits::FINE);

    let kept = detect_peaks(&hist, grid.pixel_count(), BackgroundPolicy::Keep).unwrap();
    rp.compare_values(1.0 / 14.0, kept.threshold(), 1e-12);
    rp.compare_values(5.0, kept.len() as f64, 0.0);

    let removed =
        detect_peaks(&hist, grid.pixel_count(), BackgroundPolicy::RemoveMostFrequent).unwrap();
    rp.compare_eq(Some(Color::WHITE), removed.background().map(|p| p.color));
    rp.compare_eq(
        vec![
            Color::new(255, 31, 31),
            Color::new(31, 63, 223),
            Color::new(223, 63, 31),
            Color::new(31, 191, 63),
        ],
        removed.colors().collect::<Vec<_>>(),
    );
    rp.compare_values(80.0 / 768.0, removed.peaks()[0].relative_frequency, 1e-12);

    // Test 6-8: the two reds share a coarse cluster
    eprintln!("=== Test 6: clusters ===");
    let clusters = group_clusters(&removed, QuantizeBits::COARSE);
    rp.compare_values(3.0, clusters.len() as f64, 0.0);
    rp.compare_eq(
        Some(vec![Color::new(255, 31, 31), Color::new(223, 63, 31)]),
        clusters.get(Color::new(255, 127, 127)).map(|c| c.members.clone()),
    );
    rp.compare_eq(
        vec![
            Color::new(239, 47, 31),
            Color::new(31, 63, 223),
            Color::new(31, 191, 63),
        ],
        merge_clusters(&removed, QuantizeBits::COARSE),
    );

    // Test 9-10: partition, every peak in exactly one cluster
    let members: usize = clusters.iter().map(|c| c.members.len()).sum();
    rp.compare_values(removed.len() as f64, members as f64, 0.0);
    let pure = clusters
        .iter()
        .all(|c| c.members.iter().all(|&m| colorextract_color::quantize(m, QuantizeBits::COARSE) == c.key));
    rp.compare_values(1.0, if pure { 1.0 } else { 0.0 }, 0.0);

    // Test 11-12: equal stripes are all peaks, the first one is background
    eprintln!("=== Test 11: uniform stripes ===");
    let colors = [
        Color::new(255, 0, 0),
        Color::new(0, 255, 0),
        Color::new(0, 0, 255),
    ];
    let flat = stripes(&colors, 4, 4);
    let (hist, _) = build_histogram(&flat, QuantizeBits::FINE);
    let peaks = detect_peaks(&hist, flat.pixel_count(), BackgroundPolicy::RemoveMostFrequent).unwrap();
    rp.compare_eq(Some(colors[0]), peaks.background().map(|p| p.color));
    rp.compare_eq(colors[1..].to_vec(), peaks.colors().collect::<Vec<_>>());

    // Test 13: a one-color image leaves nothing after background removal
    let solid = PixelGrid::filled(5, 5, Color::new(10, 200, 10)).unwrap();
    let (hist, _) = build_histogram(&solid, QuantizeBits::FINE);
    let peaks = detect_peaks(&hist, solid.pixel_count(), BackgroundPolicy::RemoveMostFrequent).unwrap();
    rp.compare_values(0.0, peaks.len() as f64, 0.0);

    assert!(rp.cleanup(), "peaks regression test failed");
}
