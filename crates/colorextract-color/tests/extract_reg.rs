//! Dominant color extraction regression test
//!
//! Runs the whole pipeline on the poster fixture at every fine depth and
//! on the small reference scenarios.

use colorextract_color::{BackgroundPolicy, ExtractOptions, ReferencePalette, extract_dominant_colors};
use colorextract_core::{Color, PixelGrid};
use colorextract_test::{RegParams, load_test_image, poster};

fn summary(colors: &[colorextract_color::NamedColor]) -> Vec<(Color, &str)> {
    colors.iter().map(|c| (c.color, c.name.as_str())).collect()
}

#[test]
fn extract_reg() {
    let mut rp = RegParams::new("extract");
    let palette = ReferencePalette::builtin().expect("built-in palette");

    // Test 1-2: defaults on the poster
    eprintln!("=== Test 1: poster, default options ===");
    let grid = poster();
    let result = extract_dominant_colors(&grid, palette, &ExtractOptions::default()).unwrap();
    rp.compare_values(1.0 / 14.0, result.threshold(), 1e-12);
    rp.compare_eq(
        vec![
            (Color::new(239, 47, 31), "OrangeRed"),
            (Color::new(31, 63, 223), "RoyalBlue"),
            (Color::new(31, 191, 63), "LimeGreen"),
        ],
        summary(&result.colors),
    );

    // Test 3-11: every fine depth
    eprintln!("=== Test 3: fine depth sweep ===");
    let sweep: [(u8, &[(Color, &str)]); 9] = [
        (0, &[]),
        (1, &[(Color::new(255, 127, 127), "Salmon")]),
        (2, &[(Color::new(255, 63, 63), "Tomato")]),
        (
            3,
            &[
                (Color::new(239, 47, 31), "OrangeRed"),
                (Color::new(31, 63, 223), "RoyalBlue"),
                (Color::new(31, 191, 63), "LimeGreen"),
            ],
        ),
        (
            4,
            &[
                (Color::new(223, 39, 31), "Crimson"),
                (Color::new(31, 47, 207), "MediumBlue"),
                (Color::new(31, 175, 63), "LimeGreen"),
            ],
        ),
        (
            5,
            &[
                (Color::new(219, 39, 27), "Crimson"),
                (Color::new(23, 47, 207), "MediumBlue"),
                (Color::new(31, 167, 63), "SeaGreen"),
            ],
        ),
        (
            6,
            &[
                (Color::new(217, 37, 27), "Crimson"),
                (Color::new(23, 43, 203), "MediumBlue"),
                (Color::new(31, 163, 63), "SeaGreen"),
            ],
        ),
        (
            7,
            &[
                (Color::new(216, 36, 26), "Crimson"),
                (Color::new(21, 41, 201), "MediumBlue"),
                (Color::new(31, 161, 61), "ForestGreen"),
            ],
        ),
        (
            8,
            &[
                (Color::new(215, 35, 25), "FireBrick"),
                (Color::new(20, 40, 200), "MediumBlue"),
                (Color::new(30, 160, 60), "ForestGreen"),
            ],
        ),
    ];
    for (fine_bits, expected) in sweep {
        let options = ExtractOptions {
            fine_bits,
            ..Default::default()
        };
        let result = extract_dominant_colors(&grid, palette, &options).unwrap();
        rp.compare_eq(expected.to_vec(), summary(&result.colors));
    }

    // Test 12: keeping the background adds White in front
    let options = ExtractOptions {
        background: BackgroundPolicy::Keep,
        ..Default::default()
    };
    let kept = extract_dominant_colors(&grid, palette, &options).unwrap();
    rp.compare_eq(
        vec![
            (Color::WHITE, "White"),
            (Color::new(239, 47, 31), "OrangeRed"),
            (Color::new(31, 63, 223), "RoyalBlue"),
            (Color::new(31, 191, 63), "LimeGreen"),
        ],
        summary(&kept.colors),
    );

    // Test 13: coarse depth 0 folds every peak into one cluster
    let options = ExtractOptions {
        coarse_bits: 0,
        ..Default::default()
    };
    let folded = extract_dominant_colors(&grid, palette, &options).unwrap();
    rp.compare_eq(vec![(Color::new(135, 87, 87), "DimGray")], summary(&folded.colors));

    // Test 14-17: both fixture files agree with the synthetic image
    for file in ["poster.ppm", "poster.png"] {
        let image = load_test_image(file).expect(file);
        rp.compare_grids(&grid, &image);
        let from_file = extract_dominant_colors(&image, palette, &ExtractOptions::default()).unwrap();
        rp.compare_eq(summary(&result.colors), summary(&from_file.colors));
    }

    // Test 18: named colors as text, checked against the golden copy
    let text: String = result
        .colors
        .iter()
        .map(|c| format!("{} {}\n", c.color, c.name))
        .collect();
    rp.write_data_and_check(text.as_bytes(), "txt")
        .expect("write extraction summary");

    // Test 19-21: 2x2 with three red pixels and one blue
    eprintln!("=== Test 19: reference scenarios ===");
    let red = Color::new(255, 0, 0);
    let small = PixelGrid::from_vec(2, 2, vec![red, red, red, Color::new(0, 0, 255)]).unwrap();
    let options = ExtractOptions {
        background: BackgroundPolicy::Keep,
        ..Default::default()
    };
    let kept = extract_dominant_colors(&small, palette, &options).unwrap();
    rp.compare_eq(vec![(red, "Red")], summary(&kept.colors));
    let removed = extract_dominant_colors(&small, palette, &ExtractOptions::default()).unwrap();
    rp.compare_values(0.0, removed.colors.len() as f64, 0.0);
    rp.compare_values(0.0, removed.peaks.len() as f64, 0.0);

    // Test 22+: one mid-gray pixel is Gray at 4 bits and above
    let gray = PixelGrid::filled(1, 1, Color::gray(128)).unwrap();
    for fine_bits in 4..=8 {
        let options = ExtractOptions {
            fine_bits,
            background: BackgroundPolicy::Keep,
            ..Default::default()
        };
        let result = extract_dominant_colors(&gray, palette, &options).unwrap();
        rp.compare_eq(vec!["Gray"], result.colors.iter().map(|c| c.name.as_str()).collect::<Vec<_>>());
    }

    assert!(rp.cleanup(), "extract regression test failed");
}
