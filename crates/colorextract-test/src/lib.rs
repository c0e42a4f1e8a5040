//! colorextract-test - Regression test framework for colorextract
//!
//! Regression tests record a numbered sequence of checks and report every
//! failure at the end, instead of stopping at the first `assert!`. Three
//! modes are supported:
//!
//! - **Generate**: Write golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use colorextract_test::RegParams;
//!
//! let mut rp = RegParams::new("peaks");
//! rp.compare_values(2.0, peaks.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{checkerboard, gradient, poster, stripes};
pub use params::{RegParams, RegTestMode};

use colorextract_core::PixelGrid;

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "poster.ppm")
pub fn load_test_image(name: &str) -> TestResult<PixelGrid> {
    let path = test_data_path(name);
    colorextract_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // colorextract-test is at crates/colorextract-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
