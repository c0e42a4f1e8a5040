//! Nearest-name lookup
//!
//! A color is named after the palette entry closest to it in Euclidean RGB
//! distance. The scan is linear over the palette in insertion order and
//! only a strictly smaller distance replaces the current best, so the
//! first entry wins ties.

use crate::palette::{PaletteEntry, ReferencePalette};
use colorextract_core::Color;

/// Euclidean distance between two colors in RGB space.
pub fn euclidean_distance(a: Color, b: Color) -> f64 {
    f64::from(a.distance_squared(b)).sqrt()
}

/// The palette entry closest to `color`, or `None` for an empty palette.
pub fn nearest_entry(color: Color, palette: &ReferencePalette) -> Option<&PaletteEntry> {
    let mut best: Option<(&PaletteEntry, u32)> = None;
    for entry in palette.entries() {
        // Squared distances order the same way as the roots
        let d = entry.color().distance_squared(color);
        if best.is_none_or(|(_, min)| d < min) {
            best = Some((entry, d));
        }
    }
    best.map(|(entry, _)| entry)
}

/// The palette color closest to `color`.
///
/// # Examples
///
/// ```
/// use colorextract_color::{ReferencePalette, nearest};
/// use colorextract_core::Color;
///
/// let palette = ReferencePalette::builtin().unwrap();
/// assert_eq!(nearest(Color::new(250, 5, 5), palette), Some(Color::new(255, 0, 0)));
/// ```
pub fn nearest(color: Color, palette: &ReferencePalette) -> Option<Color> {
    nearest_entry(color, palette).map(PaletteEntry::color)
}

/// The name of the palette color closest to `color`.
///
/// Colors with several names report them all, joined with `" aka "`.
pub fn name(color: Color, palette: &ReferencePalette) -> Option<&str> {
    nearest_entry(color, palette).map(PaletteEntry::name)
}
