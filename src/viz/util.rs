//! Utility functions for visualization: colors, label formatting, label-area sizing.

use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Whole-number count label with thousands separators (`12,345`).
pub fn format_count(v: f64) -> String {
    let n = v.round() as i64;
    n.to_formatted_string(&Locale::en)
}

/// Speed tick label: fewer decimals as magnitude grows.
pub fn format_speed(v: f64) -> String {
    let a = v.abs();
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    format!("{:.*}", prec, v)
}

/// Compute a tight left label area width for the Y axis (in pixels),
/// based on the count labels that will appear between `0` and `ymax`.
///
/// Returns a width clamped to a sensible range to avoid extremes.
pub fn compute_left_label_area_px(ymax: f64, ticks: usize, font_px: u32) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let s = format_count(ymax * t);
        max_px = max_px.max(estimate_text_width_px(&s, font_px));
    }

    // Room for tick marks and the rotated axis title.
    let with_padding = max_px.saturating_add(40);
    with_padding.clamp(60, 140)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_labels_use_thousands_separators() {
        assert_eq!(format_count(12345.4), "12,345");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn label_area_is_clamped() {
        assert_eq!(compute_left_label_area_px(1.0, 10, 14), 60);
        assert!(compute_left_label_area_px(1.0e12, 10, 14) <= 140);
    }
}
