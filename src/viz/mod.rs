//! Visualization exports: a **PNG** speed histogram and an **HTML** ship map.
//!
//! - Histogram: 10 equal-width bins over the observed speed range, drawn with Plotters
//! - Map: Leaflet document with one marker per ship that has both coordinates
//!
//! Both exports overwrite their target file; the last successful render wins.

pub mod map;
pub mod types;
pub mod util;

pub use map::{collect_markers, render_map_html, save_ship_map};
pub use types::{
    Bin, DEFAULT_HEIGHT, DEFAULT_WIDTH, Histogram, MapMarker, SHIP_MAP_FILE, SPEED_BINS,
    SPEED_HISTOGRAM_FILE,
};

use crate::models::Dataset;
use anyhow::{Context, Result, anyhow};
use log::debug;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;

use std::path::Path;
use std::sync::Once;

use util::{compute_left_label_area_px, format_count, format_speed, office_color};

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        // From `src/viz/mod.rs` → project root → `assets/DejaVuSans.ttf`
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Sort `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// - The last bin is closed on the right so the maximum is counted.
/// - A single distinct value `v` spans `[v - 0.5, v + 0.5]`.
/// - No values: range `[0, 1]` with all counts zero.
pub fn bin_values(values: &[f64], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (mut lo, mut hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo > hi {
        lo = 0.0;
        hi = 1.0;
    } else if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }

    // Divide before subtracting so ranges near f64::MAX keep a finite width.
    let width = hi / bins as f64 - lo / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0usize; bins];
    for v in values.iter().copied().filter(|v| v.is_finite()) {
        let idx = ((v - lo) / width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    Histogram { edges, counts }
}

/// Speeds of every record that carries a numeric `SPEED`, in record order.
pub fn collect_speeds(ds: &Dataset) -> Vec<f64> {
    ds.records().iter().filter_map(|r| r.speed()).collect()
}

/// Convenience: histogram of ship speeds at the default size.
pub fn speed_histogram<P: AsRef<Path>>(ds: &Dataset, out_path: P) -> Result<Histogram> {
    plot_speed_histogram(ds, out_path, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Bin the dataset's speeds and write the histogram as a PNG to `out_path`.
///
/// Records without a speed are skipped. An empty speed collection still produces a valid
/// (empty) chart. Returns the histogram that was drawn.
pub fn plot_speed_histogram<P: AsRef<Path>>(
    ds: &Dataset,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<Histogram> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();

    let speeds = collect_speeds(ds);
    let hist = bin_values(&speeds, SPEED_BINS);
    debug!(
        "binning {} of {} records into {} bins over [{}, {}]",
        speeds.len(),
        ds.len(),
        hist.bin_count(),
        hist.lo(),
        hist.hi()
    );

    let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
    draw_histogram(root, &hist, "Histogram of Ship Speeds")
        .with_context(|| format!("rendering {}", out_path.display()))?;
    Ok(hist)
}

/// Helper that draws to any Plotters backend.
fn draw_histogram<DB>(root: DrawingArea<DB, Shift>, hist: &Histogram, title: &str) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    // Headroom above the tallest bar; keep a unit axis when every bin is empty.
    let top = hist.max_count().max(1);
    let y_max = top as f64 * 1.05;
    let y_label_count = (top + 1).min(10);
    let left_px = compute_left_label_area_px(y_max, y_label_count, 14);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(hist.lo()..hist.hi(), 0f64..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |x: &f64| format_speed(*x);
    let y_label_fmt = |v: &f64| format_count(*v);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Speed")
        .y_desc("Number of Ships")
        .x_labels(hist.bin_count() + 1)
        .y_labels(y_label_count)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 14))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let fill = office_color(0).filled();
    chart
        .draw_series(hist.bins().filter(|b| b.count > 0).map(|b| {
            Rectangle::new([(b.start, 0.0), (b.end, b.count as f64)], fill)
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    // Outline each bar so neighbours stay distinguishable.
    chart
        .draw_series(hist.bins().filter(|b| b.count > 0).map(|b| {
            Rectangle::new(
                [(b.start, 0.0), (b.end, b.count as f64)],
                BLACK.stroke_width(1),
            )
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_is_centered_in_unit_range() {
        let h = bin_values(&[4.0, 4.0], 10);
        assert_eq!(h.lo(), 3.5);
        assert_eq!(h.hi(), 4.5);
        assert_eq!(h.total(), 2);
        assert_eq!(h.counts.iter().filter(|&&c| c > 0).count(), 1);
    }

    #[test]
    fn extreme_range_keeps_finite_edges() {
        let h = bin_values(&[-1.0e308, 0.0, 1.0e308], 10);
        assert!(h.edges.iter().all(|e| e.is_finite()));
        assert_eq!(h.lo(), -1.0e308);
        assert_eq!(h.hi(), 1.0e308);
        assert_eq!(h.counts[0], 1);
        assert_eq!(h.counts[9], 1);
        assert_eq!(h.total(), 3);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let h = bin_values(&[0.0, 10.0], 10);
        assert_eq!(h.counts[0], 1);
        assert_eq!(h.counts[9], 1);
    }
}
