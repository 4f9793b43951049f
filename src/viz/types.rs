//! Public types and constants for the visualization module.

use serde::Serialize;

/// File name of the speed histogram export.
pub const SPEED_HISTOGRAM_FILE: &str = "speed_histogram.png";
/// File name of the ship map export.
pub const SHIP_MAP_FILE: &str = "ships_map.html";

/// Number of equal-width bins in the speed histogram.
pub const SPEED_BINS: usize = 10;

/// Default raster size of the histogram image (pixels).
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// One histogram bin: `[start, end)`, except the last bin which also includes `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram over an observed range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn lo(&self) -> f64 {
        self.edges[0]
    }

    pub fn hi(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Number of values that were binned.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.counts.iter().enumerate().map(|(i, &count)| Bin {
            start: self.edges[i],
            end: self.edges[i + 1],
            count,
        })
    }
}

/// One marker on the ship map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub popup: String,
}
