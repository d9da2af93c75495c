//! Histogram of a single column.

use crate::spec::{AxisSpec, ChartSpec};
use crate::theme::Theme;
use chd_data::summary::value_range;
use chd_data::{Column, HousingTable};
use serde::Serialize;

/// Number of buckets every histogram requests.
pub const HISTOGRAM_BINS: usize = 30;

/// A half-open value range `[start, end)` and the rows that fall in it.
/// The last bucket of a histogram also includes its `end`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Bucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Histogram specification.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistogramChart {
    pub title: String,
    pub x: AxisSpec,
    pub y: AxisSpec,
    pub bins: usize,
    pub theme: Theme,
    #[serde(skip)]
    pub buckets: Vec<Bucket>,
}

impl ChartSpec for HistogramChart {
    type Datum = Bucket;

    fn data(&self) -> &[Bucket] {
        &self.buckets
    }
}

/// Split `values` into `bins` equal-width buckets spanning their range.
///
/// A constant series gets unit-width buckets starting at its value.
pub fn bucketize(values: &[f64], bins: usize) -> Vec<Bucket> {
    let Some((min, max)) = value_range(values) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let width = if max > min { (max - min) / bins as f64 } else { 1.0 };
    let mut buckets: Vec<Bucket> = (0..bins)
        .map(|i| Bucket {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();
    if max > min {
        if let Some(last) = buckets.last_mut() {
            last.end = max;
        }
    }

    for &value in values {
        let idx = (((value - min) / width).floor() as usize).min(bins - 1);
        buckets[idx].count += 1;
    }
    buckets
}

/// Build the histogram for the selected feature with [`HISTOGRAM_BINS`] buckets.
pub fn update_histogram(table: &HousingTable, feature: Column) -> HistogramChart {
    let buckets = bucketize(table.column(feature), HISTOGRAM_BINS);
    log::debug!("histogram: {} into {} buckets", feature.label(), buckets.len());

    HistogramChart {
        title: format!("Histogram of {}", feature.label()),
        x: AxisSpec::named(feature.label()),
        y: AxisSpec::named("count"),
        bins: HISTOGRAM_BINS,
        theme: Theme::plotly_dark(),
        buckets,
    }
}
