//! Scatter plot of a target column against a selected feature.

use crate::spec::{AxisSpec, ChartSpec};
use crate::theme::{Theme, PLASMA};
use chd_data::summary::value_range;
use chd_data::{Column, HousingTable};
use serde::Serialize;

/// Column that drives point color in every scatter plot.
pub const COLOR_COLUMN: Column = Column::HouseAge;

/// Continuous color encoding of a column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorSpec {
    pub field: String,
    /// Title shown above the color bar.
    pub title: String,
    pub scale: &'static str,
    pub stops: Vec<&'static str>,
    /// `[min, max]` of the encoded column.
    pub domain: [f64; 2],
}

/// A single row projected onto the scatter plot.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub color: f64,
}

/// Scatter plot specification.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x: AxisSpec,
    pub y: AxisSpec,
    pub color: ColorSpec,
    pub theme: Theme,
    #[serde(skip)]
    pub points: Vec<ScatterPoint>,
}

impl ChartSpec for ScatterChart {
    type Datum = ScatterPoint;

    fn data(&self) -> &[ScatterPoint] {
        &self.points
    }
}

/// Build the scatter plot for the selected axes.
///
/// Plots `y_axis` against `x_axis`, one point per row, colored by
/// [`COLOR_COLUMN`]. The result depends only on the arguments.
pub fn update_scatter(table: &HousingTable, x_axis: Column, y_axis: Column) -> ScatterChart {
    let xs = table.column(x_axis);
    let ys = table.column(y_axis);
    let colors = table.column(COLOR_COLUMN);

    let points: Vec<ScatterPoint> = xs
        .iter()
        .zip(ys)
        .zip(colors)
        .map(|((&x, &y), &color)| ScatterPoint { x, y, color })
        .collect();

    let (lo, hi) = value_range(colors).unwrap_or((0.0, 0.0));
    log::debug!(
        "scatter: {} vs {}, {} points",
        y_axis.label(),
        x_axis.label(),
        points.len()
    );

    ScatterChart {
        title: format!("Scatter Plot: {} vs {}", y_axis.label(), x_axis.label()),
        x: AxisSpec::named(x_axis.label()),
        y: AxisSpec::named(y_axis.label()),
        color: ColorSpec {
            field: COLOR_COLUMN.label().to_string(),
            title: COLOR_COLUMN.label().to_string(),
            scale: "plasma",
            stops: PLASMA.to_vec(),
            domain: [lo, hi],
        },
        theme: Theme::plotly_dark(),
        points,
    }
}
