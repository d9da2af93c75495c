//! Visual theme shared by both charts.

use serde::Serialize;

/// Plasma color scale stops, dark purple to yellow.
pub const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Colors and title placement handed to the D3 renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font_color: &'static str,
    pub grid_color: &'static str,
    pub zero_line_color: &'static str,
    /// Primary mark color for single-series charts.
    pub mark_color: &'static str,
    /// Horizontal title anchor in `[0, 1]`; 0.5 centers the title.
    pub title_x: f64,
}

impl Theme {
    /// The dark template used by every dashboard chart, with a centered title.
    pub fn plotly_dark() -> Self {
        Self {
            name: "plotly_dark",
            paper_bgcolor: "rgb(17,17,17)",
            plot_bgcolor: "rgb(17,17,17)",
            font_color: "#f2f5fa",
            grid_color: "#283442",
            zero_line_color: "#283442",
            mark_color: "#636efa",
            title_x: 0.5,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plotly_dark()
    }
}
