//! Declarative description of the dashboard page.
//!
//! The layout names every control and chart placeholder, the options each
//! dropdown offers and its initial selection. It is built once and only read;
//! `chd-chart-ui` turns it into RSX.

use chd_data::Column;
use serde::Serialize;

pub const X_AXIS_DROPDOWN: &str = "x-axis-dropdown";
pub const Y_AXIS_DROPDOWN: &str = "y-axis-dropdown";
pub const HISTOGRAM_DROPDOWN: &str = "histogram-dropdown";
pub const SCATTER_GRAPH: &str = "scatter-plot";
pub const HISTOGRAM_GRAPH: &str = "histogram";

/// One entry of a dropdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: Column,
}

impl DropdownOption {
    /// Option labelled with the column's own name.
    pub fn labelled(value: Column) -> Self {
        Self {
            label: value.label().to_string(),
            value,
        }
    }
}

/// A column picker.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub options: Vec<DropdownOption>,
    pub default: Column,
    pub clearable: bool,
}

impl DropdownSpec {
    pub fn contains(&self, value: Column) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn values(&self) -> Vec<Column> {
        self.options.iter().map(|o| o.value).collect()
    }
}

/// Placeholder a chart renders into.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphSpec {
    pub id: &'static str,
    pub height_px: u32,
}

/// The whole page: heading, three dropdowns and two charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub x_axis: DropdownSpec,
    pub y_axis: DropdownSpec,
    pub scatter: GraphSpec,
    pub histogram_feature: DropdownSpec,
    pub histogram: GraphSpec,
}

impl DashboardLayout {
    pub fn california_housing() -> Self {
        Self {
            title: "California Housing Dashboard",
            subtitle: "Explore trends in the California Housing Dataset, including median house value, income, and more.",
            x_axis: DropdownSpec {
                id: X_AXIS_DROPDOWN,
                label: "Select X-Axis:",
                options: Column::FEATURES.into_iter().map(DropdownOption::labelled).collect(),
                default: Column::MedianIncome,
                clearable: false,
            },
            y_axis: DropdownSpec {
                id: Y_AXIS_DROPDOWN,
                label: "Select Y-Axis:",
                options: vec![DropdownOption {
                    label: Column::TARGET.caption(),
                    value: Column::TARGET,
                }],
                default: Column::TARGET,
                clearable: false,
            },
            scatter: GraphSpec {
                id: SCATTER_GRAPH,
                height_px: 500,
            },
            histogram_feature: DropdownSpec {
                id: HISTOGRAM_DROPDOWN,
                label: "Select a Feature for Histogram:",
                options: Column::ALL.into_iter().map(DropdownOption::labelled).collect(),
                default: Column::MedianIncome,
                clearable: false,
            },
            histogram: GraphSpec {
                id: HISTOGRAM_GRAPH,
                height_px: 500,
            },
        }
    }

    pub fn dropdowns(&self) -> [&DropdownSpec; 3] {
        [&self.x_axis, &self.y_axis, &self.histogram_feature]
    }

    pub fn graphs(&self) -> [&GraphSpec; 2] {
        [&self.scatter, &self.histogram]
    }

    /// Look up a dropdown by its DOM id.
    pub fn dropdown(&self, id: &str) -> Option<&DropdownSpec> {
        self.dropdowns().into_iter().find(|d| d.id == id)
    }
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self::california_housing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_options() {
        let layout = DashboardLayout::california_housing();
        for dropdown in layout.dropdowns() {
            assert!(dropdown.contains(dropdown.default), "{} default", dropdown.id);
            assert!(!dropdown.clearable, "{} must not be clearable", dropdown.id);
        }
    }

    #[test]
    fn x_axis_offers_features_only() {
        let layout = DashboardLayout::california_housing();
        assert_eq!(layout.x_axis.values(), Column::FEATURES.to_vec());
        assert!(!layout.x_axis.contains(Column::MedianHouseValue));
        assert_eq!(layout.x_axis.default, Column::MedianIncome);
    }

    #[test]
    fn y_axis_is_fixed_to_target() {
        let layout = DashboardLayout::california_housing();
        assert_eq!(
            layout.y_axis.options,
            vec![DropdownOption {
                label: "Median House Value".to_string(),
                value: Column::MedianHouseValue,
            }]
        );
    }

    #[test]
    fn histogram_offers_every_column() {
        let layout = DashboardLayout::california_housing();
        assert_eq!(layout.histogram_feature.values(), Column::ALL.to_vec());
        assert_eq!(layout.histogram_feature.default, Column::MedianIncome);
    }

    #[test]
    fn identifiers_are_unique_and_resolvable() {
        let layout = DashboardLayout::california_housing();
        let mut ids: Vec<&str> = layout.dropdowns().iter().map(|d| d.id).collect();
        ids.extend(layout.graphs().iter().map(|g| g.id));
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());

        assert_eq!(layout.dropdown(Y_AXIS_DROPDOWN), Some(&layout.y_axis));
        assert!(layout.dropdown(SCATTER_GRAPH).is_none());
        assert!(layout.graphs().iter().all(|g| g.height_px == 500));
    }
}
