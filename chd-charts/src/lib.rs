//! Dashboard layout and chart specifications.
//!
//! Nothing in this crate touches the DOM. Handlers are pure functions from a
//! selection and the shared [`HousingTable`](chd_data::HousingTable) to a
//! serializable chart specification; `chd-chart-ui` hands the JSON to D3.js.

pub mod histogram;
pub mod layout;
pub mod scatter;
pub mod spec;
pub mod theme;

pub use histogram::{update_histogram, HistogramChart, HISTOGRAM_BINS};
pub use layout::DashboardLayout;
pub use scatter::{update_scatter, ScatterChart};
pub use spec::{AxisSpec, ChartSpec};
pub use theme::Theme;

#[cfg(test)]
pub(crate) mod test_support {
    use chd_data::HousingTable;

    /// Four-row table with distinct values in every column.
    pub fn sample_table() -> HousingTable {
        HousingTable::from_columns([
            vec![8.3252, 8.3014, 7.2574, 5.6431],
            vec![41.0, 21.0, 52.0, 52.0],
            vec![6.98, 6.24, 8.29, 5.82],
            vec![1.02, 0.97, 1.07, 1.07],
            vec![2.56, 2.11, 2.80, 2.55],
            vec![4.526, 3.585, 3.521, 3.413],
        ])
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::sample_table;
    use super::*;
    use chd_data::Column;

    #[test]
    fn handlers_leave_the_table_untouched() {
        let table = sample_table();
        let before = table.clone();

        for x in Column::FEATURES {
            let chart = update_scatter(&table, x, Column::TARGET);
            assert_eq!(chart.data().len(), table.len());
        }
        for feature in Column::ALL {
            let chart = update_histogram(&table, feature);
            assert_eq!(chart.data().len(), HISTOGRAM_BINS);
        }

        assert_eq!(table, before);
        assert_eq!(
            table.column_names(),
            vec![
                "Median_Income",
                "House_Age",
                "Average_Rooms",
                "Average_Bedrooms",
                "Average_Occupants",
                "Median_House_Value",
            ]
        );
        assert_eq!(table.columns().count(), 6);
    }
}
