//! Per-column descriptive statistics.

use crate::column::Column;
use crate::table::HousingTable;
use serde::Serialize;

/// Count, range, mean and population standard deviation of one column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnSummary {
    pub column: Column,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl ColumnSummary {
    /// Summarize a slice of values. Returns `None` for an empty slice.
    pub fn of(column: Column, values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let (min, max) = value_range(values)?;
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        Some(Self {
            column,
            count,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Minimum and maximum of a slice, or `None` if it is empty.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Summaries for all six columns, in table order.
pub fn summarize(table: &HousingTable) -> Vec<ColumnSummary> {
    table
        .columns()
        .filter_map(|(column, values)| ColumnSummary::of(column, values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_simple_series() {
        let s = ColumnSummary::of(Column::HouseAge, &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(s.count, 8);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.std_dev, 2.0);
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert!(ColumnSummary::of(Column::HouseAge, &[]).is_none());
        assert!(value_range(&[]).is_none());
    }

    #[test]
    fn summarize_covers_every_column() {
        let table = HousingTable::from_columns([
            vec![1.0, 3.0],
            vec![10.0, 20.0],
            vec![5.0, 6.0],
            vec![1.0, 1.0],
            vec![2.0, 4.0],
            vec![0.5, 1.5],
        ])
        .unwrap();
        let summaries = summarize(&table);
        let columns: Vec<Column> = summaries.iter().map(|s| s.column).collect();
        assert_eq!(columns, Column::ALL.to_vec());
        assert_eq!(summaries[1].mean, 15.0);
        assert_eq!(summaries[3].std_dev, 0.0);
    }
}
