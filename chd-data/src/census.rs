//! Conversion from the 1990 census block-group file to the housing table.
//!
//! The StatLib `cal_housing.data` file carries per-block totals, one
//! headerless row per block group:
//!
//! ```text
//! longitude,latitude,housingMedianAge,totalRooms,totalBedrooms,population,households,medianIncome,medianHouseValue
//! ```
//!
//! The housing table wants per-household averages and the house value in
//! units of $100,000, the same derivation the scikit-learn export uses.

use crate::column::Column;
use crate::error::{DatasetError, Result};
use crate::table::HousingTable;

/// Rows in the complete census export.
pub const FULL_DATASET_ROWS: usize = 20_640;

const FIELDS: usize = 9;
const HOUSE_VALUE_UNIT: f64 = 100_000.0;

fn field(record: &csv::StringRecord, idx: usize, row: usize, column: Column) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DatasetError::InvalidValue {
            row,
            column: column.label(),
            value: raw.to_string(),
        })
}

/// Derive the six housing columns from raw census block-group totals.
pub fn from_census_csv(data: &str) -> Result<HousingTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut columns: [Vec<f64>; 6] = Default::default();
    let mut row = 0usize;
    for result in rdr.records() {
        let record = result?;
        row += 1;
        if record.len() < FIELDS {
            return Err(DatasetError::RaggedRow {
                row,
                needed: FIELDS,
                found: record.len(),
            });
        }

        let households = field(&record, 6, row, Column::AverageOccupants)?;
        if households <= 0.0 {
            return Err(DatasetError::InvalidValue {
                row,
                column: Column::AverageOccupants.label(),
                value: record.get(6).unwrap_or("").trim().to_string(),
            });
        }

        let values = [
            (Column::MedianIncome, field(&record, 7, row, Column::MedianIncome)?),
            (Column::HouseAge, field(&record, 2, row, Column::HouseAge)?),
            (Column::AverageRooms, field(&record, 3, row, Column::AverageRooms)? / households),
            (Column::AverageBedrooms, field(&record, 4, row, Column::AverageBedrooms)? / households),
            (Column::AverageOccupants, field(&record, 5, row, Column::AverageOccupants)? / households),
            (Column::MedianHouseValue, field(&record, 8, row, Column::MedianHouseValue)? / HOUSE_VALUE_UNIT),
        ];
        for (column, value) in values {
            columns[column.index()].push(value);
        }
    }

    let table = HousingTable::from_columns(columns)?;
    if table.len() != FULL_DATASET_ROWS {
        log::warn!(
            "census: converted {} block groups, the full export has {}",
            table.len(),
            FULL_DATASET_ROWS
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    // First two block groups of cal_housing.data
    const CENSUS: &str = "\
-122.230000,37.880000,41.000000,880.000000,129.000000,322.000000,126.000000,8.325200,452600.000000
-122.220000,37.860000,21.000000,7099.000000,1106.000000,2401.000000,1138.000000,8.301400,358500.000000
";

    #[test]
    fn totals_become_household_averages() {
        let table = from_census_csv(CENSUS).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column(Column::MedianIncome), &[8.3252, 8.3014]);
        assert_eq!(table.column(Column::HouseAge), &[41.0, 21.0]);
        assert!((table.column(Column::AverageRooms)[0] - 6.984126984126984).abs() < 1e-12);
        assert!((table.column(Column::AverageBedrooms)[0] - 1.0238095238095237).abs() < 1e-12);
        assert!((table.column(Column::AverageOccupants)[1] - 2.109841827768014).abs() < 1e-12);
        assert_eq!(table.column(Column::MedianHouseValue), &[4.526, 3.585]);
    }

    #[test]
    fn zero_households_is_rejected() {
        let err = from_census_csv("-122.2,37.8,41,880,129,322,0,8.3,452600\n").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidValue { row: 1, column: "Average_Occupants", .. }
        ));
    }

    #[test]
    fn short_census_row_is_rejected() {
        let err = from_census_csv("-122.2,37.8,41\n").unwrap_err();
        assert!(matches!(err, DatasetError::RaggedRow { row: 1, needed: 9, found: 3 }));
    }

    #[test]
    fn converted_table_round_trips_through_csv() {
        let table = from_census_csv(CENSUS).unwrap();
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Median_Income,House_Age,Average_Rooms"));
        assert_eq!(HousingTable::from_csv(&text).unwrap(), table);
    }
}
