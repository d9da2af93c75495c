//! The read-only, columnar housing table.

use crate::column::Column;
use crate::error::{DatasetError, Result};
use flate2::read::GzDecoder;
use std::io::{Read, Write};
use std::path::Path;

/// In-memory California housing table with renamed column labels.
///
/// Holds exactly the six columns of [`Column::ALL`], all of equal length.
/// The table is built once and never mutated afterwards; consumers share it
/// by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingTable {
    columns: [Vec<f64>; 6],
}

impl HousingTable {
    /// Build a table from already-parsed columns, ordered as [`Column::ALL`].
    pub fn from_columns(columns: [Vec<f64>; 6]) -> Result<Self> {
        let expected = columns[0].len();
        if expected == 0 {
            return Err(DatasetError::Empty);
        }
        for column in Column::ALL {
            let found = columns[column.index()].len();
            if found != expected {
                return Err(DatasetError::LengthMismatch {
                    column: column.label(),
                    expected,
                    found,
                });
            }
        }
        Ok(Self { columns })
    }

    /// Parse a headered CSV string.
    ///
    /// Headers may use either the raw source names (`MedInc`, `HouseAge`, ...)
    /// or the renamed labels. Columns outside the six known ones are ignored.
    ///
    /// # Example CSV
    /// ```text
    /// MedInc,HouseAge,AveRooms,AveBedrms,Population,AveOccup,Latitude,Longitude,MedHouseVal
    /// 8.3252,41.0,6.98412698,1.02380952,322.0,2.55555556,37.88,-122.23,4.526
    /// ```
    pub fn from_csv(csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let mut positions = [0usize; 6];
        for column in Column::ALL {
            positions[column.index()] = headers
                .iter()
                .position(|h| Column::from_header(h) == Some(column))
                .ok_or(DatasetError::MissingColumn(column.label()))?;
        }
        let needed = positions.iter().copied().max().unwrap_or(0) + 1;

        let mut columns: [Vec<f64>; 6] = Default::default();
        let mut row = 0usize;
        for result in rdr.records() {
            let record = result?;
            row += 1;

            // Blank trailing lines come through as a single empty field
            if record.len() == 1 && record.get(0).map_or(true, |f| f.trim().is_empty()) {
                continue;
            }
            if record.len() < needed {
                return Err(DatasetError::RaggedRow {
                    row,
                    needed,
                    found: record.len(),
                });
            }

            for column in Column::ALL {
                let raw = record.get(positions[column.index()]).unwrap_or("").trim();
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| DatasetError::InvalidValue {
                        row,
                        column: column.label(),
                        value: raw.to_string(),
                    })?;
                columns[column.index()].push(value);
            }
        }

        let table = Self::from_columns(columns)?;
        log::info!("dataset: loaded {} rows x {} columns", table.len(), Column::ALL.len());
        Ok(table)
    }

    /// Parse a gzip-compressed CSV payload.
    pub fn from_gzip_csv(bytes: &[u8]) -> Result<Self> {
        let mut csv_data = String::new();
        GzDecoder::new(bytes)
            .read_to_string(&mut csv_data)
            .map_err(|e| DatasetError::Decompression(e.to_string()))?;
        log::debug!(
            "dataset: decompressed {} bytes into {} bytes of CSV",
            bytes.len(),
            csv_data.len()
        );
        Self::from_csv(&csv_data)
    }

    /// Load a CSV file from disk. Files ending in `.gz` are decompressed first.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("dataset: reading {}", path.display());
        if path.extension().is_some_and(|ext| ext == "gz") {
            let bytes = std::fs::read(path)?;
            Self::from_gzip_csv(&bytes)
        } else {
            let csv_data = std::fs::read_to_string(path)?;
            Self::from_csv(&csv_data)
        }
    }

    /// Write the table as CSV with the renamed labels as headers.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(out);
        wtr.write_record(self.column_names())?;
        for row in 0..self.len() {
            wtr.write_record(Column::ALL.iter().map(|c| self.column(*c)[row].to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Values of a single column.
    pub fn column(&self, column: Column) -> &[f64] {
        &self.columns[column.index()]
    }

    /// Iterate over `(column, values)` pairs in table order.
    pub fn columns(&self) -> impl Iterator<Item = (Column, &[f64])> + '_ {
        Column::ALL.into_iter().map(move |c| (c, self.column(c)))
    }

    /// The six renamed column labels.
    pub fn column_names(&self) -> Vec<&'static str> {
        Column::ALL.iter().map(|c| c.label()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    const RAW_CSV: &str = "\
MedInc,HouseAge,AveRooms,AveBedrms,Population,AveOccup,Latitude,Longitude,MedHouseVal
8.3252,41.0,6.984126984126984,1.0238095238095237,322.0,2.5555555555555554,37.88,-122.23,4.526
8.3014,21.0,6.238137082601054,0.9718804335966608,2401.0,2.109841827768014,37.86,-122.22,3.585
7.2574,52.0,8.288135593220339,1.073446327683616,496.0,2.8022598870056497,37.85,-122.24,3.521
";

    #[test]
    fn raw_headers_are_renamed() {
        let table = HousingTable::from_csv(RAW_CSV).unwrap();
        assert_eq!(table.len(), 3);
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
        assert_eq!(table.column(Column::MedianIncome), &[8.3252, 8.3014, 7.2574]);
        assert_eq!(table.column(Column::HouseAge), &[41.0, 21.0, 52.0]);
        assert_eq!(table.column(Column::MedianHouseValue), &[4.526, 3.585, 3.521]);
    }

    #[test]
    fn labelled_headers_in_any_order() {
        let csv = "House_Age,Median_House_Value,Median_Income,Average_Occupants,Average_Bedrooms,Average_Rooms\n\
                   10,2.5,3.1,2.0,1.0,5.0\n";
        let table = HousingTable::from_csv(csv).unwrap();
        assert_eq!(table.column(Column::HouseAge), &[10.0]);
        assert_eq!(table.column(Column::MedianIncome), &[3.1]);
        assert_eq!(table.column(Column::AverageRooms), &[5.0]);
    }

    #[test]
    fn extra_columns_are_dropped() {
        let table = HousingTable::from_csv(RAW_CSV).unwrap();
        assert_eq!(table.columns().count(), 6);
        assert!(!table.column_names().contains(&"Population"));
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "MedInc,HouseAge,AveRooms,AveBedrms,AveOccup\n1,2,3,4,5\n";
        let err = HousingTable::from_csv(csv).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Median_House_Value")));
    }

    #[test]
    fn invalid_cell_is_reported() {
        let csv = "MedInc,HouseAge,AveRooms,AveBedrms,AveOccup,MedHouseVal\n\
                   1,2,3,4,5,6\n\
                   1,n/a,3,4,5,6\n";
        match HousingTable::from_csv(csv).unwrap_err() {
            DatasetError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "House_Age");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_cell_is_rejected() {
        let csv = "MedInc,HouseAge,AveRooms,AveBedrms,AveOccup,MedHouseVal\n1,2,3,4,NaN,6\n";
        let err = HousingTable::from_csv(csv).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidValue { row: 1, column: "Average_Occupants", .. }
        ));
    }

    #[test]
    fn short_row_is_reported() {
        let csv = "MedInc,HouseAge,AveRooms,AveBedrms,AveOccup,MedHouseVal\n1,2,3\n";
        let err = HousingTable::from_csv(csv).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::RaggedRow { row: 1, needed: 6, found: 3 }
        ));
    }

    #[test]
    fn header_only_is_empty() {
        let csv = "MedInc,HouseAge,AveRooms,AveBedrms,AveOccup,MedHouseVal\n";
        let err = HousingTable::from_csv(csv).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn gzip_payload_round_trips() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(RAW_CSV.as_bytes()).unwrap();
        let bytes = encoder.finish().unwrap();

        let table = HousingTable::from_gzip_csv(&bytes).unwrap();
        assert_eq!(table, HousingTable::from_csv(RAW_CSV).unwrap());
    }

    #[test]
    fn garbage_gzip_is_a_decompression_error() {
        let err = HousingTable::from_gzip_csv(b"not gzip at all").unwrap_err();
        assert!(matches!(err, DatasetError::Decompression(_)));
    }

    #[test]
    fn from_columns_checks_lengths() {
        let err = HousingTable::from_columns([
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::LengthMismatch { column: "Average_Rooms", expected: 2, found: 1 }
        ));
    }
}
