//! The housing dataset embedded at compile time.
//!
//! `build.rs` gzip-compresses `fixtures/california_housing.csv` into `OUT_DIR`;
//! the compressed bytes ship inside the binary (or WASM module) and are
//! decompressed once at startup.

use crate::error::Result;
use crate::table::HousingTable;

/// Gzip-compressed CSV of the California housing dataset.
pub static HOUSING_CSV_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/california_housing.csv.gz"));

include!(concat!(env!("OUT_DIR"), "/embedded_rows.rs"));

/// Decompress and parse the embedded dataset.
pub fn load() -> Result<HousingTable> {
    HousingTable::from_gzip_csv(HOUSING_CSV_GZ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::FULL_DATASET_ROWS;
    use crate::Column;

    #[test]
    fn embedded_fixture_loads() {
        let table = load().expect("embedded dataset should parse");
        assert_eq!(table.len(), EMBEDDED_ROWS);
        assert!(table.len() <= FULL_DATASET_ROWS);
        for (_, values) in table.columns() {
            assert_eq!(values.len(), table.len());
        }
        assert!(table.column(Column::HouseAge).iter().all(|v| *v > 0.0));
    }

    #[test]
    fn embedded_fixture_starts_with_first_block_group() {
        let table = load().unwrap();
        assert_eq!(table.column(Column::MedianIncome)[0], 8.3252);
        assert_eq!(table.column(Column::HouseAge)[0], 41.0);
        assert_eq!(table.column(Column::MedianHouseValue)[0], 4.526);
    }
}
