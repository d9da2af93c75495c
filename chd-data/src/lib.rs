//! Data preparation for the California housing dashboard.
//!
//! This crate provides:
//! - `column`: the six dataset columns and the raw-name to label rename table
//! - `table`: the immutable, columnar [`HousingTable`] and its CSV loaders
//! - `census`: derivation of the table from raw 1990 census block-group totals
//! - `embedded`: the compressed dataset baked into the binary by `build.rs`
//! - `summary`: per-column descriptive statistics
//!
//! # Usage
//!
//! ```rust
//! use chd_data::{Column, HousingTable};
//!
//! let table = HousingTable::from_csv(
//!     "MedInc,HouseAge,AveRooms,AveBedrms,AveOccup,MedHouseVal\n8.3252,41,6.98,1.02,2.55,4.526\n",
//! ).unwrap();
//! assert_eq!(table.column(Column::MedianIncome), &[8.3252]);
//! ```

pub mod census;
pub mod column;
pub mod embedded;
pub mod error;
pub mod summary;
pub mod table;

pub use column::Column;
pub use error::DatasetError;
pub use table::HousingTable;
