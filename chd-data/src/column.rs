//! The six housing columns exposed by the dataset table.
//!
//! The source data uses terse census-style names (`MedInc`, `AveOccup`, ...).
//! Everything downstream of the loader works with the renamed labels.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric column of the California housing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Median_Income")]
    MedianIncome,
    #[serde(rename = "House_Age")]
    HouseAge,
    #[serde(rename = "Average_Rooms")]
    AverageRooms,
    #[serde(rename = "Average_Bedrooms")]
    AverageBedrooms,
    #[serde(rename = "Average_Occupants")]
    AverageOccupants,
    #[serde(rename = "Median_House_Value")]
    MedianHouseValue,
}

impl Column {
    /// All columns in table order.
    pub const ALL: [Column; 6] = [
        Column::MedianIncome,
        Column::HouseAge,
        Column::AverageRooms,
        Column::AverageBedrooms,
        Column::AverageOccupants,
        Column::MedianHouseValue,
    ];

    /// Columns usable as scatter plot features (everything but the target).
    pub const FEATURES: [Column; 5] = [
        Column::MedianIncome,
        Column::HouseAge,
        Column::AverageRooms,
        Column::AverageBedrooms,
        Column::AverageOccupants,
    ];

    /// The prediction target of the dataset.
    pub const TARGET: Column = Column::MedianHouseValue;

    /// Column name as it appears in the raw source export.
    pub fn raw_name(self) -> &'static str {
        match self {
            Column::MedianIncome => "MedInc",
            Column::HouseAge => "HouseAge",
            Column::AverageRooms => "AveRooms",
            Column::AverageBedrooms => "AveBedrms",
            Column::AverageOccupants => "AveOccup",
            Column::MedianHouseValue => "MedHouseVal",
        }
    }

    /// Renamed, human-readable column label.
    pub fn label(self) -> &'static str {
        match self {
            Column::MedianIncome => "Median_Income",
            Column::HouseAge => "House_Age",
            Column::AverageRooms => "Average_Rooms",
            Column::AverageBedrooms => "Average_Bedrooms",
            Column::AverageOccupants => "Average_Occupants",
            Column::MedianHouseValue => "Median_House_Value",
        }
    }

    /// Label with underscores replaced by spaces (e.g. "Median House Value").
    pub fn caption(self) -> String {
        self.label().replace('_', " ")
    }

    /// Position of this column in [`Column::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Match a CSV header against either the raw name or the label.
    pub fn from_header(header: &str) -> Option<Column> {
        let header = header.trim();
        Column::ALL
            .into_iter()
            .find(|c| c.label() == header || c.raw_name() == header)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Column {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::from_header(s).ok_or_else(|| DatasetError::UnknownColumn(s.to_string()))
    }
}
