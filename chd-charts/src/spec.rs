//! Shared pieces of a chart specification.

use serde::Serialize;

/// One chart axis: the data field it reads and the title drawn next to it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisSpec {
    pub field: String,
    pub title: String,
}

impl AxisSpec {
    /// Axis whose title is the field name itself.
    pub fn named(field: &str) -> Self {
        Self {
            field: field.to_string(),
            title: field.to_string(),
        }
    }
}

/// A chart specification that can be handed to the D3 renderer.
///
/// The spec serializes as the chart *config* (title, axes, encodings, theme);
/// the marks themselves travel separately as [`ChartSpec::data`].
pub trait ChartSpec: Serialize {
    type Datum: Serialize;

    /// Marks to draw: points for a scatter plot, buckets for a histogram.
    fn data(&self) -> &[Self::Datum];

    fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.data())
    }

    /// Config and data combined into one `{"config": ..., "data": ...}` document.
    fn to_document(&self) -> serde_json::Result<serde_json::Value> {
        Ok(serde_json::json!({
            "config": serde_json::to_value(self)?,
            "data": serde_json::to_value(self.data())?,
        }))
    }
}
