use serde::{Deserialize, Serialize};

use super::column_type::ColumnType;

/// One column of a table-schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    #[serde(rename = "Column")]
    pub name: String,
    #[serde(rename = "DataType")]
    pub data_type: ColumnType,
    /// Required for `Decimal` (`"precision,scale"`) and `String` (max length)
    #[serde(rename = "Size", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            size: None,
        }
    }

    pub fn sized(name: impl Into<String>, data_type: ColumnType, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type,
            size: Some(size.into()),
        }
    }
}
