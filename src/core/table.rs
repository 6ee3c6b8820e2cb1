use serde::{Deserialize, Serialize};

use super::column::ColumnDefinition;
use super::column_type::ColumnType;

/// One table of a schema document. Column order is the DDL emission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    #[serde(rename = "TableName")]
    pub name: String,
    #[serde(rename = "Columns")]
    pub columns: Vec<ColumnDefinition>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            columns,
            description: None,
        }
    }

    /// Names of all auto-increment key columns, in declaration order.
    /// A well-formed table has at most one; validation enforces that.
    pub fn identity_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.data_type.is_identity())
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column_of_type(&self, data_type: ColumnType) -> bool {
        self.columns.iter().any(|c| c.data_type == data_type)
    }
}
