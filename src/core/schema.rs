use serde::{Deserialize, Serialize};

use super::error::SchemaError;
use super::table::TableDefinition;

/// A whole schema document. Table order is the creation order; callers must
/// list parent tables before children, no dependency inference happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDefinition {
    #[serde(rename = "Tables")]
    pub tables: Vec<TableDefinition>,
}

impl SchemaDefinition {
    pub const fn new(tables: Vec<TableDefinition>) -> Self {
        Self { tables }
    }

    /// Parse a JSON schema document. Unknown `DataType` literals fail here.
    pub fn from_json(document: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn get_table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.name == name)
    }
}
