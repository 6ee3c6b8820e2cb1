use uuid::Uuid;

use super::dialect::Dialect;
use super::{parse_decimal_size, parse_length_size};
use crate::core::{ColumnDefinition, ColumnType, EngineError, SchemaError};

/// SQLite type mapping and error signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn supports_create_if_not_exists(&self) -> bool {
        true
    }

    fn column_clause(
        &self,
        table: &str,
        column: &ColumnDefinition,
    ) -> Result<String, SchemaError> {
        let clause = match column.data_type {
            ColumnType::Identity => {
                format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", column.name)
            }
            ColumnType::Guid => {
                format!("{} TEXT NOT NULL DEFAULT '{}'", column.name, Uuid::nil())
            }
            ColumnType::ForeignKey | ColumnType::Numeric => {
                format!("{} INTEGER NOT NULL DEFAULT 0", column.name)
            }
            ColumnType::Decimal => {
                let (precision, scale) = parse_decimal_size(table, column)?;
                format!("{} DECIMAL({precision},{scale})", column.name)
            }
            ColumnType::String => {
                let length = parse_length_size(table, column)?;
                format!("{} VARCHAR({length}) NOT NULL DEFAULT ''", column.name)
            }
            ColumnType::Text => format!("{} TEXT", column.name),
            ColumnType::DateTime => format!("{} DATETIME", column.name),
            ColumnType::Boolean => format!("{} TINYINT NOT NULL DEFAULT 0", column.name),
        };
        Ok(clause)
    }

    fn drop_table(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {table};")
    }

    fn is_already_exists(&self, error: &EngineError) -> bool {
        // SQLite reports "table <name> already exists" with code SQLITE_ERROR,
        // so the code alone cannot identify the condition.
        error.message.contains("already exists")
    }
}
