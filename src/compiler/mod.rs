//! DDL compiler
//!
//! Pure translation of table definitions into CREATE/DROP statements for a
//! target dialect. No I/O, no state; identical input yields byte-identical
//! output.

pub mod dialect;
pub mod sqlite;

pub use dialect::Dialect;
pub use sqlite::SqliteDialect;

use std::collections::HashSet;

use crate::core::{ColumnDefinition, SchemaDefinition, SchemaError, TableDefinition};

/// Compile one table definition into a CREATE TABLE statement.
///
/// Validates the table first; no statement text is produced for a malformed
/// definition. Column clauses are emitted in input order with a separator
/// strictly between clauses.
pub fn compile_create_table(
    table: &TableDefinition,
    dialect: &impl Dialect,
) -> Result<String, SchemaError> {
    validate_table(table)?;

    let mut statement = String::from("CREATE TABLE ");
    if dialect.supports_create_if_not_exists() {
        statement.push_str("IF NOT EXISTS ");
    }
    statement.push_str(&table.name);
    statement.push_str(" (\n");
    for (position, column) in table.columns.iter().enumerate() {
        if position > 0 {
            statement.push_str(",\n");
        }
        statement.push_str("    ");
        statement.push_str(&dialect.column_clause(&table.name, column)?);
    }
    statement.push_str("\n);");

    log::debug!("generated CREATE TABLE for '{}': {statement}", table.name);
    Ok(statement)
}

/// Compile a guarded DROP TABLE statement for the dialect.
pub fn compile_drop_table(table_name: &str, dialect: &impl Dialect) -> String {
    dialect.drop_table(table_name)
}

/// Structural validation of one table definition.
///
/// Checks: non-empty table name, non-empty column list, non-empty unique
/// column names, Size present and well-formed where the type requires it,
/// and at most one ID column (the only type that emits PRIMARY KEY).
pub fn validate_table(table: &TableDefinition) -> Result<(), SchemaError> {
    if table.name.is_empty() {
        return Err(SchemaError::EmptyTableName);
    }
    if table.columns.is_empty() {
        return Err(SchemaError::EmptyTable {
            table: table.name.clone(),
        });
    }

    let mut seen = HashSet::new();
    for column in &table.columns {
        if column.name.is_empty() {
            return Err(SchemaError::EmptyColumnName {
                table: table.name.clone(),
            });
        }
        if !seen.insert(column.name.as_str()) {
            return Err(SchemaError::DuplicateColumn {
                table: table.name.clone(),
                column: column.name.clone(),
            });
        }
        if column.data_type.requires_size() {
            match column.data_type {
                crate::core::ColumnType::Decimal => {
                    parse_decimal_size(&table.name, column)?;
                }
                _ => {
                    parse_length_size(&table.name, column)?;
                }
            }
        }
    }

    let identities = table.identity_columns();
    if identities.len() > 1 {
        return Err(SchemaError::MultipleIdentityColumns {
            table: table.name.clone(),
            first: identities[0].to_string(),
            second: identities[1].to_string(),
        });
    }

    Ok(())
}

/// Validate a whole schema document: per-table checks plus unique table names.
pub fn validate_schema(schema: &SchemaDefinition) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for table in &schema.tables {
        validate_table(table)?;
        if !seen.insert(table.name.as_str()) {
            return Err(SchemaError::DuplicateTable(table.name.clone()));
        }
    }
    Ok(())
}

/// Parse a Decimal `Size` of form `"precision,scale"`.
pub(crate) fn parse_decimal_size(
    table: &str,
    column: &ColumnDefinition,
) -> Result<(u32, u32), SchemaError> {
    let size = required_size(table, column)?;
    let invalid = || SchemaError::InvalidSize {
        table: table.to_string(),
        column: column.name.clone(),
        size: size.to_string(),
    };

    let (precision, scale) = size.split_once(',').ok_or_else(invalid)?;
    let precision: u32 = precision.trim().parse().map_err(|_| invalid())?;
    let scale: u32 = scale.trim().parse().map_err(|_| invalid())?;
    if precision == 0 || scale > precision {
        return Err(invalid());
    }
    Ok((precision, scale))
}

/// Parse a String `Size` carrying a positive maximum length.
pub(crate) fn parse_length_size(
    table: &str,
    column: &ColumnDefinition,
) -> Result<u32, SchemaError> {
    let size = required_size(table, column)?;
    let length: u32 = size.trim().parse().map_err(|_| SchemaError::InvalidSize {
        table: table.to_string(),
        column: column.name.clone(),
        size: size.to_string(),
    })?;
    if length == 0 {
        return Err(SchemaError::InvalidSize {
            table: table.to_string(),
            column: column.name.clone(),
            size: size.to_string(),
        });
    }
    Ok(length)
}

fn required_size<'a>(
    table: &str,
    column: &'a ColumnDefinition,
) -> Result<&'a str, SchemaError> {
    column
        .size
        .as_deref()
        .ok_or_else(|| SchemaError::MissingSize {
            table: table.to_string(),
            column: column.name.clone(),
        })
}
