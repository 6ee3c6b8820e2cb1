use crate::core::{ColumnDefinition, EngineError, SchemaError};

/// SQL dialect seam for the DDL compiler and the applier's error classifier.
///
/// Porting to a new storage engine means implementing the type-mapping in
/// `column_clause`, one drop form, and one already-exists predicate.
pub trait Dialect {
    fn name(&self) -> &'static str;

    /// Whether CREATE TABLE supports a native `IF NOT EXISTS` guard. Dialects
    /// without it rely on `is_already_exists` classification for idempotency.
    fn supports_create_if_not_exists(&self) -> bool;

    /// Render one column clause (name, type, constraints, default) for a
    /// column that already passed validation.
    fn column_clause(
        &self,
        table: &str,
        column: &ColumnDefinition,
    ) -> Result<String, SchemaError>;

    /// Render a guarded DROP TABLE statement.
    fn drop_table(&self, table: &str) -> String;

    /// Benign-error classifier: does this engine error mean the object
    /// already existed? Centralized so idempotent-create recovery lives in
    /// exactly one predicate per dialect.
    fn is_already_exists(&self, error: &EngineError) -> bool;
}
