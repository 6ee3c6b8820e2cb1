//! Schema applier
//!
//! Drives creation of a whole schema against a live connection: strictly
//! sequential (one statement in flight, creation order = document order),
//! idempotent through benign-error classification, fail-fast on anything
//! fatal.

pub mod executor;

pub use executor::{ExecutionSummary, StatementExecutor};

use crate::compiler::{Dialect, compile_create_table, validate_schema};
use crate::core::{ApplyError, ConnectionError, SchemaDefinition, TableDefinition};

pub struct SchemaApplier<D: Dialect> {
    dialect: D,
}

impl<D: Dialect> SchemaApplier<D> {
    pub const fn new(dialect: D) -> Self {
        Self { dialect }
    }

    pub const fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Create one table. An "already exists" engine error is absorbed as
    /// success; any other execution failure is wrapped with the table name
    /// and the DDL text that was attempted.
    pub async fn create_table<E: StatementExecutor>(
        &self,
        table: &TableDefinition,
        exec: &mut E,
    ) -> Result<(), ApplyError> {
        if !exec.connected() {
            return Err(ConnectionError::NotConnected.into());
        }
        self.apply_table(table, 0, exec).await
    }

    /// Create every table of the schema, in document order, awaiting each
    /// creation before starting the next. The whole schema is validated
    /// before the first statement executes, so malformed input causes no
    /// partial side effects. Stops at the first fatal error; tables after
    /// the failing one are not attempted, tables before it stay created.
    pub async fn create_tables<E: StatementExecutor>(
        &self,
        schema: &SchemaDefinition,
        exec: &mut E,
    ) -> Result<(), ApplyError> {
        if !exec.connected() {
            return Err(ConnectionError::NotConnected.into());
        }
        validate_schema(schema)?;

        for (index, table) in schema.tables.iter().enumerate() {
            self.apply_table(table, index, exec).await?;
        }
        log::info!(
            "done creating {} table(s) via {}",
            schema.tables.len(),
            self.dialect.name()
        );
        Ok(())
    }

    async fn apply_table<E: StatementExecutor>(
        &self,
        table: &TableDefinition,
        index: usize,
        exec: &mut E,
    ) -> Result<(), ApplyError> {
        let ddl = compile_create_table(table, &self.dialect)?;
        match exec.run(&ddl).await {
            Ok(_) => {
                log::info!("CREATE TABLE {} succeeded", table.name);
                Ok(())
            }
            Err(err) if self.dialect.is_already_exists(&err) => {
                // Benign: the table was already there, idempotent create.
                log::warn!("CREATE TABLE {} skipped, table already exists", table.name);
                Ok(())
            }
            Err(err) => {
                log::error!("CREATE TABLE {} failed: {err}", table.name);
                Err(ApplyError::Create {
                    table: table.name.clone(),
                    index,
                    ddl,
                    source: err,
                })
            }
        }
    }
}
