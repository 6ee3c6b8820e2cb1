// DdlForge - schema-to-DDL compiler and sequential table-creation applier
// Compiles an abstract table-schema document into dialect-specific DDL and
// applies it against a live connection, one table at a time.

// Clippy configuration - allow non-critical warnings
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

// Core schema document structures and error taxonomy
pub mod core;

// DDL compiler (dialect trait, SQLite dialect, CREATE/DROP generation)
pub mod compiler;

// Schema applier (sequential table creation, benign-error classification)
pub mod applier;

// Connection lifecycle contract (session state machine, connector seam)
pub mod session;

// Re-export commonly used types for convenience
pub use crate::applier::{ExecutionSummary, SchemaApplier, StatementExecutor};
pub use crate::compiler::{Dialect, SqliteDialect, compile_create_table, compile_drop_table};
pub use crate::core::{
    ApplyError, ColumnDefinition, ColumnType, ConnectionError, EngineError, SchemaDefinition,
    SchemaError, TableDefinition,
};
pub use crate::session::{ConnectionState, Connector, Session, SessionConfig};
