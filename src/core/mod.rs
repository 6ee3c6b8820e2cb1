// Module declarations
pub mod column;
pub mod column_type;
pub mod error;
pub mod schema;
pub mod table;

// Re-exports for convenience
pub use column::ColumnDefinition;
pub use column_type::ColumnType;
pub use error::{ApplyError, ConnectionError, EngineError, SchemaError};
pub use schema::SchemaDefinition;
pub use table::TableDefinition;
