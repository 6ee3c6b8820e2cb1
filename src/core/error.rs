use thiserror::Error;

/// Malformed input schema. Detected before any statement execution.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Schema contains a table with an empty name")]
    EmptyTableName,
    #[error("Table '{table}' has no columns")]
    EmptyTable { table: String },
    #[error("Table '{table}' has a column with an empty name")]
    EmptyColumnName { table: String },
    #[error("Table '{table}' defines column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },
    #[error("Schema defines table '{0}' more than once")]
    DuplicateTable(String),
    #[error("Column '{column}' in table '{table}' requires a Size attribute")]
    MissingSize { table: String, column: String },
    #[error("Column '{column}' in table '{table}' has invalid Size '{size}'")]
    InvalidSize {
        table: String,
        column: String,
        size: String,
    },
    #[error("Table '{table}' declares more than one ID column ('{first}' and '{second}')")]
    MultipleIdentityColumns {
        table: String,
        first: String,
        second: String,
    },
    #[error("Schema document parse error: {0}")]
    Document(#[from] serde_json::Error),
}

/// Connection lifecycle failures surfaced by the session layer.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Not connected to the database")]
    NotConnected,
    #[error("Already connected; reusing the existing connection")]
    AlreadyConnected,
    #[error("Failed to connect to '{path}': {message}")]
    ConnectFailed { path: String, message: String },
}

/// Opaque error passed through from the storage engine collaborator.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct EngineError {
    /// Engine-specific error code, when the driver exposes one
    pub code: Option<String>,
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Caller-facing failure of a schema apply run.
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    /// Fatal per-table creation failure; tables before `index` were applied,
    /// tables after it were not attempted.
    #[error("CREATE TABLE '{table}' (table {index} of schema) failed: {source}")]
    Create {
        table: String,
        index: usize,
        /// The DDL text that was attempted
        ddl: String,
        #[source]
        source: EngineError,
    },
}
