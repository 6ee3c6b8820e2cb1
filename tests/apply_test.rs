// Applies schema documents against a scripted mock engine and checks the
// applier's ordering, idempotency, and failure semantics.
use ddlforge::{
    ApplyError, ColumnDefinition, ColumnType, ConnectionError, Connector, EngineError,
    ExecutionSummary, SchemaApplier, SchemaDefinition, Session, SessionConfig, SqliteDialect,
    StatementExecutor, TableDefinition,
};

/// Mock storage engine: records every statement, tracks created tables, and
/// reports dialect-shaped errors ("table X already exists", fatal failures).
#[derive(Default)]
struct MockEngine {
    connected: bool,
    tables: Vec<String>,
    statements: Vec<String>,
    fail_on: Option<String>,
}

impl MockEngine {
    fn online() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }
}

fn table_name_of(ddl: &str) -> String {
    ddl.strip_prefix("CREATE TABLE IF NOT EXISTS ")
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_default()
        .to_string()
}

impl StatementExecutor for MockEngine {
    fn connected(&self) -> bool {
        self.connected
    }

    async fn run(&mut self, ddl: &str) -> Result<ExecutionSummary, EngineError> {
        self.statements.push(ddl.to_string());
        let name = table_name_of(ddl);
        if self.fail_on.as_deref() == Some(name.as_str()) {
            return Err(EngineError::with_code("SQLITE_IOERR", "disk I/O error"));
        }
        if self.tables.contains(&name) {
            return Err(EngineError::with_code(
                "SQLITE_ERROR",
                format!("table {name} already exists"),
            ));
        }
        self.tables.push(name);
        Ok(ExecutionSummary { rows_affected: 0 })
    }
}

fn book_schema() -> SchemaDefinition {
    SchemaDefinition::from_json(
        r#"{
            "Tables": [
                {
                    "TableName": "Book",
                    "Columns": [
                        { "Column": "IDBook", "DataType": "ID" },
                        { "Column": "Title", "DataType": "String", "Size": "256" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap()
}

fn numeric_table(name: &str) -> TableDefinition {
    TableDefinition::new(
        name,
        vec![
            ColumnDefinition::new(format!("ID{name}"), ColumnType::Identity),
            ColumnDefinition::new("Amount", ColumnType::Numeric),
        ],
    )
}

#[tokio::test]
async fn test_book_schema_applies() {
    let schema = book_schema();
    let applier = SchemaApplier::new(SqliteDialect::new());
    let mut engine = MockEngine::online();

    applier.create_tables(&schema, &mut engine).await.unwrap();

    assert_eq!(engine.tables, vec!["Book"]);
    let ddl = &engine.statements[0];
    assert!(ddl.contains("IDBook INTEGER PRIMARY KEY AUTOINCREMENT"));
    assert!(ddl.contains("Title VARCHAR(256) NOT NULL DEFAULT ''"));
}

#[tokio::test]
async fn test_reapply_is_idempotent() {
    let schema = book_schema();
    let applier = SchemaApplier::new(SqliteDialect::new());
    let mut engine = MockEngine::online();

    applier.create_tables(&schema, &mut engine).await.unwrap();
    // Second run hits the already-exists path and still succeeds.
    applier.create_tables(&schema, &mut engine).await.unwrap();

    assert_eq!(engine.tables, vec!["Book"]);
    assert_eq!(engine.statements.len(), 2);
}

#[tokio::test]
async fn test_fail_fast_stops_at_failing_table() {
    let schema = SchemaDefinition::new(vec![
        numeric_table("Author"),
        numeric_table("Book"),
        numeric_table("Review"),
    ]);
    let applier = SchemaApplier::new(SqliteDialect::new());
    let mut engine = MockEngine::online();
    engine.fail_on = Some("Book".to_string());

    let err = applier.create_tables(&schema, &mut engine).await.unwrap_err();

    match err {
        ApplyError::Create { table, index, ddl, source } => {
            assert_eq!(table, "Book");
            assert_eq!(index, 1);
            assert!(ddl.contains("CREATE TABLE IF NOT EXISTS Book"));
            assert_eq!(source.code.as_deref(), Some("SQLITE_IOERR"));
        }
        other => panic!("unexpected error: {other}"),
    }
    // Author was created, Review never attempted.
    assert_eq!(engine.tables, vec!["Author"]);
    assert_eq!(engine.statements.len(), 2);
}

#[tokio::test]
async fn test_not_connected_guard() {
    let schema = book_schema();
    let applier = SchemaApplier::new(SqliteDialect::new());
    let mut engine = MockEngine::default();

    let err = applier.create_tables(&schema, &mut engine).await.unwrap_err();
    assert!(matches!(
        err,
        ApplyError::Connection(ConnectionError::NotConnected)
    ));
    assert!(engine.statements.is_empty());

    let err = applier
        .create_table(&numeric_table("Author"), &mut engine)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplyError::Connection(ConnectionError::NotConnected)
    ));
    assert!(engine.statements.is_empty());
}

#[tokio::test]
async fn test_schema_errors_cause_no_execution() {
    // Second table is malformed (String without Size); nothing may run.
    let schema = SchemaDefinition::new(vec![
        numeric_table("Author"),
        TableDefinition::new(
            "Book",
            vec![ColumnDefinition::new("Title", ColumnType::String)],
        ),
    ]);
    let applier = SchemaApplier::new(SqliteDialect::new());
    let mut engine = MockEngine::online();

    let err = applier.create_tables(&schema, &mut engine).await.unwrap_err();
    assert!(matches!(err, ApplyError::Schema(_)));
    assert!(engine.statements.is_empty());
    assert!(engine.tables.is_empty());
}

#[tokio::test]
async fn test_session_feeds_the_applier() {
    struct MockConnector;

    impl Connector for MockConnector {
        type Executor = MockEngine;

        fn open(&self, _config: &SessionConfig) -> Result<Self::Executor, ConnectionError> {
            Ok(MockEngine::online())
        }
    }

    let mut session = Session::new(MockConnector, SessionConfig::new("./bookstore.db"));
    let applier = SchemaApplier::new(SqliteDialect::new());

    let executor = session.connect().unwrap();
    applier.create_tables(&book_schema(), executor).await.unwrap();

    // Reconnecting hands back the same engine with the table still present.
    let executor = session.connect().unwrap();
    assert_eq!(executor.tables, vec!["Book"]);
}
