use crate::core::EngineError;

/// Outcome of one successfully executed statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionSummary {
    pub rows_affected: u64,
}

/// Injected "execute one statement" capability of the storage engine.
///
/// One statement per call, no implicit transaction wrapping. Timeouts and
/// cancellation, if needed, belong to the implementation behind this trait.
pub trait StatementExecutor {
    /// Whether the underlying connection is established.
    fn connected(&self) -> bool;

    /// Execute one DDL statement to completion.
    fn run(
        &mut self,
        ddl: &str,
    ) -> impl Future<Output = Result<ExecutionSummary, EngineError>> + Send;
}
