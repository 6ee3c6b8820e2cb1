//! Connection lifecycle contract
//!
//! The storage connection itself is an external collaborator reached through
//! the `Connector` seam; this module owns only the state machine the applier
//! depends on: `Disconnected -> Connecting -> Connected`, no automatic
//! reconnection, no way back to `Disconnected` except dropping the session.

use serde::Deserialize;

use crate::applier::StatementExecutor;
use crate::core::ConnectionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// Connection settings, passed in explicitly by the caller (no ambient
/// settings lookup).
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Path to the database file
    pub file_path: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl SessionConfig {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            password: None,
        }
    }

    /// Loggable rendition of the settings. No leaking passwords!
    pub fn redacted(&self) -> String {
        let password = if self.password.is_some() {
            "*****************"
        } else {
            "<none>"
        };
        format!("file_path={}, password={password}", self.file_path)
    }
}

/// Opens a connection and hands back the statement-execution capability.
pub trait Connector {
    type Executor: StatementExecutor;

    fn open(&self, config: &SessionConfig) -> Result<Self::Executor, ConnectionError>;
}

/// At most one live connection per session.
pub struct Session<C: Connector> {
    connector: C,
    config: SessionConfig,
    state: ConnectionState,
    executor: Option<C::Executor>,
}

impl<C: Connector> Session<C> {
    pub const fn new(connector: C, config: SessionConfig) -> Self {
        Self {
            connector,
            config,
            state: ConnectionState::Disconnected,
            executor: None,
        }
    }

    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    pub const fn connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected)
    }

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Establish the connection, or hand back the existing one.
    ///
    /// A second connect while connected is non-fatal: it logs a warning and
    /// returns the live executor unchanged. A failed open leaves the session
    /// disconnected; the caller decides whether to try again.
    pub fn connect(&mut self) -> Result<&mut C::Executor, ConnectionError> {
        if self.config.file_path.is_empty() {
            log::error!(
                "refusing to connect, database file path is empty ({})",
                self.config.redacted()
            );
            return Err(ConnectionError::ConnectFailed {
                path: String::new(),
                message: "database file path is empty".to_string(),
            });
        }

        if self.executor.is_none() {
            self.state = ConnectionState::Connecting;
            match self.connector.open(&self.config) {
                Ok(executor) => {
                    log::info!("connected to [{}]", self.config.file_path);
                    self.state = ConnectionState::Connected;
                    self.executor = Some(executor);
                }
                Err(err) => {
                    log::error!(
                        "error connecting ({}): {err}",
                        self.config.redacted()
                    );
                    self.state = ConnectionState::Disconnected;
                    return Err(err);
                }
            }
        } else {
            log::warn!(
                "already connected, skipping the second connect call ({})",
                self.config.redacted()
            );
        }

        self.executor.as_mut().ok_or(ConnectionError::NotConnected)
    }

    /// The live executor, or `NotConnected` when `connect` has not succeeded.
    pub fn executor(&mut self) -> Result<&mut C::Executor, ConnectionError> {
        self.executor.as_mut().ok_or(ConnectionError::NotConnected)
    }
}
