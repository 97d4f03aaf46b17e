//! Port for the database reachability check behind `/health/db`.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while probing the database.
    pub enum DatabaseProbeError {
        /// No connection could be checked out.
        Connection { message: String } => "database probe connection failed: {message}"; unavailable,
        /// The probe query failed.
        Query { message: String } => "database probe query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Run a trivial round trip against the database.
    async fn ping(&self) -> Result<(), DatabaseProbeError>;
}

/// Probe used when no database is configured; always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedDatabaseProbe;

#[async_trait]
impl DatabaseProbe for DetachedDatabaseProbe {
    async fn ping(&self) -> Result<(), DatabaseProbeError> {
        Ok(())
    }
}
