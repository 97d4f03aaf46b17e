//! Everything `create_server` needs, gathered before the listener starts.

use std::net::SocketAddr;
use std::time::Duration;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

use crate::domain::Messages;
use crate::inbound::http::session_config::SessionSettings;
use crate::outbound::persistence::DbPool;

pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) session_ttl: Duration,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) messages: Messages,
    pub(crate) db_pool: Option<DbPool>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        session: SessionSettings,
        session_ttl: Duration,
        bind_addr: SocketAddr,
        messages: Messages,
    ) -> Self {
        Self {
            session,
            session_ttl,
            bind_addr,
            messages,
            db_pool: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Switch every repository from the in-memory adapters to PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether repositories will be backed by PostgreSQL.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.db_pool.is_some()
    }
}
