//! Liveness, readiness and database probes.
//!
//! Probe responses are never cached.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::header;
use actix_web::{HttpResponse, HttpResponseBuilder, get, web};
use serde_json::json;
use tracing::warn;

use crate::domain::MessageKey;
use crate::inbound::http::state::HttpState;

/// Process health flags flipped by the server lifecycle.
///
/// Starts live but not ready; `mark_ready` runs once the listener is bound.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

fn no_store(ok: bool) -> HttpResponseBuilder {
    let mut builder = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder.insert_header((header::CACHE_CONTROL, "no-store"));
    builder
}

/// Readiness probe: 200 once state is built and the listener is bound.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Ready for traffic"),
        (status = 503, description = "Still starting")
    )
)]
#[get("/health/ready")]
pub async fn ready(health: web::Data<HealthState>) -> HttpResponse {
    no_store(health.is_ready()).finish()
}

/// Liveness probe: 503 once shutdown has begun.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Alive"),
        (status = 503, description = "Draining")
    )
)]
#[get("/health/live")]
pub async fn live(health: web::Data<HealthState>) -> HttpResponse {
    no_store(health.is_alive()).finish()
}

/// Round-trip `SELECT 1` through the pool.
///
/// In-memory deployments have no pool and always report success.
#[utoipa::path(
    get,
    path = "/health/db",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable")
    )
)]
#[get("/health/db")]
pub async fn database(state: web::Data<HttpState>) -> HttpResponse {
    match state.database.ping().await {
        Ok(()) => no_store(true).json(json!({
            "message": state.messages.text(MessageKey::DatabaseReachable),
        })),
        Err(error) => {
            warn!(error = %error, "database probe failed");
            no_store(false).json(json!({
                "error": state.messages.text(MessageKey::DatabaseUnreachable),
            }))
        }
    }
}
