//! Application assembly: routes, middleware and the HTTP listener.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub use metrics::make_metrics;
pub use state_builders::{Adapters, assemble_ports, in_memory_state, persistent_state};

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use std::time::Duration;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, database, live, ready};
use crate::inbound::http::session_config::SessionSettings;
use crate::inbound::http::session_config::fingerprint::KeyFingerprint;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{api_services, json_config};

/// Per-worker inputs to [`build_app`].
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub session: SessionSettings,
    pub session_ttl: Duration,
}

/// Build one worker's application.
///
/// Public so end-to-end tests can drive the exact production routing with
/// `actix_web::test::init_service`.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        session,
        session_ttl,
    } = deps;
    let messages = http_state.messages;

    let api = web::scope("/api")
        .wrap(session.middleware(session_ttl))
        .configure(api_services);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config(messages))
        .wrap(Trace)
        .service(api)
        .service(database)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and return the running server.
///
/// Readiness flips once the socket is bound.
///
/// # Errors
///
/// Propagates bind failures.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        session,
        session_ttl,
        bind_addr,
        messages,
        db_pool,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    let http_state = web::Data::new(build_http_state(db_pool.as_ref(), messages));
    info!(
        storage = if db_pool.is_some() { "postgres" } else { "memory" },
        session_key = %KeyFingerprint::of(&session.key),
        %bind_addr,
        "starting server"
    );

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::new(prometheus);

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            session: session.clone(),
            session_ttl,
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
