//! End-to-end flow through the production routing with in-memory adapters.
//!
//! A visitor registers, is promoted to admin, signs in, and reviews a guest's
//! booking; a second guest then collides with the approved dates.

use std::sync::Arc;
use std::time::Duration;

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use mockable::DefaultClock;
use serde_json::{Value, json};
use temple_backend::domain::ports::UserRepository;
use temple_backend::domain::{Messages, TRACE_ID_HEADER, UserRole};
use temple_backend::inbound::http::health::HealthState;
use temple_backend::inbound::http::session_config::{SESSION_COOKIE_NAME, SessionSettings};
use temple_backend::outbound::memory::InMemoryUserRepository;
use temple_backend::outbound::security::BcryptPasswordHasher;
use temple_backend::server::{AppDependencies, build_app, in_memory_state};

fn booking_body(start: &str, end: &str) -> Value {
    json!({
        "fullName": "Somchai Jaidee",
        "email": "somchai@example.org",
        "phone": "+66 81 234 5678",
        "startDate": start,
        "endDate": end,
        "numberOfPeople": 3,
        "purpose": "Novice ordination",
    })
}

fn dependencies(users: Arc<InMemoryUserRepository>) -> AppDependencies {
    let http_state = in_memory_state(
        users,
        BcryptPasswordHasher::with_cost(4),
        Arc::new(DefaultClock),
        Messages::default(),
    );
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(http_state),
        session: SessionSettings {
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
        },
        session_ttl: Duration::from_secs(3600),
    }
}

#[actix_web::test]
async fn admin_reviews_bookings_end_to_end() {
    let users = Arc::new(InMemoryUserRepository::new());
    let app = actix_test::init_service(build_app(dependencies(users.clone()))).await;

    let register = actix_test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "username": "abbot",
            "email": "abbot@example.org",
            "password": "lotus-pond",
        }))
        .to_request();
    let res = actix_test::call_service(&app, register).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["user"]["role"], "user");

    let promoted = users
        .set_role("abbot", UserRole::Admin)
        .await
        .expect("role update")
        .expect("account exists");
    assert_eq!(promoted.role(), UserRole::Admin);

    let login = actix_test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "login": "abbot@example.org", "password": "lotus-pond" }))
        .to_request();
    let res = actix_test::call_service(&app, login).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .expect("session cookie");

    let create = actix_test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(booking_body("2099-07-01", "2099-07-03"))
        .to_request();
    let res = actix_test::call_service(&app, create).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["booking"]["status"], "pending");
    let id = body["booking"]["id"]
        .as_str()
        .expect("booking id")
        .to_owned();

    let anonymous_list = actix_test::TestRequest::get()
        .uri("/api/bookings")
        .to_request();
    let res = actix_test::call_service(&app, anonymous_list).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let approve = actix_test::TestRequest::patch()
        .uri(&format!("/api/bookings/{id}"))
        .cookie(cookie.clone())
        .set_json(json!({ "status": "approved" }))
        .to_request();
    let res = actix_test::call_service(&app, approve).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["status"], "approved");

    let clash = actix_test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(booking_body("2099-07-03", "2099-07-05"))
        .to_request();
    let res = actix_test::call_service(&app, clash).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "conflict");

    let list = actix_test::TestRequest::get()
        .uri("/api/bookings")
        .cookie(cookie)
        .to_request();
    let res = actix_test::call_service(&app, list).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn database_probe_reports_in_memory_storage_as_reachable() {
    let app = actix_test::init_service(build_app(dependencies(Arc::new(
        InMemoryUserRepository::new(),
    ))))
    .await;

    let req = actix_test::TestRequest::get().uri("/health/db").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn wrong_password_is_unauthorised_with_a_trace_id() {
    let app = actix_test::init_service(build_app(dependencies(Arc::new(
        InMemoryUserRepository::new(),
    ))))
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "login": "nobody", "password": "whatever" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "unauthorized");
}

#[actix_web::test]
async fn email_differing_only_in_case_is_already_taken() {
    let app = actix_test::init_service(build_app(dependencies(Arc::new(
        InMemoryUserRepository::new(),
    ))))
    .await;

    for (username, email, expected) in [
        ("novice", "novice@example.org", StatusCode::CREATED),
        ("novice2", "NOVICE@Example.ORG", StatusCode::BAD_REQUEST),
    ] {
        let req = actix_test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({ "username": username, "email": email, "password": "secret1" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), expected, "registering {email}");
    }
}
