//! Temple activity endpoints.
//!
//! ```text
//! GET    /api/activities        public, ascending by date
//! POST   /api/activities        admin
//! PATCH  /api/activities/{id}   admin, partial update
//! DELETE /api/activities/{id}   admin
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Activity, ActivityId, ActivitySubmission, Error, MessageKey};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::MessageResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_id;

/// Activity create or patch body. Create requires every field except
/// `status`; patch applies only the fields present.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    /// `upcoming`, `ongoing` or `completed`.
    pub status: Option<String>,
}

impl From<ActivityRequest> for ActivitySubmission {
    fn from(value: ActivityRequest) -> Self {
        Self {
            title: value.title,
            description: value.description,
            date: value.date,
            time: value.time,
            location: value.location,
            image_url: value.image_url,
            status: value.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityCreatedResponse {
    pub message: String,
    pub activity: Activity,
}

#[utoipa::path(
    get,
    path = "/api/activities",
    responses(
        (status = 200, description = "Activities in date order", body = [Activity]),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["activities"],
    operation_id = "listActivities",
    security([])
)]
#[get("/activities")]
pub async fn list_activities(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Activity>>> {
    state.activities_query.list().await.map(web::Json)
}

#[utoipa::path(
    post,
    path = "/api/activities",
    request_body = ActivityRequest,
    responses(
        (status = 201, description = "Activity created", body = ActivityCreatedResponse),
        (status = 400, description = "Missing or invalid field", body = Error),
        (status = 401, description = "Admin session required", body = Error)
    ),
    tags = ["activities"],
    operation_id = "createActivity"
)]
#[post("/activities")]
pub async fn create_activity(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ActivityRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let activity = state.activities.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(ActivityCreatedResponse {
        message: state.messages.text(MessageKey::ActivityAdded).to_owned(),
        activity,
    }))
}

#[utoipa::path(
    patch,
    path = "/api/activities/{id}",
    params(("id" = String, Path, description = "Activity id")),
    request_body = ActivityRequest,
    responses(
        (status = 200, description = "Patched activity", body = Activity),
        (status = 400, description = "Invalid field or malformed id", body = Error),
        (status = 401, description = "Admin session required", body = Error),
        (status = 404, description = "No such activity", body = Error)
    ),
    tags = ["activities"],
    operation_id = "updateActivity"
)]
#[patch("/activities/{id}")]
pub async fn update_activity(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ActivityRequest>,
) -> ApiResult<web::Json<Activity>> {
    session.require_admin()?;
    let id: ActivityId = parse_path_id(state.messages, "id", &path)?;
    state
        .activities
        .update(id, payload.into_inner().into())
        .await
        .map(web::Json)
}

#[utoipa::path(
    delete,
    path = "/api/activities/{id}",
    params(("id" = String, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Activity deleted", body = MessageResponse),
        (status = 401, description = "Admin session required", body = Error),
        (status = 404, description = "No such activity", body = Error)
    ),
    tags = ["activities"],
    operation_id = "deleteActivity"
)]
#[delete("/activities/{id}")]
pub async fn delete_activity(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    session.require_admin()?;
    let id: ActivityId = parse_path_id(state.messages, "id", &path)?;
    state.activities.delete(id).await?;
    Ok(web::Json(MessageResponse {
        message: state.messages.text(MessageKey::ActivityDeleted).to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockActivityCommand, MockActivityQuery};
    use crate::domain::{ActivityStatus, UserRole};
    use crate::inbound::http::test_utils::{
        sign_in, signed_in_cookie, state_with, test_session_middleware,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn kathin() -> Activity {
        let at = Utc
            .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
            .single()
            .expect("timestamp");
        Activity {
            id: ActivityId::random(),
            title: "ทอดกฐิน".to_owned(),
            description: "พิธีทอดกฐินประจำปี".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 10, 20).expect("date"),
            time: "09:00".to_owned(),
            location: "ศาลาการเปรียญ".to_owned(),
            image_url: "https://example.com/kathin.jpg".to_owned(),
            status: ActivityStatus::Upcoming,
            created_at: at,
            updated_at: at,
        }
    }

    macro_rules! activity_app {
        ($role:expr, $configure:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(state_with($configure)))
                    .wrap(test_session_middleware())
                    .route("/test/sign-in", sign_in($role))
                    .service(
                        web::scope("/api")
                            .service(list_activities)
                            .service(create_activity)
                            .service(update_activity)
                            .service(delete_activity),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn listing_is_public() {
        let mut query = MockActivityQuery::new();
        query.expect_list().return_once(|| Ok(vec![kathin()]));
        let app = activity_app!(UserRole::User, |ports| ports.activities_query = Arc::new(query));

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/activities").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body[0]["date"], "2025-10-20");
        assert_eq!(body[0]["imageUrl"], "https://example.com/kathin.jpg");
    }

    #[rstest]
    #[case("POST", "/api/activities")]
    #[case("PATCH", "/api/activities/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[case("DELETE", "/api/activities/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[actix_web::test]
    async fn mutations_reject_anonymous_callers(#[case] method: &str, #[case] uri: &str) {
        let mut command = MockActivityCommand::new();
        command.expect_create().never();
        command.expect_update().never();
        command.expect_delete().never();
        let app = activity_app!(UserRole::Admin, |ports| ports.activities = Arc::new(command));

        let request = actix_test::TestRequest::default()
            .method(method.parse().expect("method"))
            .uri(uri)
            .set_json(json!({ "title": "x" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn admins_create_activities() {
        let mut command = MockActivityCommand::new();
        command
            .expect_create()
            .withf(|submission| submission.status.is_none())
            .return_once(|_| Ok(kathin()));
        let app = activity_app!(UserRole::Admin, |ports| ports.activities = Arc::new(command));
        let cookie = signed_in_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/activities")
                .cookie(cookie)
                .set_json(json!({
                    "title": "ทอดกฐิน",
                    "description": "พิธีทอดกฐินประจำปี",
                    "date": "2025-10-20",
                    "time": "09:00",
                    "location": "ศาลาการเปรียญ",
                    "imageUrl": "https://example.com/kathin.jpg",
                }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "เพิ่มกิจกรรมเรียบร้อย");
        assert_eq!(body["activity"]["status"], "upcoming");
    }

    #[actix_web::test]
    async fn deleting_a_missing_activity_is_not_found() {
        let mut command = MockActivityCommand::new();
        command
            .expect_delete()
            .return_once(|_| Err(Error::not_found("ไม่พบข้อมูลกิจกรรม")));
        let app = activity_app!(UserRole::Admin, |ports| ports.activities = Arc::new(command));
        let cookie = signed_in_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/activities/{}", ActivityId::random()))
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "not_found");
    }
}
