//! Gallery endpoints. Images are stored elsewhere and referenced by URL.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, GalleryItem, GalleryItemId, GallerySubmission, MessageKey};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::MessageResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_id;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// `temple`, `activity`, `ceremony`, `landscape` or `other`.
    pub category: Option<String>,
}

impl From<GalleryRequest> for GallerySubmission {
    fn from(value: GalleryRequest) -> Self {
        Self {
            title: value.title,
            description: value.description,
            image_url: value.image_url,
            category: value.category,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GalleryCreatedResponse {
    pub message: String,
    pub image: GalleryItem,
}

#[utoipa::path(
    get,
    path = "/api/gallery",
    responses(
        (status = 200, description = "Gallery, newest first", body = [GalleryItem]),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["gallery"],
    operation_id = "listGallery",
    security([])
)]
#[get("/gallery")]
pub async fn list_gallery(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<GalleryItem>>> {
    state.gallery_query.list().await.map(web::Json)
}

#[utoipa::path(
    post,
    path = "/api/gallery",
    request_body = GalleryRequest,
    responses(
        (status = 201, description = "Image added", body = GalleryCreatedResponse),
        (status = 400, description = "Missing field or unknown category", body = Error),
        (status = 401, description = "Admin session required", body = Error)
    ),
    tags = ["gallery"],
    operation_id = "createGalleryItem"
)]
#[post("/gallery")]
pub async fn create_gallery_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<GalleryRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let image = state.gallery.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(GalleryCreatedResponse {
        message: state.messages.text(MessageKey::ImageAdded).to_owned(),
        image,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    params(("id" = String, Path, description = "Gallery item id")),
    responses(
        (status = 200, description = "Image deleted", body = MessageResponse),
        (status = 401, description = "Admin session required", body = Error),
        (status = 404, description = "No such image", body = Error)
    ),
    tags = ["gallery"],
    operation_id = "deleteGalleryItem"
)]
#[delete("/gallery/{id}")]
pub async fn delete_gallery_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    session.require_admin()?;
    let id: GalleryItemId = parse_path_id(state.messages, "id", &path)?;
    state.gallery.delete(id).await?;
    Ok(web::Json(MessageResponse {
        message: state.messages.text(MessageKey::ImageDeleted).to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockGalleryCommand, MockGalleryQuery};
    use crate::domain::{GalleryCategory, INVALID_CATEGORY, UserRole};
    use crate::inbound::http::test_utils::{
        sign_in, signed_in_cookie, state_with, test_session_middleware,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn ubosot() -> GalleryItem {
        let at = Utc
            .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
            .single()
            .expect("timestamp");
        GalleryItem {
            id: GalleryItemId::random(),
            title: "อุโบสถ".to_owned(),
            description: "อุโบสถยามเย็น".to_owned(),
            image_url: "https://example.com/ubosot.jpg".to_owned(),
            category: GalleryCategory::Temple,
            created_at: at,
            updated_at: at,
        }
    }

    macro_rules! gallery_app {
        ($role:expr, $configure:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(state_with($configure)))
                    .wrap(test_session_middleware())
                    .route("/test/sign-in", sign_in($role))
                    .service(
                        web::scope("/api")
                            .service(list_gallery)
                            .service(create_gallery_item)
                            .service(delete_gallery_item),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn listing_is_public() {
        let mut query = MockGalleryQuery::new();
        query.expect_list().return_once(|| Ok(vec![ubosot()]));
        let app = gallery_app!(UserRole::User, |ports| ports.gallery_query = Arc::new(query));

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/gallery").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body[0]["category"], "temple");
    }

    #[actix_web::test]
    async fn admins_add_images() {
        let mut command = MockGalleryCommand::new();
        command.expect_create().return_once(|_| Ok(ubosot()));
        let app = gallery_app!(UserRole::Admin, |ports| ports.gallery = Arc::new(command));
        let cookie = signed_in_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/gallery")
                .cookie(cookie)
                .set_json(json!({
                    "title": "อุโบสถ",
                    "description": "อุโบสถยามเย็น",
                    "imageUrl": "https://example.com/ubosot.jpg",
                    "category": "temple",
                }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "เพิ่มรูปภาพเรียบร้อย");
        assert_eq!(body["image"]["title"], "อุโบสถ");
    }

    #[actix_web::test]
    async fn invalid_category_surfaces_its_code() {
        let mut command = MockGalleryCommand::new();
        command.expect_create().return_once(|_| {
            Err(Error::invalid_request("หมวดหมู่ไม่ถูกต้อง")
                .with_details(json!({ "field": "category", "code": INVALID_CATEGORY })))
        });
        let app = gallery_app!(UserRole::Admin, |ports| ports.gallery = Arc::new(command));
        let cookie = signed_in_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/gallery")
                .cookie(cookie)
                .set_json(json!({ "category": "selfie" }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], INVALID_CATEGORY);
    }

    #[actix_web::test]
    async fn visitors_cannot_delete_images() {
        let mut command = MockGalleryCommand::new();
        command.expect_delete().never();
        let app = gallery_app!(UserRole::User, |ports| ports.gallery = Arc::new(command));
        let cookie = signed_in_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/gallery/{}", GalleryItemId::random()))
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
