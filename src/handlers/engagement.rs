//! # Comment / Reply / Like Handlers
//!
//! `/api/recipes/{id}` 아래에 붙는 참여 기능 엔드포인트입니다.
//!
//! - `POST /{id}/comments` - 댓글 추가 (201)
//! - `POST /{id}/comments/{comment_id}/replies` - 답글 추가 (201)
//! - `POST /{id}/likes` - 좋아요 토글 (200)

use actix_web::{HttpResponse, post, web};

use crate::core::errors::AppError;
use crate::domain::dto::recipes::{
    request::{
        CommentRequest, LikeRequest,
        engagement_request::{COMMENT_FIELDS_REQUIRED, REPLY_FIELDS_REQUIRED},
        recipe_form::INVALID_ID_FORMAT,
    },
    response::RecipeMessageResponse,
};
use crate::services::recipes::EngagementService;
use crate::utils::string_utils::parse_object_id;

#[post("/{recipe_id}/comments")]
pub async fn add_comment(
    recipe_id: web::Path<String>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse, AppError> {
    let (user, content) = payload.into_inner().into_parts(COMMENT_FIELDS_REQUIRED)?;
    let recipe_id = parse_object_id(&recipe_id, INVALID_ID_FORMAT)?;

    let service = EngagementService::instance();
    let recipe = service.add_comment(&recipe_id, user, content).await?;

    Ok(HttpResponse::Created().json(RecipeMessageResponse {
        message: "Comment successfully added".to_string(),
        recipe,
    }))
}

#[post("/{recipe_id}/comments/{comment_id}/replies")]
pub async fn add_reply(
    path: web::Path<(String, String)>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse, AppError> {
    let (user, content) = payload.into_inner().into_parts(REPLY_FIELDS_REQUIRED)?;
    let (recipe_id, comment_id) = path.into_inner();
    let recipe_id = parse_object_id(&recipe_id, INVALID_ID_FORMAT)?;
    let comment_id = parse_object_id(&comment_id, INVALID_ID_FORMAT)?;

    let service = EngagementService::instance();
    let recipe = service.add_reply(&recipe_id, &comment_id, user, content).await?;

    Ok(HttpResponse::Created().json(RecipeMessageResponse {
        message: "Reply successfully added".to_string(),
        recipe,
    }))
}

/// 이미 좋아요한 사용자면 취소, 아니면 추가합니다.
#[post("/{recipe_id}/likes")]
pub async fn toggle_like(
    recipe_id: web::Path<String>,
    payload: web::Json<LikeRequest>,
) -> Result<HttpResponse, AppError> {
    let user = payload.user_object_id()?;
    let recipe_id = parse_object_id(&recipe_id, INVALID_ID_FORMAT)?;

    let service = EngagementService::instance();
    let response = service.toggle_like(&recipe_id, user).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/recipes")
                    .service(add_comment)
                    .service(add_reply)
                    .service(toggle_like),
            ),
        )
        .await;

        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();

        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_comment_requires_user_and_content() {
        let (status, body) = post_json(
            "/api/recipes/64b7f0c2a1b2c3d4e5f60718/comments",
            json!({ "userID": "64b7f0c2a1b2c3d4e5f60719" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID and comment content are required");
    }

    #[actix_web::test]
    async fn test_reply_requires_user_and_content() {
        let (status, body) = post_json(
            "/api/recipes/64b7f0c2a1b2c3d4e5f60718/comments/64b7f0c2a1b2c3d4e5f60720/replies",
            json!({ "content": "Katılıyorum" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID and reply content are required");
    }

    #[actix_web::test]
    async fn test_like_requires_user() {
        let (status, body) = post_json("/api/recipes/64b7f0c2a1b2c3d4e5f60718/likes", json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID is required");
    }

    #[actix_web::test]
    async fn test_like_with_invalid_recipe_id() {
        let (status, body) = post_json(
            "/api/recipes/latest/likes",
            json!({ "userID": "64b7f0c2a1b2c3d4e5f60719" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid ID format");
    }
}
