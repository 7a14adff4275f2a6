//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users/profile?userId=` | 프로필 조회 | 200 |
//! | `PUT` | `/api/users/profile` | 프로필 수정 (multipart) | 200 |
//! | `DELETE` | `/api/users/profile?userId=` | 계정과 레시피 삭제 | 200 |
//! | `GET` | `/api/users/{id}/recipes` | 사용자의 레시피 목록 | 200 |
//!
//! 계정 삭제는 호스팅된 프로필/레시피 이미지까지 정리합니다.
//! 이미지 삭제가 실패해도 문서 삭제는 계속 진행합니다.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, delete, get, put, web};
use serde_json::json;

use crate::config::ImageHostConfig;
use crate::core::errors::AppError;
use crate::domain::dto::pagination::PageQuery;
use crate::domain::dto::recipes::request::recipe_form::INVALID_ID_FORMAT;
use crate::domain::dto::users::request::{ONE_PROFILE_IMAGE, ProfileChanges, ProfileQuery};
use crate::services::{recipes::RecipeService, users::UserService};
use crate::utils::multipart::{FormData, UploadLimits};
use crate::utils::string_utils::parse_object_id;

#[get("/profile")]
pub async fn get_profile(query: web::Query<ProfileQuery>) -> Result<HttpResponse, AppError> {
    let user_id = query.object_id()?;

    let service = UserService::instance();
    let user = service.profile(&user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

/// 빈 이름/이메일은 무시하고, 프로필 사진이 있으면 새로 올립니다.
#[put("/profile")]
pub async fn update_profile(payload: Multipart) -> Result<HttpResponse, AppError> {
    let limits = UploadLimits::new(ImageHostConfig::upload_limit(), 1, ONE_PROFILE_IMAGE);
    let mut form = FormData::from_multipart(payload, limits).await?;
    let changes = ProfileChanges::from_form(&form)?;
    let profile_image = form
        .take_files(ProfileChanges::PROFILE_IMAGE_FIELD)
        .into_iter()
        .next();

    let service = UserService::instance();
    let user = service.update_profile(changes, profile_image).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile updated successfully",
        "user": user
    })))
}

#[delete("/profile")]
pub async fn delete_profile(query: web::Query<ProfileQuery>) -> Result<HttpResponse, AppError> {
    let user_id = query.object_id()?;

    let service = UserService::instance();
    service.delete_account(&user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User and related recipes deleted successfully"
    })))
}

#[get("/{user_id}/recipes")]
pub async fn user_recipes(
    user_id: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let user_id = parse_object_id(&user_id, INVALID_ID_FORMAT)?;

    let service = RecipeService::instance();
    let response = service.user_recipes(&user_id, query.page_request()).await?;

    Ok(HttpResponse::Ok().json(response))
}
