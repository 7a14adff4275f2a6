//! # Recipe HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/recipes` | 피드 (필터, 검색, 페이지네이션) | 200 |
//! | `POST` | `/api/recipes` | 레시피 등록 (multipart) | 201 |
//! | `GET` | `/api/recipes/{id}` | 레시피 상세 | 200 |
//! | `PUT` | `/api/recipes/{id}` | 레시피 수정 (multipart) | 200 |
//! | `DELETE` | `/api/recipes/{id}` | 레시피 삭제 | 200 |
//!
//! multipart 요청은 서비스 호출 전에 폼 검증(이미지 수, JSON 필드, 필수 값)을 모두
//! 끝내므로, 잘못된 요청이 이미지를 업로드하는 일은 없습니다.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;

use crate::config::{ImageHostConfig, MAX_RECIPE_IMAGES};
use crate::core::errors::AppError;
use crate::domain::dto::recipes::{
    request::{
        NewRecipe, RecipeChanges, RecipeListQuery,
        recipe_form::{INVALID_ID_FORMAT, RECIPE_IMAGES_FIELD, TOO_MANY_IMAGES},
    },
    response::RecipeMessageResponse,
};
use crate::services::recipes::RecipeService;
use crate::utils::multipart::{FormData, UploadLimits};
use crate::utils::string_utils::parse_object_id;

fn recipe_upload_limits() -> UploadLimits {
    UploadLimits::new(ImageHostConfig::upload_limit(), MAX_RECIPE_IMAGES, TOO_MANY_IMAGES)
}

#[get("")]
pub async fn list_recipes(query: web::Query<RecipeListQuery>) -> Result<HttpResponse, AppError> {
    let service = RecipeService::instance();
    let response = service.list(&query).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("")]
pub async fn create_recipe(payload: Multipart) -> Result<HttpResponse, AppError> {
    let mut form = FormData::from_multipart(payload, recipe_upload_limits()).await?;
    let new_recipe = NewRecipe::from_form(&form)?;
    let images = form.take_files(RECIPE_IMAGES_FIELD);

    let service = RecipeService::instance();
    let recipe = service.create(new_recipe, images).await?;

    Ok(HttpResponse::Created().json(RecipeMessageResponse {
        message: "Recipe successfully created".to_string(),
        recipe,
    }))
}

#[get("/{recipe_id}")]
pub async fn get_recipe(recipe_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let recipe_id = parse_object_id(&recipe_id, INVALID_ID_FORMAT)?;

    let service = RecipeService::instance();
    let recipe = service.get(&recipe_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "recipe": recipe })))
}

/// 폼에 있는 필드만 수정합니다.
#[put("/{recipe_id}")]
pub async fn update_recipe(
    recipe_id: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let recipe_id = parse_object_id(&recipe_id, INVALID_ID_FORMAT)?;

    let mut form = FormData::from_multipart(payload, recipe_upload_limits()).await?;
    let changes = RecipeChanges::from_form(&form)?;
    let images = form.take_files(RECIPE_IMAGES_FIELD);

    let service = RecipeService::instance();
    let recipe = service.update(&recipe_id, changes, images).await?;

    Ok(HttpResponse::Ok().json(RecipeMessageResponse {
        message: "Recipe successfully updated".to_string(),
        recipe,
    }))
}

#[delete("/{recipe_id}")]
pub async fn delete_recipe(recipe_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let recipe_id = parse_object_id(&recipe_id, INVALID_ID_FORMAT)?;

    let service = RecipeService::instance();
    service.delete(&recipe_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Recipe successfully deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::multipart::tests::{Part, content_type_header, multipart_body};
    use actix_web::{App, http::StatusCode, test};

    async fn post_form(parts: &[Part<'_>]) -> (StatusCode, String) {
        let app = test::init_service(App::new().service(web::scope("/api/recipes").service(create_recipe))).await;

        let req = test::TestRequest::post()
            .uri("/api/recipes")
            .insert_header(("Content-Type", content_type_header()))
            .set_payload(multipart_body(parts))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;

        (status, body["error"].as_str().unwrap_or_default().to_string())
    }

    #[actix_web::test]
    async fn test_create_rejects_more_than_three_images() {
        let (status, error) = post_form(&[
            Part::Text("name", "Menemen"),
            Part::File("recipeImages", "1.jpg", "image/jpeg", b"1"),
            Part::File("recipeImages", "2.jpg", "image/jpeg", b"2"),
            Part::File("recipeImages", "3.jpg", "image/jpeg", b"3"),
            Part::File("recipeImages", "4.jpg", "image/jpeg", b"4"),
        ])
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "You can upload up to 3 images");
    }

    #[actix_web::test]
    async fn test_create_rejects_malformed_json_field() {
        let (status, error) = post_form(&[
            Part::Text("name", "Menemen"),
            Part::Text("categories", "[{broken"),
        ])
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "Invalid categories format");
    }

    #[actix_web::test]
    async fn test_create_requires_fields() {
        let (status, error) = post_form(&[
            Part::Text("name", "Menemen"),
            Part::Text("ingredientList", r#"["egg"]"#),
        ])
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "Required fields are missing");
    }

    #[actix_web::test]
    async fn test_create_rejects_non_image_upload() {
        let (status, error) = post_form(&[
            Part::Text("name", "Menemen"),
            Part::File("recipeImages", "notes.txt", "text/plain", b"hello"),
        ])
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "Only image uploads are allowed");
    }

    #[actix_web::test]
    async fn test_invalid_recipe_id_is_bad_request() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/recipes")
                    .service(get_recipe)
                    .service(delete_recipe),
            ),
        )
        .await;

        for req in [
            test::TestRequest::get().uri("/api/recipes/not-an-id").to_request(),
            test::TestRequest::delete().uri("/api/recipes/123").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Invalid ID format");
        }
    }
}
