//! 라우트 구성
//!
//! ```text
//! /health
//! /api/auth     register, login, me
//! /api/recipes  피드, CRUD, 댓글/답글/좋아요
//! /api/users    profile, {id}/recipes
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_recipe_routes(cfg);
    configure_user_routes(cfg);
}

/// JSON 본문 파싱 실패도 `{ "error": ... }` 형식의 400으로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::ValidationError("Invalid request body".to_string()).into()
    })
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::current_user),
    );
}

fn configure_recipe_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/recipes")
            .service(handlers::recipes::list_recipes)
            .service(handlers::recipes::create_recipe)
            .service(handlers::recipes::get_recipe)
            .service(handlers::recipes::update_recipe)
            .service(handlers::recipes::delete_recipe)
            // 댓글/답글/좋아요
            .service(handlers::engagement::add_comment)
            .service(handlers::engagement::add_reply)
            .service(handlers::engagement::toggle_like),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // `/profile`을 `/{user_id}/recipes`보다 먼저 등록
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::get_profile)
            .service(handlers::users::update_profile)
            .service(handlers::users::delete_profile)
            .service(handlers::users::user_recipes),
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "recipe_share_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "image_host": "Cloudinary",
            "dependency_injection": "inventory registry"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "recipe_share_backend");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_malformed_json_body_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid request body");
    }
}
