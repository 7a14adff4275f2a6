//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 현재 사용자 조회 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `POST /api/auth/register` - 회원가입 (201)
//! - `POST /api/auth/login` - 이메일/비밀번호 로그인, JWT 발급
//! - `GET /api/auth/me` - `Authorization: Bearer <token>`으로 현재 사용자 조회
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::services::{
    auth::token_service::{INVALID_TOKEN, TokenService},
    users::user_service::UserService,
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/register`
#[post("/register")]
pub async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
    let registration = payload.into_inner().into_registration()?;

    let user_service = UserService::instance();
    let response = user_service.register(registration).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로컬 로그인 핸들러
///
/// 이메일 형식이 틀려도 존재하지 않는 계정과 같은 401을 돌려줍니다.
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    let (email, password) = payload.into_inner().into_credentials()?;

    let user_service = UserService::instance();
    let response = user_service.authenticate(&email, &password).await.map_err(|e| {
        if let AppError::AuthenticationError(_) = e {
            log::info!("로그인 실패 - 이메일: {}", email);
        }
        e
    })?;

    Ok(HttpResponse::Ok().json(response))
}

/// 현재 인증된 사용자 정보 조회
///
/// # Endpoint
/// `GET /api/auth/me`
#[get("/me")]
pub async fn current_user(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;
    let user_id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| AppError::AuthenticationError(INVALID_TOKEN.to_string()))?;

    let user_service = UserService::instance();
    let user = user_service.profile(&user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::token_service::MISSING_TOKEN;
    use actix_web::{App, http::StatusCode, test};

    async fn error_of(resp: actix_web::dev::ServiceResponse) -> String {
        let body: serde_json::Value = test::read_body_json(resp).await;
        body["error"].as_str().unwrap_or_default().to_string()
    }

    #[actix_web::test]
    async fn test_register_requires_all_fields() {
        let app = test::init_service(App::new().service(register)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "name": "  ", "email": "ayse@example.com", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(resp).await, "All fields are required");
    }

    #[actix_web::test]
    async fn test_login_requires_email_and_password() {
        let app = test::init_service(App::new().service(login)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "ayse@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(resp).await, "Email and password are required");
    }

    #[actix_web::test]
    async fn test_login_with_malformed_email_is_unauthorized() {
        let app = test::init_service(App::new().service(login)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "not-an-email", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_of(resp).await, "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_current_user_requires_token() {
        let app = test::init_service(App::new().service(current_user)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_of(resp).await, MISSING_TOKEN);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_of(resp).await, INVALID_TOKEN);
    }
}
