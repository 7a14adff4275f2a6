//! # 애플리케이션 에러 처리
//!
//! 레시피 공유 백엔드 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 에러를 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `Result<HttpResponse, AppError>`를 반환하기만 하면
//! `{ "error": "..." }` 형태의 JSON 응답으로 자동 변환됩니다.
//!
//! ## HTTP 상태 코드 매핑
//!
//! | 에러 | 상태 코드 | 응답 메시지 |
//! |------|-----------|-------------|
//! | `ValidationError` | 400 | 원본 메시지 |
//! | `AuthenticationError` | 401 | 원본 메시지 |
//! | `NotFound` | 404 | 원본 메시지 |
//! | 그 외 (DB, Redis, 외부 서비스, 내부) | 500 | `Server error` |
//!
//! 500 계열 에러의 상세 내용은 클라이언트에 노출하지 않고 로그로만 남깁니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn find_recipe(id: &str) -> Result<Recipe, AppError> {
//!     let recipe = recipe_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;
//!     Ok(recipe)
//! }
//! ```

use thiserror::Error;

/// 클라이언트에 노출되는 일반 서버 에러 메시지
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 인증 실패 (401)
    #[error("{0}")]
    AuthenticationError(String),

    /// 이미지 호스팅 등 외부 서비스 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 보여줄 메시지를 반환합니다.
    ///
    /// 4xx 에러는 원본 메시지를, 5xx 에러는 [`SERVER_ERROR_MESSAGE`]를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            _ => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::ExternalServiceError(e.to_string())
    }
}

/// 애플리케이션 결과 타입
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥을 붙여 `AppError::InternalError`로 변환하는 확장 트레이트
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
