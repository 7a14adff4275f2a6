//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 DTO로 바꾸고 검증한 뒤 서비스에 위임하며,
//! 서비스가 돌려준 결과를 JSON 응답으로 감쌉니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (React 프론트엔드, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                        ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 현재 사용자 (`/api/auth`)
//! - **`recipes`**: 피드와 레시피 CRUD (`/api/recipes`)
//! - **`engagement`**: 댓글, 답글, 좋아요 (`/api/recipes/{id}/...`)
//! - **`users`**: 프로필과 사용자별 레시피 (`/api/users`)
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! 검증 실패는 서비스 인스턴스를 꺼내기 전에 `?`로 바로 400을 돌려줍니다.
//!
//! ```rust,ignore
//! #[get("/{recipe_id}")]
//! pub async fn get_recipe(recipe_id: web::Path<String>) -> Result<HttpResponse, AppError> {
//!     let recipe_id = parse_object_id(&recipe_id, INVALID_ID_FORMAT)?;
//!     let recipe = RecipeService::instance().get(&recipe_id).await?;
//!     Ok(HttpResponse::Ok().json(json!({ "recipe": recipe })))
//! }
//! ```

pub mod auth;
pub mod engagement;
pub mod recipes;
pub mod users;
