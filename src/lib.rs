//! 레시피 공유 백엔드
//!
//! 사용자가 레시피를 올리고, 카테고리/감정 태그로 피드를 탐색하고,
//! 댓글/답글/좋아요로 소통하는 REST 서비스입니다.
//! inventory 기반 컴포넌트 레지스트리로 의존성을 주입합니다.
//!
//! # Features
//!
//! - **인증**: 회원가입, bcrypt 비밀번호, JWT 액세스 토큰
//! - **레시피**: 피드(필터, 검색, 페이지네이션), 등록/수정/삭제, 이미지 업로드
//! - **참여**: 댓글, 답글, 좋아요 토글
//! - **사용자**: 프로필 조회/수정, 계정 삭제(레시피와 호스팅 이미지 정리)
//! - **MongoDB**: 사용자와 레시피 영구 저장
//! - **Redis**: 사용자 문서 캐싱
//! - **Cloudinary**: 이미지 호스팅
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 파싱/검증, 응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────┐
//! │  Repositories   │     │    Media     │ ← Cloudinary
//! └─────────────────┘     └──────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use recipe_share_backend::services::recipes::RecipeService;
//!
//! let recipe_service = RecipeService::instance();
//! let feed = recipe_service.list(&query).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod media;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
