//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `register_component!`로 등록되어 싱글톤으로 관리되는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 회원가입, 로그인, JWT 발급과 검증
//! - 프로필 관리와 계정 삭제
//! - 레시피 피드, CRUD, 댓글/답글/좋아요
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{recipes::RecipeService, users::UserService};
//!
//! let recipe_service = RecipeService::instance();
//! let user_service = UserService::instance();
//! ```

pub mod auth;
pub mod recipes;
pub mod users;
