//! 사용자 관리 서비스 모듈
//!
//! 회원가입/로그인, 프로필 조회와 수정, 계정 삭제(레시피와 호스팅 이미지 정리 포함)를
//! 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::instance();
//! let profile = user_service.profile(&user_id).await?;
//! ```

pub mod user_service;

pub use user_service::*;
