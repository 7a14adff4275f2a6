//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이의 요청/응답 구조체입니다.
//! 엔티티를 그대로 노출하지 않고, 응답에서는 ID를 hex 문자열로,
//! 시각을 RFC 3339 문자열로 바꾸며 비밀번호는 항상 제외합니다.
//!
//! - [`users`] - 회원가입, 로그인, 프로필
//! - [`recipes`] - 레시피 피드, CRUD, 댓글/답글/좋아요
//! - [`pagination`] - `page`/`limit` 정규화와 `pagination` 블록

pub mod pagination;
pub mod recipes;
pub mod users;

pub use pagination::{PageQuery, PageRequest, Pagination};
