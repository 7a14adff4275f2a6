//! # Domain Entities
//!
//! MongoDB 컬렉션 문서와 1:1로 대응하는 엔티티입니다.
//!
//! | 엔티티 | 컬렉션 | 임베드 |
//! |--------|--------|--------|
//! | [`users::User`] | `users` | |
//! | [`recipes::Recipe`] | `recipes` | `Comment` → `Reply`, `Like` |
//!
//! 필드 이름은 프론트엔드와 공유하는 문서 형식(camelCase, `_id`, `userID`)을 그대로 따릅니다.

pub mod recipes;
pub mod users;
