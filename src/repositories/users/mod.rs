//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)는 MongoDB `users` 컬렉션과
//! Redis 사용자 캐시를 함께 다룹니다. `register_component!`로 싱글톤 등록됩니다.
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("chef@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
