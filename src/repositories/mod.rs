//! # Repository Layer
//!
//! MongoDB 컬렉션별 데이터 액세스 계층입니다. Spring Data의 `@Repository`와 같은 역할로,
//! 각 리포지토리는 `register_component!`로 등록되고 기동 시 `init()`에서 인덱스를 만듭니다.
//!
//! | 리포지토리 | 컬렉션 | 캐시 |
//! |------------|--------|------|
//! | [`users::UserRepository`] | `users` | Redis (`user:{id}`, 10분) |
//! | [`recipes::RecipeRepository`] | `recipes` | 없음 |

pub mod recipes;
pub mod users;
