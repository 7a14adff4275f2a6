//! 레시피 서비스 모듈
//!
//! - [`RecipeService`]: 피드, 레시피 CRUD, 사용자별 레시피
//! - [`EngagementService`]: 댓글, 답글, 좋아요 토글

pub mod engagement_service;
pub mod recipe_service;

pub use engagement_service::*;
pub use recipe_service::*;
