//! # Recipe Data Transfer Objects Module
//!
//! 레시피 피드, 레시피 CRUD, 댓글/답글/좋아요 API의 요청/응답 계약입니다.
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |------------|------|------|
//! | `GET /api/recipes` | `RecipeListQuery` | `RecipeListResponse` |
//! | `POST /api/recipes` | multipart → `NewRecipe` | `RecipeMessageResponse` (201) |
//! | `GET /api/recipes/{id}` | | `{ recipe }` |
//! | `PUT /api/recipes/{id}` | multipart → `RecipeChanges` | `RecipeMessageResponse` |
//! | `POST /api/recipes/{id}/comments` | `CommentRequest` | `RecipeMessageResponse` (201) |
//! | `POST /api/recipes/{id}/comments/{commentId}/replies` | `CommentRequest` | `RecipeMessageResponse` (201) |
//! | `POST /api/recipes/{id}/likes` | `LikeRequest` | `LikeToggleResponse` |
//! | `GET /api/users/{id}/recipes` | `PageQuery` | `UserRecipesResponse` |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
