//! 레시피 응답 DTO
//!
//! 저장된 문서를 그대로 보여 주되, 사용자 참조(`userID`, `comments[].user`,
//! `comments[].replies[].user`, `likes[].user`)는 `{ _id, name }`으로 채워 넣습니다.
//! 탈퇴 등으로 사용자를 찾을 수 없으면 `null`입니다.

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::domain::dto::pagination::Pagination;
use crate::domain::dto::users::response::{UserRef, rfc3339};
use crate::domain::entities::recipes::recipe::{Category, Comment, Like, Mood, Recipe, Reply};

/// 사용자 ID → 이름
pub type UserNames = HashMap<ObjectId, String>;

fn user_ref(id: &ObjectId, names: &UserNames) -> Option<UserRef> {
    names.get(id).map(|name| UserRef {
        id: id.to_hex(),
        name: name.clone(),
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<UserRef>,
    pub content: String,
    pub created_at: String,
}

impl ReplyResponse {
    fn populate(reply: Reply, names: &UserNames) -> Self {
        Self {
            id: reply.id.to_hex(),
            user: user_ref(&reply.user, names),
            content: reply.content,
            created_at: rfc3339(&reply.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<UserRef>,
    pub content: String,
    pub replies: Vec<ReplyResponse>,
    pub created_at: String,
}

impl CommentResponse {
    fn populate(comment: Comment, names: &UserNames) -> Self {
        Self {
            id: comment.id.to_hex(),
            user: user_ref(&comment.user, names),
            content: comment.content,
            replies: comment
                .replies
                .into_iter()
                .map(|reply| ReplyResponse::populate(reply, names))
                .collect(),
            created_at: rfc3339(&comment.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<UserRef>,
    pub created_at: String,
}

impl LikeResponse {
    fn populate(like: Like, names: &UserNames) -> Self {
        Self {
            id: like.id.to_hex(),
            user: user_ref(&like.user, names),
            created_at: rfc3339(&like.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "userID")]
    pub user_id: Option<UserRef>,
    pub categories: Vec<Category>,
    pub ingredients: Vec<String>,
    pub recipe_description: String,
    pub mood_note: Option<String>,
    pub mood: Option<Mood>,
    pub recipe_images: Vec<String>,
    pub comments: Vec<CommentResponse>,
    pub likes: Vec<LikeResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl RecipeResponse {
    pub fn populate(recipe: Recipe, names: &UserNames) -> Self {
        Self {
            id: recipe.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: recipe.name,
            user_id: user_ref(&recipe.user_id, names),
            categories: recipe.categories,
            ingredients: recipe.ingredients,
            recipe_description: recipe.recipe_description,
            mood_note: recipe.mood_note,
            mood: recipe.mood,
            recipe_images: recipe.recipe_images,
            comments: recipe
                .comments
                .into_iter()
                .map(|comment| CommentResponse::populate(comment, names))
                .collect(),
            likes: recipe
                .likes
                .into_iter()
                .map(|like| LikeResponse::populate(like, names))
                .collect(),
            created_at: rfc3339(&recipe.created_at),
            updated_at: rfc3339(&recipe.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeResponse>,
    pub pagination: Pagination,
}

/// `GET /api/users/{id}/recipes`
#[derive(Debug, Serialize)]
pub struct UserRecipesResponse {
    pub user: UserRef,
    pub recipes: Vec<RecipeResponse>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct RecipeMessageResponse {
    pub message: String,
    pub recipe: RecipeResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleResponse {
    pub message: String,
    pub liked: bool,
    pub like_count: usize,
}
