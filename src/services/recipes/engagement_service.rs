//! # 댓글/답글/좋아요 서비스
//!
//! 모든 변경은 `find_one_and_update` 한 번으로 끝나는 원자적 업데이트입니다.
//! 좋아요 토글은 "제거 시도 → 추가 시도" 순서이며, 두 업데이트 모두 조건부라서
//! 동시에 눌러도 같은 사용자의 좋아요가 두 개 생기지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{Component, ServiceLocator},
    domain::{
        dto::recipes::response::{LikeToggleResponse, RecipeResponse},
        entities::recipes::recipe::{Comment, Like, Recipe, Reply},
    },
    repositories::recipes::recipe_repo::RecipeRepository,
    services::recipes::recipe_service::{RecipeService, recipe_not_found},
};

pub const COMMENT_NOT_FOUND: &str = "Comment not found";

pub struct EngagementService {
    recipe_repo: Arc<RecipeRepository>,
    recipe_service: Arc<RecipeService>,
}

crate::register_component!(EngagementService, Service, "engagement_service", || EngagementService {
    recipe_repo: ServiceLocator::get::<RecipeRepository>(),
    recipe_service: ServiceLocator::get::<RecipeService>(),
});

#[async_trait]
impl Component for EngagementService {
    fn name(&self) -> &str {
        "engagement_service"
    }
}

impl EngagementService {
    pub async fn add_comment(&self, recipe_id: &ObjectId, user: ObjectId, content: String) -> AppResult<RecipeResponse> {
        let recipe = self
            .recipe_repo
            .push_comment(recipe_id, &Comment::new(user, content))
            .await?
            .ok_or_else(recipe_not_found)?;

        self.recipe_service.populate(recipe).await
    }

    pub async fn add_reply(
        &self,
        recipe_id: &ObjectId,
        comment_id: &ObjectId,
        user: ObjectId,
        content: String,
    ) -> AppResult<RecipeResponse> {
        let updated = self
            .recipe_repo
            .push_reply(recipe_id, comment_id, &Reply::new(user, content))
            .await?;

        match updated {
            Some(recipe) => self.recipe_service.populate(recipe).await,
            // 조건이 레시피와 댓글을 함께 걸러내므로 어느 쪽이 없는지 다시 확인한다
            None => {
                let recipe_exists = self.recipe_repo.find_by_id(recipe_id).await?.is_some();
                Err(missing_reply_target(recipe_exists))
            }
        }
    }

    pub async fn toggle_like(&self, recipe_id: &ObjectId, user: ObjectId) -> AppResult<LikeToggleResponse> {
        if let Some(recipe) = self.recipe_repo.remove_like(recipe_id, &user).await? {
            return Ok(like_state(&recipe, &user));
        }

        if let Some(recipe) = self.recipe_repo.add_like(recipe_id, &Like::new(user)).await? {
            return Ok(like_state(&recipe, &user));
        }

        // 두 조건부 업데이트가 모두 빗나갔다: 레시피가 없거나 다른 요청이 먼저 좋아요를 추가했다
        let recipe = self.recipe_repo.find_by_id(recipe_id).await?.ok_or_else(recipe_not_found)?;
        Ok(like_state(&recipe, &user))
    }
}

/// 답글 조건(레시피 + 댓글)이 빗나갔을 때 어느 쪽이 없는지에 따른 404
fn missing_reply_target(recipe_exists: bool) -> AppError {
    if recipe_exists {
        AppError::NotFound(COMMENT_NOT_FOUND.to_string())
    } else {
        recipe_not_found()
    }
}

/// 갱신된 레시피 문서 기준으로 `user`의 좋아요 상태를 응답으로 만듭니다.
fn like_state(recipe: &Recipe, user: &ObjectId) -> LikeToggleResponse {
    let liked = recipe.has_liked(user);

    LikeToggleResponse {
        message: if liked { "Like added" } else { "Like removed" }.to_string(),
        liked,
        like_count: recipe.like_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::recipes::recipe_service::RECIPE_NOT_FOUND;
    use mongodb::bson::DateTime;

    fn recipe_liked_by(users: &[ObjectId]) -> Recipe {
        let now = DateTime::now();
        Recipe {
            id: Some(ObjectId::new()),
            name: "Mercimek Çorbası".to_string(),
            user_id: ObjectId::new(),
            categories: vec![],
            ingredients: vec!["lentil".to_string()],
            recipe_description: "Boil and blend".to_string(),
            mood_note: None,
            mood: None,
            recipe_images: vec![],
            comments: vec![],
            likes: users.iter().map(|user| Like::new(*user)).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_missing_reply_target_distinguishes_recipe_and_comment() {
        match missing_reply_target(true) {
            AppError::NotFound(msg) => assert_eq!(msg, COMMENT_NOT_FOUND),
            other => panic!("Expected NotFound, got {:?}", other),
        }

        match missing_reply_target(false) {
            AppError::NotFound(msg) => assert_eq!(msg, RECIPE_NOT_FOUND),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_like_state_after_add_and_remove() {
        let fan = ObjectId::new();
        let other = ObjectId::new();

        let added = like_state(&recipe_liked_by(&[other, fan]), &fan);
        assert!(added.liked);
        assert_eq!(added.message, "Like added");
        assert_eq!(added.like_count, 2);

        let removed = like_state(&recipe_liked_by(&[other]), &fan);
        assert!(!removed.liked);
        assert_eq!(removed.message, "Like removed");
        assert_eq!(removed.like_count, 1);
    }
}
