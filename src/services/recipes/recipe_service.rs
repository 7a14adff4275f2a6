//! # 레시피 서비스
//!
//! 피드 조회, 레시피 생성/조회/수정/삭제, 사용자별 레시피 목록을 담당합니다.
//! 응답에 들어가는 모든 사용자 참조는 [`RecipeService::populate_all`]에서
//! 한 번의 `users` 조회로 채워 넣습니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    config::RECIPE_IMAGE_FOLDER,
    core::errors::{AppError, AppResult},
    core::registry::{Component, ServiceLocator},
    domain::{
        dto::{
            pagination::PageRequest,
            recipes::{
                request::{NewRecipe, RecipeChanges, RecipeListQuery},
                response::{RecipeListResponse, RecipeResponse, UserRecipesResponse},
            },
            users::response::UserRef,
        },
        entities::recipes::recipe::Recipe,
    },
    media::ImageHostClient,
    repositories::{
        recipes::recipe_repo::{RecipeRepository, recipe_filter},
        users::user_repo::UserRepository,
    },
    services::users::user_service::USER_NOT_FOUND,
    utils::multipart::UploadedFile,
};

pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

pub(crate) fn recipe_not_found() -> AppError {
    AppError::NotFound(RECIPE_NOT_FOUND.to_string())
}

pub struct RecipeService {
    recipe_repo: Arc<RecipeRepository>,
    user_repo: Arc<UserRepository>,
    image_host: Arc<ImageHostClient>,
}

crate::register_component!(RecipeService, Service, "recipe_service", || RecipeService {
    recipe_repo: ServiceLocator::get::<RecipeRepository>(),
    user_repo: ServiceLocator::get::<UserRepository>(),
    image_host: ServiceLocator::get::<ImageHostClient>(),
});

#[async_trait]
impl Component for RecipeService {
    fn name(&self) -> &str {
        "recipe_service"
    }
}

impl RecipeService {
    pub async fn list(&self, query: &RecipeListQuery) -> AppResult<RecipeListResponse> {
        let page = query.page_request();
        let filter = recipe_filter(
            query.category.as_deref(),
            query.emotion.as_deref(),
            query.search.as_deref(),
        );

        let recipes = self
            .recipe_repo
            .find_page(filter.clone(), page.skip(), page.limit_i64())
            .await?;
        let total = self.recipe_repo.count(filter).await?;

        Ok(RecipeListResponse {
            recipes: self.populate_all(recipes).await?,
            pagination: page.pagination(total),
        })
    }

    /// 이미지를 먼저 올리고 그 URL로 문서를 저장합니다.
    pub async fn create(&self, new_recipe: NewRecipe, images: Vec<UploadedFile>) -> AppResult<RecipeResponse> {
        let recipe_images = self.image_host.upload_all(&images, RECIPE_IMAGE_FOLDER).await?;
        let recipe = self.recipe_repo.insert(new_recipe.into_recipe(recipe_images)).await?;

        log::info!(
            "🍳 레시피 생성: {} ({})",
            recipe.id_string().unwrap_or_default(),
            recipe.name
        );

        self.populate(recipe).await
    }

    pub async fn get(&self, id: &ObjectId) -> AppResult<RecipeResponse> {
        let recipe = self.recipe_repo.find_by_id(id).await?.ok_or_else(recipe_not_found)?;
        self.populate(recipe).await
    }

    /// 폼에 있는 필드만 덮어씁니다. 새 이미지가 있으면 `recipeImages`를 교체합니다.
    pub async fn update(
        &self,
        id: &ObjectId,
        changes: RecipeChanges,
        images: Vec<UploadedFile>,
    ) -> AppResult<RecipeResponse> {
        if self.recipe_repo.find_by_id(id).await?.is_none() {
            return Err(recipe_not_found());
        }

        let recipe_images = if images.is_empty() {
            None
        } else {
            Some(self.image_host.upload_all(&images, RECIPE_IMAGE_FOLDER).await?)
        };

        let recipe = self
            .recipe_repo
            .update(id, changes.to_set_document(recipe_images)?)
            .await?
            .ok_or_else(recipe_not_found)?;

        self.populate(recipe).await
    }

    /// 문서만 지웁니다. 호스팅된 이미지는 그대로 둡니다.
    pub async fn delete(&self, id: &ObjectId) -> AppResult<()> {
        if !self.recipe_repo.delete(id).await? {
            return Err(recipe_not_found());
        }

        log::info!("🗑️ 레시피 삭제: {}", id);
        Ok(())
    }

    pub async fn user_recipes(&self, user_id: &ObjectId, page: PageRequest) -> AppResult<UserRecipesResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let filter = mongodb::bson::doc! { "userID": *user_id };
        let recipes = self
            .recipe_repo
            .find_page(filter.clone(), page.skip(), page.limit_i64())
            .await?;
        let total = self.recipe_repo.count(filter).await?;

        Ok(UserRecipesResponse {
            user: UserRef {
                id: user_id.to_hex(),
                name: user.name,
            },
            recipes: self.populate_all(recipes).await?,
            pagination: page.pagination(total),
        })
    }

    pub async fn populate(&self, recipe: Recipe) -> AppResult<RecipeResponse> {
        let names = self.user_repo.find_names(&recipe.referenced_users()).await?;
        Ok(RecipeResponse::populate(recipe, &names))
    }

    pub async fn populate_all(&self, recipes: Vec<Recipe>) -> AppResult<Vec<RecipeResponse>> {
        let mut user_ids: Vec<ObjectId> = recipes.iter().flat_map(Recipe::referenced_users).collect();
        user_ids.sort();
        user_ids.dedup();

        let names = self.user_repo.find_names(&user_ids).await?;

        Ok(recipes
            .into_iter()
            .map(|recipe| RecipeResponse::populate(recipe, &names))
            .collect())
    }
}
