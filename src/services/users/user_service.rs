//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 프로필 조회/수정, 계정 삭제를 담당합니다.
//!
//! ```text
//! UserService
//!  ├─ register / authenticate   → UserRepository, bcrypt, TokenService
//!  ├─ profile / update_profile  → UserRepository (+ ImageHostClient)
//!  └─ delete_account            → ImageHostClient → RecipeRepository → UserRepository
//! ```
//!
//! ## 비밀번호
//!
//! bcrypt로 해싱하며 cost는 [`PasswordConfig::bcrypt_cost`]를 따릅니다.
//! 해싱/검증은 CPU를 오래 쓰므로 `web::block`으로 블로킹 스레드 풀에서 실행합니다.

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use futures_util::future::join_all;
use mongodb::bson::oid::ObjectId;

use crate::{
    config::{JwtConfig, PROFILE_IMAGE_FOLDER, PasswordConfig, RECIPE_IMAGE_FOLDER},
    core::errors::{AppError, AppResult, ErrorContext},
    core::registry::{Component, ServiceLocator},
    domain::{
        dto::users::{
            request::{INVALID_CREDENTIALS, ProfileChanges, Registration},
            response::{CreateUserResponse, LoginResponse, RegisteredUser, UserResponse},
        },
        entities::users::user::User,
    },
    media::ImageHostClient,
    repositories::{
        recipes::recipe_repo::RecipeRepository,
        users::user_repo::{EMAIL_IN_USE_MESSAGE, UserRepository},
    },
    services::auth::token_service::TokenService,
    utils::multipart::UploadedFile,
};

pub const USER_NOT_FOUND: &str = "User not found";

pub struct UserService {
    user_repo: Arc<UserRepository>,
    recipe_repo: Arc<RecipeRepository>,
    token_service: Arc<TokenService>,
    image_host: Arc<ImageHostClient>,
}

crate::register_component!(UserService, Service, "user_service", || UserService {
    user_repo: ServiceLocator::get::<UserRepository>(),
    recipe_repo: ServiceLocator::get::<RecipeRepository>(),
    token_service: ServiceLocator::get::<TokenService>(),
    image_host: ServiceLocator::get::<ImageHostClient>(),
});

#[async_trait]
impl Component for UserService {
    fn name(&self) -> &str {
        "user_service"
    }
}

fn not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

impl UserService {
    pub async fn register(&self, registration: Registration) -> AppResult<CreateUserResponse> {
        let Registration { name, email, password } = registration;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::ValidationError(EMAIL_IN_USE_MESSAGE.to_string()));
        }

        let start_time = std::time::Instant::now();
        let bcrypt_cost = PasswordConfig::bcrypt_cost();
        let password_hash = web::block(move || bcrypt::hash(password, bcrypt_cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let created = self.user_repo.create(User::new(name, email, password_hash)).await?;
        log::info!("👤 새 사용자 등록: {}", created.id_string().unwrap_or_default());

        Ok(CreateUserResponse {
            message: "User successfully created".to_string(),
            user: RegisteredUser::from(created),
        })
    }

    /// 이메일/비밀번호를 확인하고 액세스 토큰을 발급합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let invalid = || AppError::AuthenticationError(INVALID_CREDENTIALS.to_string());

        let user = self.user_repo.find_by_email(email).await?.ok_or_else(invalid)?;

        let password = password.to_string();
        let password_hash = user.password.clone();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .context("비밀번호 검증 작업 실패")?
            .unwrap_or_else(|e| {
                log::warn!("저장된 비밀번호 해시를 읽을 수 없음: {}", e);
                false
            });

        if !is_valid {
            return Err(invalid());
        }

        let token = self.token_service.generate_access_token(&user)?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            user: UserResponse::from(user),
            token,
            expires_in: JwtConfig::expires_in_seconds(),
        })
    }

    pub async fn profile(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        let user = self.user_repo.find_by_id(user_id).await?.ok_or_else(not_found)?;
        Ok(UserResponse::from(user))
    }

    /// 이름/이메일/프로필 사진을 수정합니다.
    ///
    /// 사용자가 없으면 이미지를 올리기 전에 404를 반환합니다.
    pub async fn update_profile(
        &self,
        changes: ProfileChanges,
        profile_image: Option<UploadedFile>,
    ) -> AppResult<UserResponse> {
        if self.user_repo.find_by_id(&changes.user_id).await?.is_none() {
            return Err(not_found());
        }

        if let Some(email) = &changes.email {
            if self.user_repo.email_taken_by_other(email, &changes.user_id).await? {
                return Err(AppError::ValidationError(EMAIL_IN_USE_MESSAGE.to_string()));
            }
        }

        let image_url = match profile_image {
            Some(file) => Some(self.image_host.upload(&file, PROFILE_IMAGE_FOLDER).await?.secure_url),
            None => None,
        };

        let user = self
            .user_repo
            .update(&changes.user_id, changes.to_set_document(image_url))
            .await?
            .ok_or_else(not_found)?;

        Ok(UserResponse::from(user))
    }

    /// 프로필 사진과 모든 레시피 사진을 지운 뒤 레시피와 사용자를 삭제합니다.
    ///
    /// 이미지 삭제 실패는 로그만 남기고 계속 진행합니다.
    pub async fn delete_account(&self, user_id: &ObjectId) -> AppResult<()> {
        let user = self.user_repo.find_by_id(user_id).await?.ok_or_else(not_found)?;

        if let Some(url) = &user.profile_image {
            self.image_host.destroy_by_url(url, PROFILE_IMAGE_FOLDER).await;
        }

        let recipes = self.recipe_repo.find_by_user(user_id).await?;
        let image_urls: Vec<&String> = recipes.iter().flat_map(|recipe| recipe.recipe_images.iter()).collect();

        join_all(
            image_urls
                .iter()
                .map(|url| self.image_host.destroy_by_url(url, RECIPE_IMAGE_FOLDER)),
        )
        .await;

        let deleted_recipes = self.recipe_repo.delete_by_user(user_id).await?;
        self.user_repo.delete(user_id).await?;

        log::info!(
            "🗑️ 사용자 삭제: {} (레시피 {}개, 이미지 {}개)",
            user_id,
            deleted_recipes,
            image_urls.len()
        );

        Ok(())
    }
}
