//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다. MongoDB를 주 저장소로 쓰고,
//! ID 기준 단건 조회는 Redis에 10분간 캐싱합니다.
//!
//! ## 캐시 키
//!
//! | 키 | 값 | 무효화 시점 |
//! |----|----|-------------|
//! | `user:{id}` | `User` JSON | 프로필 수정, 계정 삭제 |

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, Document, doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
};
use serde::Deserialize;

use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::{Component, Repository, ServiceLocator},
    db::Database,
    domain::entities::users::user::User,
};

const USER_CACHE_TTL_SECONDS: u64 = 600;

/// 이메일 중복 시 클라이언트에 반환하는 메시지
pub const EMAIL_IN_USE_MESSAGE: &str = "This email address is already in use";

pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

crate::register_component!(UserRepository, Repository, "user_repository", || UserRepository {
    db: ServiceLocator::get::<Database>(),
    redis: ServiceLocator::get::<RedisClient>(),
});

/// 작성자 이름 채우기에 쓰는 projection 결과
#[derive(Debug, Deserialize)]
struct UserName {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
}

#[async_trait]
impl Component for UserRepository {
    fn name(&self) -> &str {
        "user_repository"
    }

    async fn init(&self) -> AppResult<()> {
        self.create_indexes().await
    }
}

impl Repository for UserRepository {
    fn collection_name(&self) -> &str {
        "users"
    }
}

impl UserRepository {
    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.collection::<T>(self.collection_name())
    }

    fn cache_key(id: &ObjectId) -> String {
        format!("user:{}", id.to_hex())
    }

    async fn invalidate_cache(&self, id: &ObjectId) {
        if let Err(e) = self.redis.del(&Self::cache_key(id)).await {
            log::warn!("사용자 캐시 무효화 실패 ({}): {}", id, e);
        }
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let cache_key = Self::cache_key(id);

        match self.redis.get::<User>(&cache_key).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => log::warn!("사용자 캐시 조회 실패: {}", e),
        }

        let user = self.collection::<User>().find_one(doc! { "_id": *id }).await?;

        if let Some(ref user) = user {
            if let Err(e) = self
                .redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL_SECONDS)
                .await
            {
                log::warn!("사용자 캐시 저장 실패: {}", e);
            }
        }

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection::<User>().find_one(doc! { "email": email }).await?)
    }

    /// `exclude` 외의 다른 사용자가 이 이메일을 쓰고 있는지 확인합니다.
    pub async fn email_taken_by_other(&self, email: &str, exclude: &ObjectId) -> AppResult<bool> {
        let count = self
            .collection::<User>()
            .count_documents(doc! { "email": email, "_id": { "$ne": *exclude } })
            .await?;

        Ok(count > 0)
    }

    /// 여러 사용자의 이름을 한 번에 조회합니다. 없는 ID는 결과에서 빠집니다.
    pub async fn find_names(&self, ids: &[ObjectId]) -> AppResult<HashMap<ObjectId, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let names: Vec<UserName> = self
            .collection::<UserName>()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .with_options(FindOptions::builder().projection(doc! { "name": 1 }).build())
            .await?
            .try_collect()
            .await?;

        Ok(names.into_iter().map(|user| (user.id, user.name)).collect())
    }

    pub async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ValidationError(EMAIL_IN_USE_MESSAGE.to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("inserted_id is not an ObjectId".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    /// `$set`으로 필드를 갱신하고 갱신된 문서를 반환합니다. `updatedAt`은 자동으로 갱신됩니다.
    pub async fn update(&self, id: &ObjectId, mut set: Document) -> AppResult<Option<User>> {
        set.insert("updatedAt", DateTime::now());

        let updated = self
            .collection::<User>()
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .with_options(
                FindOneAndUpdateOptions::builder()
                    .return_document(ReturnDocument::After)
                    .build(),
            )
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ValidationError(EMAIL_IN_USE_MESSAGE.to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        if updated.is_some() {
            self.invalidate_cache(id).await;
        }

        Ok(updated)
    }

    pub async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection::<User>().delete_one(doc! { "_id": *id }).await?;

        self.invalidate_cache(id).await;
        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection::<User>().create_index(email_index).await?;
        Ok(())
    }
}

/// MongoDB 유니크 인덱스 위반(E11000) 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    }
}
