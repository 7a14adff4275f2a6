//! # 레시피 리포지토리 구현
//!
//! `recipes` 컬렉션의 데이터 액세스 계층입니다.
//! 댓글/답글/좋아요는 문서 안에 임베드되어 있으므로 모두 단일 문서
//! 원자적 갱신(`$push`, `$pull`, 위치 연산자 `$`)으로 처리합니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 용도 |
//! |------|----|------|
//! | `created_at_desc` | `createdAt: -1` | 최신순 목록 |
//! | `user_created_at` | `userID: 1, createdAt: -1` | 사용자별 목록, 계정 삭제 |
//! | `category_name` | `categories.categoryName: 1` | 카테고리 필터 |
//! | `mood_emotion_name` | `mood.emotionName: 1` | 감정 필터 |

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{self, Bson, DateTime, Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
};

use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{Component, Repository, ServiceLocator},
    db::Database,
    domain::entities::recipes::recipe::{Comment, Like, Recipe, Reply},
    utils::string_utils::escape_regex,
};

pub struct RecipeRepository {
    db: Arc<Database>,
}

crate::register_component!(RecipeRepository, Repository, "recipe_repository", || RecipeRepository {
    db: ServiceLocator::get::<Database>(),
});

#[async_trait]
impl Component for RecipeRepository {
    fn name(&self) -> &str {
        "recipe_repository"
    }

    async fn init(&self) -> AppResult<()> {
        self.create_indexes().await
    }
}

impl Repository for RecipeRepository {
    fn collection_name(&self) -> &str {
        "recipes"
    }
}

/// 목록 조회 필터를 MongoDB 쿼리 문서로 만듭니다.
///
/// - `category` → `categories.categoryName` 정확히 일치
/// - `emotion` → `mood.emotionName` 정확히 일치
/// - `search` → 이름, 설명, 재료 중 하나라도 대소문자 구분 없이 부분 일치
pub fn recipe_filter(category: Option<&str>, emotion: Option<&str>, search: Option<&str>) -> Document {
    let mut filter = Document::new();

    if let Some(category) = category {
        filter.insert("categories.categoryName", category);
    }

    if let Some(emotion) = emotion {
        filter.insert("mood.emotionName", emotion);
    }

    if let Some(search) = search {
        let pattern = escape_regex(search);
        let regex = |field: &str| {
            let mut clause = Document::new();
            clause.insert(field, doc! { "$regex": pattern.as_str(), "$options": "i" });
            clause
        };

        filter.insert(
            "$or",
            vec![
                regex("name"),
                regex("recipeDescription"),
                regex("ingredients"),
            ],
        );
    }

    filter
}

fn to_bson<T: serde::Serialize>(value: &T) -> AppResult<Bson> {
    bson::to_bson(value).map_err(|e| AppError::InternalError(format!("BSON 변환 실패: {}", e)))
}

// 임베드 배열 변경도 문서 변경이므로 updatedAt을 함께 갱신한다
fn touched(mut update: Document) -> Document {
    update.insert("$set", doc! { "updatedAt": DateTime::now() });
    update
}

/// 해당 댓글을 가진 레시피. 위치 연산자 `comments.$`가 이 댓글을 가리킵니다.
pub fn reply_target(id: &ObjectId, comment_id: &ObjectId) -> Document {
    doc! { "_id": *id, "comments._id": *comment_id }
}

/// `user`가 아직 좋아요하지 않은 레시피
pub fn not_liked_by(id: &ObjectId, user: &ObjectId) -> Document {
    doc! { "_id": *id, "likes.user": { "$ne": *user } }
}

/// `user`가 좋아요한 레시피
pub fn liked_by(id: &ObjectId, user: &ObjectId) -> Document {
    doc! { "_id": *id, "likes.user": *user }
}

pub fn comment_push(comment: &Comment) -> AppResult<Document> {
    Ok(touched(doc! { "$push": { "comments": to_bson(comment)? } }))
}

pub fn reply_push(reply: &Reply) -> AppResult<Document> {
    Ok(touched(doc! { "$push": { "comments.$.replies": to_bson(reply)? } }))
}

pub fn like_push(like: &Like) -> AppResult<Document> {
    Ok(touched(doc! { "$push": { "likes": to_bson(like)? } }))
}

pub fn like_pull(user: &ObjectId) -> Document {
    touched(doc! { "$pull": { "likes": { "user": *user } } })
}

impl RecipeRepository {
    fn collection(&self) -> Collection<Recipe> {
        self.db.collection::<Recipe>(self.collection_name())
    }

    fn return_after() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }

    /// 최신순으로 정렬된 한 페이지
    pub async fn find_page(&self, filter: Document, skip: u64, limit: i64) -> AppResult<Vec<Recipe>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .skip(skip)
            .limit(limit)
            .build();

        let recipes = self
            .collection()
            .find(filter)
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        Ok(recipes)
    }

    pub async fn count(&self, filter: Document) -> AppResult<u64> {
        Ok(self.collection().count_documents(filter).await?)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Recipe>> {
        Ok(self.collection().find_one(doc! { "_id": *id }).await?)
    }

    pub async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Recipe>> {
        let recipes = self
            .collection()
            .find(doc! { "userID": *user_id })
            .await?
            .try_collect()
            .await?;

        Ok(recipes)
    }

    pub async fn insert(&self, mut recipe: Recipe) -> AppResult<Recipe> {
        let result = self.collection().insert_one(&recipe).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("inserted_id is not an ObjectId".to_string()))?;
        recipe.id = Some(id);

        Ok(recipe)
    }

    /// `$set`으로 필드를 덮어쓰고 갱신된 문서를 반환합니다.
    pub async fn update(&self, id: &ObjectId, mut set: Document) -> AppResult<Option<Recipe>> {
        set.insert("updatedAt", DateTime::now());

        self.update_one(doc! { "_id": *id }, doc! { "$set": set }).await
    }

    pub async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection().delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }

    pub async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let result = self
            .collection()
            .delete_many(doc! { "userID": *user_id })
            .await?;

        Ok(result.deleted_count)
    }

    pub async fn push_comment(&self, id: &ObjectId, comment: &Comment) -> AppResult<Option<Recipe>> {
        self.update_one(doc! { "_id": *id }, comment_push(comment)?).await
    }

    /// 댓글이 존재할 때만 답글을 추가합니다. 레시피나 댓글이 없으면 `None`.
    pub async fn push_reply(
        &self,
        id: &ObjectId,
        comment_id: &ObjectId,
        reply: &Reply,
    ) -> AppResult<Option<Recipe>> {
        self.update_one(reply_target(id, comment_id), reply_push(reply)?).await
    }

    /// 아직 좋아요하지 않은 경우에만 추가합니다.
    pub async fn add_like(&self, id: &ObjectId, like: &Like) -> AppResult<Option<Recipe>> {
        self.update_one(not_liked_by(id, &like.user), like_push(like)?).await
    }

    /// 좋아요한 상태일 때만 제거합니다.
    pub async fn remove_like(&self, id: &ObjectId, user: &ObjectId) -> AppResult<Option<Recipe>> {
        self.update_one(liked_by(id, user), like_pull(user)).await
    }

    async fn update_one(&self, filter: Document, update: Document) -> AppResult<Option<Recipe>> {
        Ok(self
            .collection()
            .find_one_and_update(filter, update)
            .with_options(Self::return_after())
            .await?)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let index = |keys: Document, name: &str| {
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().name(name.to_string()).build())
                .build()
        };

        self.collection()
            .create_indexes([
                index(doc! { "createdAt": -1 }, "created_at_desc"),
                index(doc! { "userID": 1, "createdAt": -1 }, "user_created_at"),
                index(doc! { "categories.categoryName": 1 }, "category_name"),
                index(doc! { "mood.emotionName": 1 }, "mood_emotion_name"),
            ])
            .await?;

        Ok(())
    }
}
