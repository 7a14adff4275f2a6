//! Recipe Entity Implementation
//!
//! `recipes` 컬렉션 문서입니다. 댓글(답글 포함)과 좋아요는 별도 컬렉션 없이
//! 레시피 문서 안에 배열로 임베드됩니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_id_string;

/// 레시피 카테고리 태그 (프론트엔드 카테고리 목록의 항목 그대로 저장)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, deserialize_with = "deserialize_optional_id_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_image: Option<String>,
}

/// 요리하는 사람의 기분을 나타내는 감정 태그
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mood {
    #[serde(default, deserialize_with = "deserialize_optional_id_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub content: String,
    pub created_at: DateTime,
}

impl Reply {
    pub fn new(user: ObjectId, content: String) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            content,
            created_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub content: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
    pub created_at: DateTime,
}

impl Comment {
    pub fn new(user: ObjectId, content: String) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            content,
            replies: Vec::new(),
            created_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub created_at: DateTime,
}

impl Like {
    pub fn new(user: ObjectId) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            created_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(rename = "userID")]
    pub user_id: ObjectId,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub recipe_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub recipe_images: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub likes: Vec<Like>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Recipe {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn has_liked(&self, user: &ObjectId) -> bool {
        self.likes.iter().any(|like| &like.user == user)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// 이 레시피에서 참조하는 모든 사용자 ID (작성자, 댓글, 답글, 좋아요)
    pub fn referenced_users(&self) -> Vec<ObjectId> {
        let mut users = vec![self.user_id];

        for comment in &self.comments {
            users.push(comment.user);
            users.extend(comment.replies.iter().map(|reply| reply.user));
        }
        users.extend(self.likes.iter().map(|like| like.user));

        users.sort();
        users.dedup();
        users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample_recipe(owner: ObjectId) -> Recipe {
        let now = DateTime::now();
        Recipe {
            id: Some(ObjectId::new()),
            name: "Menemen".to_string(),
            user_id: owner,
            categories: vec![],
            ingredients: vec!["egg".to_string(), "tomato".to_string()],
            recipe_description: "Scramble everything".to_string(),
            mood_note: None,
            mood: None,
            recipe_images: vec![],
            comments: vec![],
            likes: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_has_liked_and_like_count() {
        let owner = ObjectId::new();
        let fan = ObjectId::new();
        let mut recipe = sample_recipe(owner);

        assert!(!recipe.has_liked(&fan));
        recipe.likes.push(Like::new(fan));

        assert!(recipe.has_liked(&fan));
        assert!(!recipe.has_liked(&owner));
        assert_eq!(recipe.like_count(), 1);
    }

    #[test]
    fn test_referenced_users_are_unique() {
        let owner = ObjectId::new();
        let commenter = ObjectId::new();
        let mut recipe = sample_recipe(owner);

        let mut comment = Comment::new(commenter, "Looks great".to_string());
        comment.replies.push(Reply::new(owner, "Thanks!".to_string()));
        recipe.comments.push(comment);
        recipe.likes.push(Like::new(commenter));

        let users = recipe.referenced_users();
        assert_eq!(users.len(), 2);
        assert!(users.contains(&owner));
        assert!(users.contains(&commenter));
    }

    #[test]
    fn test_document_uses_original_field_names() {
        let mut recipe = sample_recipe(ObjectId::new());
        recipe.mood = Some(Mood {
            id: Some("3".to_string()),
            emotion_name: Some("Happy".to_string()),
            icon: Some("😊".to_string()),
        });

        let document = bson::to_document(&recipe).unwrap();
        for key in ["_id", "name", "userID", "ingredients", "recipeDescription", "recipeImages", "createdAt"] {
            assert!(document.contains_key(key), "missing {}", key);
        }
        assert_eq!(document.get_document("mood").unwrap().get_str("emotionName").unwrap(), "Happy");
    }

    #[test]
    fn test_category_accepts_numeric_id() {
        let category: Category =
            serde_json::from_str(r#"{"id": 4, "categoryName": "Dessert", "categoryImage": "/img/dessert.png"}"#).unwrap();

        assert_eq!(category.id.as_deref(), Some("4"));
        assert_eq!(category.category_name.as_deref(), Some("Dessert"));
    }
}
