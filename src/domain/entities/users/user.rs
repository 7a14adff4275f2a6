//! User Entity Implementation
//!
//! `users` 컬렉션 문서와 1:1로 매핑되는 사용자 엔티티입니다.
//! 필드 이름은 프론트엔드와 공유하는 문서 형식(camelCase)을 따릅니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// bcrypt 해시. 어떤 응답에도 포함되지 않습니다.
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: password_hash,
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_new_user_has_no_id_and_matching_timestamps() {
        let user = User::new("Ayşe".to_string(), "ayse@example.com".to_string(), "hash".to_string());

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert_eq!(user.created_at, user.updated_at);
        assert!(user.profile_image.is_none());
    }

    #[test]
    fn test_document_field_names() {
        let mut user = User::new("Ayşe".to_string(), "ayse@example.com".to_string(), "hash".to_string());
        user.profile_image = Some("https://res.cloudinary.com/demo/profile_images/a.jpg".to_string());

        let document = bson::to_document(&user).unwrap();
        assert!(!document.contains_key("_id"));
        assert!(document.contains_key("profileImage"));
        assert!(document.contains_key("createdAt"));
        assert!(document.contains_key("updatedAt"));
    }
}
