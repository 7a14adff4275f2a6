//! 프로필 조회/수정/삭제 요청 DTO

use mongodb::bson::{Document, oid::ObjectId};
use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::utils::multipart::FormData;
use crate::utils::string_utils::{deserialize_optional_string, is_present_id, parse_object_id};

pub const USER_ID_REQUIRED: &str = "User ID is required";
pub const INVALID_USER_ID: &str = "Invalid user ID";
pub const ONE_PROFILE_IMAGE: &str = "Only one profile image can be uploaded";

/// `?userId=` 쿼리
#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    #[serde(rename = "userId", default, deserialize_with = "deserialize_optional_string")]
    pub user_id: Option<String>,
}

impl ProfileQuery {
    pub fn object_id(&self) -> AppResult<ObjectId> {
        let user_id = self
            .user_id
            .as_deref()
            .ok_or_else(|| AppError::ValidationError(USER_ID_REQUIRED.to_string()))?;

        parse_object_id(user_id, INVALID_USER_ID)
    }
}

/// multipart 프로필 수정 폼에서 꺼낸 변경 사항
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileChanges {
    pub user_id: ObjectId,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ProfileChanges {
    pub const PROFILE_IMAGE_FIELD: &'static str = "profileImage";

    pub fn from_form(form: &FormData) -> AppResult<Self> {
        let user_id = form
            .non_empty_text("userId")
            .filter(|id| is_present_id(id))
            .ok_or_else(|| AppError::ValidationError(INVALID_USER_ID.to_string()))?;

        Ok(Self {
            user_id: parse_object_id(&user_id, INVALID_USER_ID)?,
            name: form.non_empty_text("name"),
            email: form.non_empty_text("email"),
        })
    }

    /// `$set` 문서. 새 프로필 이미지 URL이 있으면 함께 넣습니다.
    pub fn to_set_document(&self, profile_image: Option<String>) -> Document {
        let mut set = Document::new();

        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(email) = &self.email {
            set.insert("email", email.as_str());
        }
        if let Some(url) = profile_image {
            set.insert("profileImage", url);
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_query_requires_user_id() {
        let query = ProfileQuery::default();

        match query.object_id() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, USER_ID_REQUIRED),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_query_parses_id() {
        let id = ObjectId::new();
        let query = ProfileQuery { user_id: Some(id.to_hex()) };
        assert_eq!(query.object_id().unwrap(), id);
    }

    #[test]
    fn test_changes_reject_undefined_user_id() {
        let mut form = FormData::default();
        form.insert_text("userId", "undefined");
        form.insert_text("name", "Ayşe");

        match ProfileChanges::from_form(&form) {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, INVALID_USER_ID),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_changes_set_document_skips_blank_fields() {
        let id = ObjectId::new();
        let mut form = FormData::default();
        form.insert_text("userId", id.to_hex());
        form.insert_text("name", " Ayşe ");
        form.insert_text("email", "");

        let changes = ProfileChanges::from_form(&form).unwrap();
        assert_eq!(changes.user_id, id);

        let set = changes.to_set_document(Some("https://img/profile_images/a.jpg".to_string()));
        assert_eq!(set.get_str("name").unwrap(), "Ayşe");
        assert!(!set.contains_key("email"));
        assert_eq!(set.get_str("profileImage").unwrap(), "https://img/profile_images/a.jpg");
    }
}
