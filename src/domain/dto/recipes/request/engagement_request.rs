//! 댓글/답글/좋아요 요청 DTO

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::{deserialize_optional_string, parse_object_id};

pub const COMMENT_FIELDS_REQUIRED: &str = "User ID and comment content are required";
pub const REPLY_FIELDS_REQUIRED: &str = "User ID and reply content are required";
pub const LIKE_USER_REQUIRED: &str = "User ID is required";
pub const INVALID_USER_ID_FORMAT: &str = "Invalid ID format";

/// 댓글과 답글이 같이 쓰는 `{userID, content}` 본문
#[derive(Debug, Default, Deserialize)]
pub struct CommentRequest {
    #[serde(rename = "userID", default, deserialize_with = "deserialize_optional_string")]
    pub user_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub content: Option<String>,
}

impl CommentRequest {
    /// 둘 중 하나라도 없으면 `missing_message`로 400을 반환합니다.
    pub fn into_parts(self, missing_message: &str) -> AppResult<(ObjectId, String)> {
        let (Some(user_id), Some(content)) = (self.user_id, self.content) else {
            return Err(AppError::ValidationError(missing_message.to_string()));
        };

        Ok((parse_object_id(&user_id, INVALID_USER_ID_FORMAT)?, content))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LikeRequest {
    #[serde(rename = "userID", default, deserialize_with = "deserialize_optional_string")]
    pub user_id: Option<String>,
}

impl LikeRequest {
    pub fn user_object_id(&self) -> AppResult<ObjectId> {
        let user_id = self
            .user_id
            .as_deref()
            .ok_or_else(|| AppError::ValidationError(LIKE_USER_REQUIRED.to_string()))?;

        parse_object_id(user_id, INVALID_USER_ID_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_request_requires_both_fields() {
        let request: CommentRequest =
            serde_json::from_str(r#"{"userID": "64b7f0c2a1b2c3d4e5f60718", "content": "  "}"#).unwrap();

        match request.into_parts(COMMENT_FIELDS_REQUIRED) {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, COMMENT_FIELDS_REQUIRED),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_comment_request_parts() {
        let request: CommentRequest =
            serde_json::from_str(r#"{"userID": "64b7f0c2a1b2c3d4e5f60718", "content": " Harika! "}"#).unwrap();

        let (user, content) = request.into_parts(REPLY_FIELDS_REQUIRED).unwrap();
        assert_eq!(user.to_hex(), "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(content, "Harika!");
    }

    #[test]
    fn test_like_request_requires_user() {
        let request: LikeRequest = serde_json::from_str("{}").unwrap();

        match request.user_object_id() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, LIKE_USER_REQUIRED),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
