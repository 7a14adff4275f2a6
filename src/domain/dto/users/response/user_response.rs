use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// RFC 3339 문자열로 변환. 범위를 벗어난 값은 bson 기본 표현을 사용합니다.
pub fn rfc3339(value: &DateTime) -> String {
    value
        .try_to_rfc3339_string()
        .unwrap_or_else(|_| value.to_string())
}

/// 비밀번호를 제외한 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            profile_image,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            profile_image,
            created_at: rfc3339(&created_at),
            updated_at: rfc3339(&updated_at),
        }
    }
}

/// 다른 문서에서 사용자를 참조할 때 채워 넣는 최소 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// 회원가입 응답의 `user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: RegisteredUser,
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn stored_user() -> User {
        let mut user = User::new("Ayşe".to_string(), "ayse@example.com".to_string(), "$2b$hash".to_string());
        user.id = Some(ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").unwrap());
        user.created_at = DateTime::from_millis(0);
        user.updated_at = DateTime::from_millis(0);
        user
    }

    #[test]
    fn test_user_response_hides_password() {
        let json = serde_json::to_value(UserResponse::from(stored_user())).unwrap();

        assert_eq!(json["_id"], "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(json["name"], "Ayşe");
        assert_eq!(json["profileImage"], serde_json::Value::Null);
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_registered_user_shape() {
        let json = serde_json::to_value(RegisteredUser::from(stored_user())).unwrap();

        assert_eq!(json["id"], "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(json["email"], "ayse@example.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_login_response_uses_camel_case() {
        let response = LoginResponse {
            message: "Login successful".to_string(),
            user: UserResponse::from(stored_user()),
            token: "jwt".to_string(),
            expires_in: 86400,
        };

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["expiresIn"], 86400);
    }
}
