//! 인증 요청관련 DTO
//!
//! 회원가입과 로그인 요청 본문을 매핑합니다.
//! 필드가 빠지거나 공백뿐인 경우는 모두 `None`으로 들어오며,
//! 필수 값 검사는 각 요청의 `into_*` 메서드가 담당합니다.

use serde::Deserialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::deserialize_optional_string;

pub const REGISTER_FIELDS_REQUIRED: &str = "All fields are required";
pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// 회원가입 요청 구조체
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    /// 비밀번호는 공백도 의미가 있으므로 trim하지 않습니다.
    #[serde(default)]
    pub password: Option<String>,
}

/// 검증을 통과한 회원가입 입력
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn into_registration(self) -> AppResult<Registration> {
        match (self.name, self.email, self.password) {
            (Some(name), Some(email), Some(password)) if !password.is_empty() => {
                Ok(Registration { name, email, password })
            }
            _ => Err(AppError::ValidationError(REGISTER_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// `(email, password)`를 꺼냅니다.
    ///
    /// 빠진 값은 400, 이메일 형식 오류는 존재하지 않는 계정과 똑같이 401로 응답합니다.
    pub fn into_credentials(self) -> AppResult<(String, String)> {
        let (Some(email), Some(password)) = (self.email.clone(), self.password.clone()) else {
            return Err(AppError::ValidationError(LOGIN_FIELDS_REQUIRED.to_string()));
        };

        if password.is_empty() {
            return Err(AppError::ValidationError(LOGIN_FIELDS_REQUIRED.to_string()));
        }

        if let Err(e) = self.validate() {
            log::debug!("로그인 요청 검증 실패: {}", e);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok((email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_all_fields() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"name": "Ayşe", "email": "  ", "password": "secret"}"#).unwrap();

        match request.into_registration() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, REGISTER_FIELDS_REQUIRED),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_register_trims_name_and_email() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name": " Ayşe ", "email": " ayse@example.com ", "password": " secret "}"#,
        )
        .unwrap();

        let registration = request.into_registration().unwrap();
        assert_eq!(registration.name, "Ayşe");
        assert_eq!(registration.email, "ayse@example.com");
        assert_eq!(registration.password, " secret ");
    }

    #[test]
    fn test_login_missing_password() {
        let request: LoginRequest = serde_json::from_str(r#"{"email": "ayse@example.com"}"#).unwrap();

        match request.into_credentials() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, LOGIN_FIELDS_REQUIRED),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_login_malformed_email_is_unauthorized() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email": "not-an-email", "password": "secret"}"#).unwrap();

        assert!(matches!(
            request.into_credentials(),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_login_credentials() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email": "ayse@example.com", "password": "secret"}"#).unwrap();

        assert_eq!(
            request.into_credentials().unwrap(),
            ("ayse@example.com".to_string(), "secret".to_string())
        );
    }
}
