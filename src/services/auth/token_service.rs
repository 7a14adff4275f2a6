//! # JWT 토큰 서비스
//!
//! 로그인 성공 시 HS256 액세스 토큰을 발급하고, `GET /api/auth/me`에서
//! `Authorization: Bearer <token>` 헤더를 검증합니다.
//!
//! ## 클레임
//!
//! | 클레임 | 내용 |
//! |--------|------|
//! | `sub` | 사용자 ObjectId (hex) |
//! | `iat` | 발급 시각 (Unix 초) |
//! | `exp` | 만료 시각 (`JWT_EXPIRATION_HOURS`, 기본 24시간) |

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    core::registry::Component,
    domain::entities::users::user::User,
};

pub const MISSING_TOKEN: &str = "Authorization token is required";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const EXPIRED_TOKEN: &str = "Token has expired";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct TokenService;

crate::register_component!(TokenService, Service, "token_service", || TokenService);

#[async_trait]
impl Component for TokenService {
    fn name(&self) -> &str {
        "token_service"
    }
}

impl TokenService {
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &TokenClaims) -> AppResult<String> {
        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError(EXPIRED_TOKEN.to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError(INVALID_TOKEN.to_string())
                }
            })
    }

    /// `Authorization` 헤더 값에서 토큰 부분만 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: Option<&'a str>) -> AppResult<&'a str> {
        let header = auth_header.ok_or_else(|| AppError::AuthenticationError(MISSING_TOKEN.to_string()))?;

        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError(INVALID_TOKEN.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn user_with_id() -> User {
        let mut user = User::new("Ayşe".to_string(), "ayse@example.com".to_string(), "hash".to_string());
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_generated_token_verifies() {
        let service = TokenService;
        let user = user_with_id();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(Some(claims.sub), user.id_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_user_without_id_cannot_get_token() {
        let user = User::new("Ayşe".to_string(), "ayse@example.com".to_string(), "hash".to_string());
        assert!(matches!(
            TokenService.generate_access_token(&user),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService;
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: ObjectId::new().to_hex(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = service.encode_claims(&claims).unwrap();

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, EXPIRED_TOKEN),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        match TokenService.verify_token("not.a.jwt") {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, INVALID_TOKEN),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService;

        assert_eq!(service.extract_bearer_token(Some("Bearer abc.def")).unwrap(), "abc.def");
        assert!(service.extract_bearer_token(Some("Basic abc")).is_err());
        assert!(service.extract_bearer_token(Some("Bearer ")).is_err());
        assert!(matches!(
            service.extract_bearer_token(None),
            Err(AppError::AuthenticationError(msg)) if msg == MISSING_TOKEN
        ));
    }
}
