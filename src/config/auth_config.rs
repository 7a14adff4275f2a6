//! # Authentication Configuration Module
//!
//! JWT 토큰 발급과 관련된 설정입니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

use super::data_config::env_or;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    pub fn expiration_hours() -> i64 {
        env_or("JWT_EXPIRATION_HOURS", 24)
    }

    /// 만료 시간(초)
    pub fn expires_in_seconds() -> i64 {
        Self::expiration_hours() * 3600
    }
}
