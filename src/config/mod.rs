//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한곳에서 관리합니다.
//! Spring의 `@Configuration` / `@Value`와 비슷한 역할입니다.
//!
//! - [`data_config`] - 실행 환경, 서버, 비밀번호 해싱, Rate Limiting, 페이지네이션
//! - [`auth_config`] - JWT 토큰
//! - [`media_config`] - 이미지 호스팅(Cloudinary)
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="recipe_share_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 보안
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export BCRYPT_COST="12"
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 이미지 호스팅
//! export CLOUDINARY_CLOUD_NAME="..."
//! export CLOUDINARY_API_KEY="..."
//! export CLOUDINARY_API_SECRET="..."
//! ```

pub mod data_config;
pub mod auth_config;
pub mod media_config;

pub use data_config::*;
pub use auth_config::*;
pub use media_config::*;
