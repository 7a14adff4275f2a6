//! 이미지 호스팅(Cloudinary) 설정
//!
//! ```bash
//! export CLOUDINARY_CLOUD_NAME="demo"
//! export CLOUDINARY_API_KEY="123456789012345"
//! export CLOUDINARY_API_SECRET="abcd..."
//! # 선택
//! export CLOUDINARY_API_BASE="https://api.cloudinary.com/v1_1"
//! export MAX_IMAGE_BYTES="10485760"
//! ```

use std::env;

use super::data_config::env_or;
use crate::core::errors::{AppError, AppResult};

/// 레시피 이미지가 저장되는 폴더
pub const RECIPE_IMAGE_FOLDER: &str = "recipes";

/// 프로필 이미지가 저장되는 폴더
pub const PROFILE_IMAGE_FOLDER: &str = "profile_images";

/// 레시피 하나에 한 번에 올릴 수 있는 이미지 수
pub const MAX_RECIPE_IMAGES: usize = 3;

const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageHostConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base: String,
}

impl ImageHostConfig {
    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// 자격 증명이 하나라도 없으면 `InternalError`를 반환합니다.
    pub fn from_env() -> AppResult<Self> {
        let required = |key: &str| {
            env::var(key)
                .map(|value| value.trim().to_string())
                .ok()
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::InternalError(format!("{} must be set", key)))
        };

        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            api_key: required("CLOUDINARY_API_KEY")?,
            api_secret: required("CLOUDINARY_API_SECRET")?,
            api_base: env::var("CLOUDINARY_API_BASE")
                .unwrap_or_else(|_| "https://api.cloudinary.com/v1_1".to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// 업로드 파일 하나의 최대 크기 (`MAX_IMAGE_BYTES`)
    pub fn upload_limit() -> usize {
        env_or("MAX_IMAGE_BYTES", DEFAULT_MAX_IMAGE_BYTES)
    }

    /// `{api_base}/{cloud_name}/image/{action}`
    pub fn endpoint(&self, action: &str) -> String {
        format!("{}/{}/image/{}", self.api_base, self.cloud_name, action)
    }
}
