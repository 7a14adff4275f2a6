//! # Cloudinary 이미지 호스팅 클라이언트
//!
//! 레시피 사진과 프로필 사진은 Cloudinary에 올리고, 문서에는 `secure_url`만 저장합니다.
//! 업로드/삭제 모두 서명된 REST 호출(`application/x-www-form-urlencoded`)을 사용합니다.
//!
//! ## 서명 규칙
//!
//! ```text
//! signature = sha1_hex("folder=recipes&timestamp=1700000000" + api_secret)
//! ```
//!
//! `file`, `api_key`, `resource_type`은 서명 대상에서 빠지며, 나머지 파라미터는
//! 키 이름 순으로 정렬해 `&`로 잇습니다.

use std::collections::BTreeMap;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures_util::future::try_join_all;
use serde::Deserialize;
use sha1::{Digest, Sha1};

use crate::config::ImageHostConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::utils::multipart::UploadedFile;

/// 업로드된 이미지 참조
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostedImage {
    pub secure_url: String,
    pub public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

pub struct ImageHostClient {
    config: ImageHostConfig,
    http: reqwest::Client,
}

impl ImageHostClient {
    pub fn new(config: ImageHostConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        log::info!("✅ 이미지 호스트 설정 완료: {}", config.cloud_name);

        Ok(Self { config, http })
    }

    /// 이미지 하나를 `folder`에 올립니다.
    pub async fn upload(&self, file: &UploadedFile, folder: &str) -> AppResult<HostedImage> {
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut signed = BTreeMap::new();
        signed.insert("folder", folder.to_string());
        signed.insert("timestamp", timestamp);
        let signature = sign_params(&signed, &self.config.api_secret);

        let mut form: Vec<(&str, String)> = signed.into_iter().collect();
        form.push(("api_key", self.config.api_key.clone()));
        form.push(("signature", signature));
        form.push(("file", data_uri(file)));

        let response = self
            .http
            .post(self.config.endpoint("upload"))
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("이미지 업로드 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "이미지 업로드 실패 ({}): {}",
                status, error_text
            )));
        }

        let uploaded = response
            .json::<HostedImage>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("업로드 응답 파싱 실패: {}", e)))?;

        log::debug!("이미지 업로드 완료: {}", uploaded.public_id);
        Ok(uploaded)
    }

    /// 여러 이미지를 동시에 올리고 입력 순서대로 `secure_url`을 반환합니다.
    pub async fn upload_all(&self, files: &[UploadedFile], folder: &str) -> AppResult<Vec<String>> {
        let uploaded = try_join_all(files.iter().map(|file| self.upload(file, folder))).await?;
        Ok(uploaded.into_iter().map(|image| image.secure_url).collect())
    }

    /// `public_id`(예: `recipes/abc123`)에 해당하는 이미지를 삭제합니다.
    ///
    /// 이미 없는 이미지(`not found`)도 성공으로 취급합니다.
    pub async fn destroy(&self, public_id: &str) -> AppResult<()> {
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut signed = BTreeMap::new();
        signed.insert("public_id", public_id.to_string());
        signed.insert("timestamp", timestamp);
        let signature = sign_params(&signed, &self.config.api_secret);

        let mut form: Vec<(&str, String)> = signed.into_iter().collect();
        form.push(("api_key", self.config.api_key.clone()));
        form.push(("signature", signature));

        let response = self
            .http
            .post(self.config.endpoint("destroy"))
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("이미지 삭제 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "이미지 삭제 실패 ({}): {}",
                status, error_text
            )));
        }

        let destroyed = response
            .json::<DestroyResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("삭제 응답 파싱 실패: {}", e)))?;

        match destroyed.result.as_str() {
            "ok" | "not found" => Ok(()),
            other => Err(AppError::ExternalServiceError(format!(
                "이미지 삭제 실패: {} ({})",
                public_id, other
            ))),
        }
    }

    /// 저장된 URL로부터 이미지를 삭제합니다. 실패는 로그만 남깁니다.
    pub async fn destroy_by_url(&self, url: &str, folder: &str) {
        let Some(public_id) = public_id_from_url(url, folder) else {
            log::warn!("이미지 URL에서 public_id를 찾을 수 없음: {}", url);
            return;
        };

        if let Err(e) = self.destroy(&public_id).await {
            log::error!("이미지 삭제 실패 ({}): {}", public_id, e);
        }
    }
}

/// 정렬된 파라미터를 `k=v&k=v` 형태로 잇고 API secret을 붙여 SHA-1 hex로 서명합니다.
pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// 업로드용 `data:<mime>;base64,<...>` URI
pub fn data_uri(file: &UploadedFile) -> String {
    format!("data:{};base64,{}", file.content_type, STANDARD.encode(&file.data))
}

/// `https://res.cloudinary.com/<cloud>/image/upload/v123/recipes/abc123.jpg` → `recipes/abc123`
///
/// URL에 `/{folder}/` 경로가 없으면 `None`.
pub fn public_id_from_url(url: &str, folder: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let marker = format!("/{}/", folder);
    let start = path.rfind(&marker)? + marker.len();

    let rest = &path[start..];
    let name = match rest.rfind('.') {
        Some(dot) => &rest[..dot],
        None => rest,
    };

    if name.is_empty() {
        return None;
    }

    Some(format!("{}/{}", folder, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_params_sorts_keys() {
        let mut params = BTreeMap::new();
        params.insert("timestamp", "1315060510".to_string());
        params.insert("public_id", "sample_image".to_string());

        // sha1("public_id=sample_image&timestamp=1315060510abcd")
        assert_eq!(
            sign_params(&params, "abcd"),
            "b4ad47fb4e25c7bf5f92a20089f9db59bc302313"
        );
    }

    #[test]
    fn test_sign_params_changes_with_secret() {
        let mut params = BTreeMap::new();
        params.insert("folder", "recipes".to_string());
        params.insert("timestamp", "1700000000".to_string());

        let first = sign_params(&params, "secret-a");
        let second = sign_params(&params, "secret-b");

        assert_eq!(first.len(), 40);
        assert_ne!(first, second);
    }

    #[test]
    fn test_data_uri() {
        let file = UploadedFile {
            field_name: "recipeImages".to_string(),
            file_name: Some("a.png".to_string()),
            content_type: "image/png".to_string(),
            data: b"hello".to_vec(),
        };

        assert_eq!(data_uri(&file), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_public_id_from_url() {
        assert_eq!(
            public_id_from_url(
                "https://res.cloudinary.com/demo/image/upload/v1700000000/recipes/abc123.jpg",
                "recipes"
            ),
            Some("recipes/abc123".to_string())
        );
        assert_eq!(
            public_id_from_url(
                "https://res.cloudinary.com/demo/image/upload/v1/profile_images/me.png?_a=1",
                "profile_images"
            ),
            Some("profile_images/me".to_string())
        );
        assert_eq!(
            public_id_from_url("https://res.cloudinary.com/demo/image/upload/v1/avatars/me.png", "profile_images"),
            None
        );
        assert_eq!(public_id_from_url("https://example.com/recipes/", "recipes"), None);
    }
}
