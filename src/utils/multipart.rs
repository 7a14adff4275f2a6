//! # multipart/form-data 수집
//!
//! 레시피 등록/수정과 프로필 수정은 텍스트 필드와 이미지 파일이 섞인
//! multipart 요청으로 들어옵니다. [`FormData::from_multipart`]가 스트림을
//! 끝까지 읽어 텍스트 필드와 파일을 분리해 메모리에 모아 둡니다.
//!
//! 메모리에 쌓이는 양은 [`UploadLimits`]로 제한하며, 넘는 순간 스트림 읽기를 멈춥니다.
//! - 이미지(`image/*`)가 아니면 `Only image uploads are allowed`
//! - 파일 하나가 `max_file_bytes`를 넘으면 `Image exceeds the maximum allowed size`
//! - 파일이 `max_files`개를 넘으면 `too_many_files` 메시지
//! - 파트 수가 [`MAX_FORM_PARTS`], 텍스트 합계가 [`MAX_TEXT_BYTES`]를 넘으면 400
//!
//! 파일 이름이 비어 있고 내용도 없는 필드(선택하지 않은 파일 입력)는 무시합니다.

use std::collections::HashMap;

use actix_multipart::{Field, Multipart};
use futures_util::TryStreamExt;

use crate::core::errors::{AppError, AppResult};

pub const NON_IMAGE_MESSAGE: &str = "Only image uploads are allowed";
pub const IMAGE_TOO_LARGE_MESSAGE: &str = "Image exceeds the maximum allowed size";

pub const TOO_MANY_PARTS_MESSAGE: &str = "Too many form fields";
pub const TEXT_TOO_LARGE_MESSAGE: &str = "Form field is too large";

/// 한 요청의 multipart 파트 수 상한
pub const MAX_FORM_PARTS: usize = 32;

/// 모든 텍스트 필드를 합친 최대 크기
pub const MAX_TEXT_BYTES: usize = 1024 * 1024;

/// 한 요청에서 받을 파일의 크기와 개수
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadLimits {
    pub max_file_bytes: usize,
    pub max_files: usize,
    pub too_many_files: &'static str,
}

impl UploadLimits {
    pub fn new(max_file_bytes: usize, max_files: usize, too_many_files: &'static str) -> Self {
        Self { max_file_bytes, max_files, too_many_files }
    }
}

/// 업로드된 파일 하나
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_name: String,
    pub file_name: Option<String>,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

impl FormData {
    pub async fn from_multipart(mut payload: Multipart, limits: UploadLimits) -> AppResult<Self> {
        let mut form = FormData::default();
        let mut parts = 0;
        let mut text_bytes = 0;

        while let Some(field) = payload.try_next().await.map_err(|e| {
            log::warn!("multipart 파싱 실패: {}", e);
            AppError::ValidationError("Invalid multipart form data".to_string())
        })? {
            parts += 1;
            if parts > MAX_FORM_PARTS {
                return Err(AppError::ValidationError(TOO_MANY_PARTS_MESSAGE.to_string()));
            }

            let name = field.name().unwrap_or("").to_string();
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string());

            match file_name {
                Some(file_name) => {
                    // 빈 파일 입력은 건너뛰므로 이름이 있는 파일만 미리 센다
                    if !file_name.is_empty() {
                        form.check_file_slot(&limits)?;
                    }
                    if let Some(file) = Self::read_file(field, name, file_name, limits.max_file_bytes).await? {
                        form.check_file_slot(&limits)?;
                        form.files.push(file);
                    }
                }
                None => {
                    let bytes = Self::read_to_end(field, MAX_TEXT_BYTES - text_bytes, TEXT_TOO_LARGE_MESSAGE).await?;
                    text_bytes += bytes.len();
                    let value = String::from_utf8(bytes).map_err(|_| {
                        AppError::ValidationError(format!("Invalid {} format", name))
                    })?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    fn check_file_slot(&self, limits: &UploadLimits) -> AppResult<()> {
        if self.files.len() >= limits.max_files {
            return Err(AppError::ValidationError(limits.too_many_files.to_string()));
        }
        Ok(())
    }

    async fn read_file(
        field: Field,
        field_name: String,
        file_name: String,
        max_file_bytes: usize,
    ) -> AppResult<Option<UploadedFile>> {
        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        if file_name.is_empty() {
            let data = Self::read_to_end(field, max_file_bytes, IMAGE_TOO_LARGE_MESSAGE).await?;
            if data.is_empty() {
                return Ok(None);
            }
            if !content_type.starts_with("image/") {
                return Err(AppError::ValidationError(NON_IMAGE_MESSAGE.to_string()));
            }
            return Ok(Some(UploadedFile { field_name, file_name: None, content_type, data }));
        }

        if !content_type.starts_with("image/") {
            return Err(AppError::ValidationError(NON_IMAGE_MESSAGE.to_string()));
        }

        let data = Self::read_to_end(field, max_file_bytes, IMAGE_TOO_LARGE_MESSAGE).await?;

        Ok(Some(UploadedFile {
            field_name,
            file_name: Some(file_name),
            content_type,
            data,
        }))
    }

    async fn read_to_end(mut field: Field, limit: usize, too_large: &str) -> AppResult<Vec<u8>> {
        let mut data = Vec::new();

        while let Some(chunk) = field.try_next().await.map_err(|e| {
            log::warn!("multipart 필드 읽기 실패: {}", e);
            AppError::ValidationError("Invalid multipart form data".to_string())
        })? {
            if data.len() + chunk.len() > limit {
                return Err(AppError::ValidationError(too_large.to_string()));
            }
            data.extend_from_slice(&chunk);
        }

        Ok(data)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }

    /// 값이 있고 공백뿐이 아닌 텍스트 필드 (trim 적용)
    pub fn non_empty_text(&self, name: &str) -> Option<String> {
        self.text(name)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }

    pub fn has_text(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn file_count(&self, field_name: &str) -> usize {
        self.files.iter().filter(|f| f.field_name == field_name).count()
    }

    pub fn take_files(&mut self, field_name: &str) -> Vec<UploadedFile> {
        let (taken, rest) = std::mem::take(&mut self.files)
            .into_iter()
            .partition(|f| f.field_name == field_name);
        self.files = rest;
        taken
    }

    #[cfg(test)]
    pub(crate) fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    #[cfg(test)]
    pub(crate) fn push_file(&mut self, file: UploadedFile) {
        self.files.push(file);
    }
}
