//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, ObjectId 파싱, 정규식 이스케이프
//! - [`multipart`] - multipart/form-data 요청을 텍스트 필드와 이미지 파일로 수집
//! - [`display_terminal`] - 기동 시 터미널 출력 포맷팅
//!
//! ```rust,ignore
//! use crate::utils::string_utils::parse_object_id;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let recipe_id = parse_object_id(&path, "Invalid ID format")?;
//! print_boxed_title("System Initialized");
//! ```

pub mod display_terminal;
pub mod multipart;
pub mod string_utils;
