//! # 문자열 유틸리티
//!
//! 요청 값 정리, ObjectId 파싱, 검색어 이스케이프 등 문자열 관련 헬퍼입니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::core::errors::AppError;

/// 선택적 문자열 필드 정리
///
/// `None`이거나 공백뿐인 값은 `None`, 그 외에는 trim된 값을 돌려줍니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Menemen  ".to_string())), Some("Menemen".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 빈 문자열이나 공백만으로 이루어지지 않았는지 확인
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 프론트엔드가 아이디 자리에 보내는 값이 실제 아이디인지 확인합니다.
///
/// 로그인 상태가 풀린 클라이언트는 `"undefined"`, `"null"` 문자열을 그대로 보내기도 합니다.
pub fn is_present_id(value: &str) -> bool {
    let trimmed = value.trim();
    is_valid_string(trimmed) && trimmed != "undefined" && trimmed != "null"
}

/// 24자리 hex 문자열을 `ObjectId`로 변환합니다.
///
/// 실패하면 `message`를 담은 `ValidationError`(400)를 반환합니다.
pub fn parse_object_id(value: &str, message: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim()).map_err(|_| AppError::ValidationError(message.to_string()))
}

/// 정규식 메타 문자를 이스케이프합니다.
///
/// 사용자 검색어를 MongoDB `$regex`에 넣기 전에 반드시 거쳐야 합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(
            c,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\' | '-' | '/'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// null, 빈 문자열, 공백뿐인 문자열은 `None`으로, 그 외에는 trim된 값으로 변환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct ListQuery {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     search: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 문자열 또는 숫자로 들어오는 식별자를 문자열로 받습니다.
///
/// 카테고리/감정 목록의 `id`는 클라이언트에 따라 `4`나 `"4"`로 들어옵니다.
pub fn deserialize_optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawId::Text(text)) => clean_optional_string(Some(text)),
        Some(RawId::Integer(number)) => Some(number.to_string()),
        Some(RawId::Float(number)) => Some(number.to_string()),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Menemen".to_string())), Some("Menemen".to_string()));
        assert_eq!(clean_optional_string(Some("  Pilav  ".to_string())), Some("Pilav".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some(" \t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_present_id() {
        assert!(is_present_id("64b7f0c2a1b2c3d4e5f60718"));
        assert!(!is_present_id("undefined"));
        assert!(!is_present_id(" null "));
        assert!(!is_present_id("   "));
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex(), "Invalid ID format").unwrap(), id);

        match parse_object_id("not-an-id", "Invalid ID format") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Invalid ID format"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("pasta"), "pasta");
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("(1+1)?"), "\\(1\\+1\\)\\?");
        assert_eq!(escape_regex("[x]|^$"), "\\[x\\]\\|\\^\\$");
        assert_eq!(escape_regex("çorba"), "çorba");
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Query {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            search: Option<String>,
        }

        let query: Query = serde_json::from_str(r#"{"search": "  tavuk  "}"#).unwrap();
        assert_eq!(query.search, Some("tavuk".to_string()));

        let query: Query = serde_json::from_str(r#"{"search": "   "}"#).unwrap();
        assert_eq!(query.search, None);

        let query: Query = serde_json::from_str(r#"{"search": null}"#).unwrap();
        assert_eq!(query.search, None);

        let query: Query = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(query.search, None);
    }

    #[test]
    fn test_deserialize_optional_id_string() {
        #[derive(Deserialize)]
        struct Tag {
            #[serde(default, deserialize_with = "deserialize_optional_id_string")]
            id: Option<String>,
        }

        let tag: Tag = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(tag.id.as_deref(), Some("7"));

        let tag: Tag = serde_json::from_str(r#"{"id": "happy"}"#).unwrap();
        assert_eq!(tag.id.as_deref(), Some("happy"));

        let tag: Tag = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(tag.id, None);
    }
}
