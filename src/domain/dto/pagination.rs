//! 페이지네이션 요청/응답 DTO
//!
//! 쿼리 문자열의 `page`, `limit`은 숫자가 아니거나 1보다 작으면 기본값을 사용하고,
//! `limit`은 [`PaginationConfig::max_limit`]으로 제한됩니다.

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// `?page=&limit=` 쿼리 원본
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

/// 정규화된 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            parse_positive(page).unwrap_or(PaginationConfig::DEFAULT_PAGE),
            parse_positive(limit).unwrap_or(PaginationConfig::DEFAULT_LIMIT),
            PaginationConfig::max_limit(),
        )
    }

    pub fn new(page: u64, limit: u64, max_limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, max_limit.max(1)),
        }
    }

    /// 드라이버가 skip을 i64로 보내므로 그 범위를 넘지 않게 자릅니다.
    /// 범위 끝의 페이지는 빈 결과가 됩니다.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(i64::MAX as u64)
    }

    pub fn limit_i64(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    pub fn pagination(&self, total: u64) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total,
            pages: total.div_ceil(self.limit),
        }
    }
}

/// 응답의 `pagination` 블록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_or_invalid_values() {
        let request = PageRequest::from_raw(None, None);
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 10);

        let request = PageRequest::from_raw(Some("abc"), Some("0"));
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 10);

        let request = PageRequest::from_raw(Some("-3"), Some(""));
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 10);
    }

    #[test]
    fn test_limit_is_capped() {
        let request = PageRequest::new(2, 500, 100);
        assert_eq!(request.limit, 100);
        assert_eq!(request.skip(), 100);
    }

    #[test]
    fn test_skip_and_pages() {
        let request = PageRequest::from_raw(Some("3"), Some("4"));
        assert_eq!(request.skip(), 8);

        let pagination = request.pagination(9);
        assert_eq!(pagination, Pagination { page: 3, limit: 4, total: 9, pages: 3 });

        assert_eq!(request.pagination(0).pages, 0);
        assert_eq!(request.pagination(8).pages, 2);
    }

    #[test]
    fn test_huge_page_skip_fits_in_i64() {
        let request = PageRequest::from_raw(Some("200000000000000000"), Some("100"));
        assert_eq!(request.skip(), i64::MAX as u64);

        let request = PageRequest::from_raw(Some(&u64::MAX.to_string()), Some("100"));
        assert!(i64::try_from(request.skip()).is_ok());
    }

    #[test]
    fn test_page_query_deserializes_strings() {
        let query: PageQuery = serde_json::from_str(r#"{"page": "2", "limit": "5"}"#).unwrap();
        assert_eq!(query.page_request(), PageRequest { page: 2, limit: 5 });
    }
}
