use serde::Deserialize;

use crate::domain::dto::pagination::PageRequest;
use crate::utils::string_utils::deserialize_optional_string;

/// `GET /api/recipes` 쿼리
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RecipeListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub emotion: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
}

impl RecipeListQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_ignored() {
        let query: RecipeListQuery =
            serde_json::from_str(r#"{"category": "", "emotion": "Happy", "search": "  "}"#).unwrap();

        assert_eq!(query.category, None);
        assert_eq!(query.emotion.as_deref(), Some("Happy"));
        assert_eq!(query.search, None);
        assert_eq!(query.page_request(), PageRequest { page: 1, limit: 10 });
    }
}
