//! 레시피 등록/수정 multipart 폼 해석
//!
//! 프론트엔드는 배열/객체 필드를 JSON 문자열로 담아 보냅니다.
//!
//! | 필드 | 형식 | 등록 | 수정 |
//! |------|------|------|------|
//! | `name` | 텍스트 | 필수 | 선택 |
//! | `userID` | ObjectId hex | 필수 | 무시 |
//! | `categories` | JSON `[{id, categoryName, categoryImage}]` | 선택 | 선택 |
//! | `ingredientList` | JSON `["..."]` | 1개 이상 | 선택 (있으면 1개 이상) |
//! | `recipeDescription` | 텍스트 | 필수 | 선택 |
//! | `moodNote` | 텍스트 | 선택 | 선택 |
//! | `emotion` / `mood` | JSON `{id, emotionName, icon}` 또는 `null` | 등록은 `emotion` | 수정은 `mood` |
//! | `recipeImages` | 이미지 파일 0..3 | | 있으면 교체 |

use mongodb::bson::{self, Bson, DateTime, Document, oid::ObjectId};
use serde::de::DeserializeOwned;

use crate::config::MAX_RECIPE_IMAGES;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::recipes::recipe::{Category, Mood, Recipe};
use crate::utils::multipart::FormData;
use crate::utils::string_utils::parse_object_id;

pub const RECIPE_IMAGES_FIELD: &str = "recipeImages";
pub const TOO_MANY_IMAGES: &str = "You can upload up to 3 images";
pub const REQUIRED_FIELDS_MISSING: &str = "Required fields are missing";
pub const INVALID_ID_FORMAT: &str = "Invalid ID format";

/// JSON 문자열 필드를 해석합니다. 없거나 비어 있거나 `null`이면 `None`.
fn parse_json_field<T: DeserializeOwned>(form: &FormData, field: &str) -> AppResult<Option<T>> {
    let Some(raw) = form.non_empty_text(field) else {
        return Ok(None);
    };

    serde_json::from_str::<Option<T>>(&raw).map_err(|e| {
        log::debug!("{} JSON 파싱 실패: {}", field, e);
        AppError::ValidationError(format!("Invalid {} format", field))
    })
}

/// 재료 목록의 앞뒤 공백을 지우고 빈 항목을 뺍니다.
fn clean_ingredients(ingredients: Vec<String>) -> Vec<String> {
    ingredients
        .into_iter()
        .map(|ingredient| ingredient.trim().to_string())
        .filter(|ingredient| !ingredient.is_empty())
        .collect()
}

fn check_image_count(form: &FormData) -> AppResult<()> {
    if form.file_count(RECIPE_IMAGES_FIELD) > MAX_RECIPE_IMAGES {
        return Err(AppError::ValidationError(TOO_MANY_IMAGES.to_string()));
    }
    Ok(())
}

fn to_bson<T: serde::Serialize>(value: &T) -> AppResult<Bson> {
    bson::to_bson(value).map_err(|e| AppError::InternalError(format!("BSON 변환 실패: {}", e)))
}

/// 검증을 통과한 새 레시피 입력
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub name: String,
    pub user_id: ObjectId,
    pub categories: Vec<Category>,
    pub ingredients: Vec<String>,
    pub recipe_description: String,
    pub mood_note: Option<String>,
    pub mood: Option<Mood>,
}

impl NewRecipe {
    /// 검증 순서: 이미지 개수 → JSON 형식 → 필수 값
    pub fn from_form(form: &FormData) -> AppResult<Self> {
        check_image_count(form)?;

        let categories = parse_json_field::<Vec<Category>>(form, "categories")?.unwrap_or_default();
        let ingredients = parse_json_field::<Vec<String>>(form, "ingredientList")?
            .map(clean_ingredients)
            .unwrap_or_default();
        let mood = parse_json_field::<Mood>(form, "emotion")?;

        let name = form.non_empty_text("name");
        let user_id = form.non_empty_text("userID");
        let recipe_description = form.non_empty_text("recipeDescription");

        let (Some(name), Some(user_id), Some(recipe_description)) = (name, user_id, recipe_description) else {
            return Err(AppError::ValidationError(REQUIRED_FIELDS_MISSING.to_string()));
        };
        if ingredients.is_empty() {
            return Err(AppError::ValidationError(REQUIRED_FIELDS_MISSING.to_string()));
        }

        Ok(Self {
            name,
            user_id: parse_object_id(&user_id, INVALID_ID_FORMAT)?,
            categories,
            ingredients,
            recipe_description,
            mood_note: form.non_empty_text("moodNote"),
            mood,
        })
    }

    pub fn into_recipe(self, recipe_images: Vec<String>) -> Recipe {
        let now = DateTime::now();

        Recipe {
            id: None,
            name: self.name,
            user_id: self.user_id,
            categories: self.categories,
            ingredients: self.ingredients,
            recipe_description: self.recipe_description,
            mood_note: self.mood_note,
            mood: self.mood,
            recipe_images,
            comments: Vec::new(),
            likes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 레시피 수정 입력. 폼에 있는 필드만 `Some`입니다.
///
/// `mood_note`, `mood`는 "필드 없음"(`None`)과 "비우기"(`Some(None)`)를 구분합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub categories: Option<Vec<Category>>,
    pub ingredients: Option<Vec<String>>,
    pub recipe_description: Option<String>,
    pub mood_note: Option<Option<String>>,
    pub mood: Option<Option<Mood>>,
}

impl RecipeChanges {
    pub fn from_form(form: &FormData) -> AppResult<Self> {
        check_image_count(form)?;

        let mut changes = RecipeChanges::default();

        if form.has_text("categories") {
            changes.categories = Some(parse_json_field::<Vec<Category>>(form, "categories")?.unwrap_or_default());
        }
        if form.has_text("ingredientList") {
            let ingredients = parse_json_field::<Vec<String>>(form, "ingredientList")?
                .map(clean_ingredients)
                .unwrap_or_default();
            if ingredients.is_empty() {
                return Err(AppError::ValidationError(REQUIRED_FIELDS_MISSING.to_string()));
            }
            changes.ingredients = Some(ingredients);
        }
        if form.has_text("mood") {
            changes.mood = Some(parse_json_field::<Mood>(form, "mood")?);
        }

        for (field, target) in [
            ("name", &mut changes.name),
            ("recipeDescription", &mut changes.recipe_description),
        ] {
            if form.has_text(field) {
                let value = form
                    .non_empty_text(field)
                    .ok_or_else(|| AppError::ValidationError(REQUIRED_FIELDS_MISSING.to_string()))?;
                *target = Some(value);
            }
        }

        if form.has_text("moodNote") {
            changes.mood_note = Some(form.non_empty_text("moodNote"));
        }

        Ok(changes)
    }

    /// `$set` 문서. 새로 올린 이미지가 있으면 `recipeImages`를 교체합니다.
    pub fn to_set_document(&self, recipe_images: Option<Vec<String>>) -> AppResult<Document> {
        let mut set = Document::new();

        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(categories) = &self.categories {
            set.insert("categories", to_bson(categories)?);
        }
        if let Some(ingredients) = &self.ingredients {
            set.insert("ingredients", ingredients.clone());
        }
        if let Some(description) = &self.recipe_description {
            set.insert("recipeDescription", description.as_str());
        }
        if let Some(mood_note) = &self.mood_note {
            set.insert("moodNote", mood_note.clone().map_or(Bson::Null, Bson::String));
        }
        if let Some(mood) = &self.mood {
            set.insert("mood", to_bson(mood)?);
        }
        if let Some(images) = recipe_images {
            set.insert("recipeImages", images);
        }

        Ok(set)
    }
}
