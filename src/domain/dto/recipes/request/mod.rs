pub mod engagement_request;
pub mod list_query;
pub mod recipe_form;

pub use engagement_request::{CommentRequest, LikeRequest};
pub use list_query::RecipeListQuery;
pub use recipe_form::{NewRecipe, RecipeChanges};
