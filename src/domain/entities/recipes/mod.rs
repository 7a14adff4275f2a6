pub mod recipe;

pub use recipe::{Category, Comment, Like, Mood, Recipe, Reply};
