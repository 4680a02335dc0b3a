// src/recipe/mod.rs

//! Recipes and the recipe collection
//!
//! - [`Recipe`] / [`Ingredient`]: immutable values handed out by the store
//! - [`RecipeDraft`]: a submission without an id
//! - [`RecipeStore`]: the append-only collection, with id assignment and search
//! - [`SearchQuery`] / [`RecipeForm`]: decoding of blog query and upload fields
//!
//! # Identifiers
//!
//! A recipe's id is the decimal string of its zero-based insertion index.
//! The store assigns it on append; callers never supply one. The collection
//! is append-only, so an id handed out once resolves forever.

mod form;
mod format;
mod search;
mod store;

pub use form::{MAX_FORM_ENTRIES, RecipeForm};
pub use format::{Ingredient, Recipe, RecipeDraft, ingredient_key};
pub use search::SearchQuery;
pub use store::RecipeStore;
