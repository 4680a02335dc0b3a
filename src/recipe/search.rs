// src/recipe/search.rs

//! Recipe search
//!
//! A recipe matches when its title contains the query text, ignoring case,
//! and it lists every requested ingredient. Ingredient names are compared as
//! exact map keys; [`SearchQuery`] folds user input to the stored lower-case
//! convention before it reaches the store.

use super::format::{Recipe, ingredient_key};
use super::store::RecipeStore;

/// Match one recipe against an already lower-cased title needle
pub(crate) fn recipe_matches<S: AsRef<str>>(recipe: &Recipe, needle: &str, ingredients: &[S]) -> bool {
    recipe.title.to_lowercase().contains(needle)
        && ingredients
            .iter()
            .all(|name| recipe.has_ingredient(name.as_ref()))
}

/// A search request decoded from blog query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub ingredients: Vec<String>,
    filtered: bool,
}

impl SearchQuery {
    /// Build a query from the `title` parameter and repeated `ingredient`
    /// parameters
    ///
    /// Ingredient names are trimmed and lower-cased; blank ones are dropped.
    pub fn from_params<S: AsRef<str>>(title: Option<&str>, ingredients: &[S]) -> Self {
        let ingredients: Vec<String> = ingredients
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .map(ingredient_key)
            .collect();

        Self {
            title: title.unwrap_or_default().to_string(),
            filtered: title.is_some() || !ingredients.is_empty(),
            ingredients,
        }
    }

    /// Whether any search parameter was supplied
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Run the query; an unfiltered query lists every recipe
    pub fn run(&self, store: &RecipeStore) -> Vec<Recipe> {
        if self.filtered {
            store.search(&self.title, &self.ingredients)
        } else {
            store.all()
        }
    }
}
