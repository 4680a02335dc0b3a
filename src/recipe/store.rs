// src/recipe/store.rs

//! Append-only recipe collection, safe for concurrent callers
//!
//! Every method takes the single collection lock for its whole duration and
//! hands back copies, so callers can never reach stored state.

use super::format::{Recipe, RecipeDraft};
use super::search::recipe_matches;
use crate::error::{StoreError, StoreResult};
use parking_lot::Mutex;
use tracing::debug;

/// The recipe collection
///
/// A recipe's id is the decimal form of its index, assigned on append and
/// never reused.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Mutex<Vec<Recipe>>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing collection (e.g. a loaded snapshot)
    ///
    /// Ids are re-derived from position so the index invariant holds even
    /// if the source carried stale or missing ids.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let recipes = recipes
            .into_iter()
            .enumerate()
            .map(|(index, mut recipe)| {
                recipe.id = index.to_string();
                recipe
            })
            .collect();

        Self {
            recipes: Mutex::new(recipes),
        }
    }

    /// Look up a recipe by its identifier
    pub fn lookup(&self, id: &str) -> StoreResult<Recipe> {
        let recipes = self.recipes.lock();
        let index: usize = id
            .parse()
            .map_err(|_| StoreError::InvalidId(id.to_string()))?;

        recipes
            .get(index)
            .cloned()
            .ok_or_else(|| StoreError::OutOfRange {
                id: id.to_string(),
                len: recipes.len(),
            })
    }

    /// Append a recipe and return the identifier assigned to it
    pub fn add_recipe(&self, draft: RecipeDraft) -> String {
        let mut recipes = self.recipes.lock();
        let id = recipes.len().to_string();
        recipes.push(Recipe::from_draft(id.clone(), draft));
        debug!("Added recipe {}", id);
        id
    }

    /// Recipes whose title contains `title` (case-insensitive) and which list
    /// every ingredient key in `ingredients`, in insertion order
    pub fn search<S: AsRef<str>>(&self, title: &str, ingredients: &[S]) -> Vec<Recipe> {
        let needle = title.to_lowercase();
        let recipes = self.recipes.lock();

        recipes
            .iter()
            .filter(|recipe| recipe_matches(recipe, &needle, ingredients))
            .cloned()
            .collect()
    }

    /// Copy of the whole collection in insertion order
    pub fn all(&self) -> Vec<Recipe> {
        self.recipes.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.recipes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.lock().is_empty()
    }
}
