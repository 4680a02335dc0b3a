// src/recipe/format.rs

//! Recipe and ingredient value types
//!
//! The serialized field names match the snapshot files written by earlier
//! releases of the blog (`ID`, `Title`, `Ingredients`, ...), so existing
//! `recipes.json` files load unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single ingredient line: a display name and a free-text quantity
///
/// Quantities are never parsed ("2 cups", "to taste"), only concatenated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// Map key for this ingredient (lower-cased name)
    pub fn key(&self) -> String {
        ingredient_key(&self.name)
    }
}

/// Fold an ingredient name to the key used by recipe and cart maps
pub fn ingredient_key(name: &str) -> String {
    name.to_lowercase()
}

/// A recipe that has been added to the store
///
/// Only the store constructs these; callers submit a [`RecipeDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    pub title: String,
    #[serde(rename = "ID")]
    pub id: String,
    pub author: String,
    /// Submission date, `MM/DD/YYYY`
    pub date: String,
    /// Ingredients keyed by lower-cased name
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: BTreeMap<String, Ingredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
}

impl Recipe {
    pub(crate) fn from_draft(id: String, draft: RecipeDraft) -> Self {
        Self {
            title: draft.title,
            id,
            author: draft.author,
            date: draft.date,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
        }
    }

    /// Whether the recipe lists an ingredient under exactly this key
    pub fn has_ingredient(&self, key: &str) -> bool {
        self.ingredients.contains_key(key)
    }

    /// The recipe without its identifier
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            date: self.date.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }
}

/// A recipe submission that has not been assigned an identifier yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub author: String,
    pub date: String,
    pub ingredients: BTreeMap<String, Ingredient>,
    pub instructions: Vec<String>,
}

impl RecipeDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// Add an ingredient, keyed by its lower-cased name
    ///
    /// A later ingredient with the same folded name replaces the earlier one.
    pub fn with_ingredient(mut self, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.add_ingredient(Ingredient::new(name, quantity));
        self
    }

    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.key(), ingredient);
    }
}

// Older snapshots serialize empty collections as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
