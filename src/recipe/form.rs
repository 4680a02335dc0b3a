// src/recipe/form.rs

//! Upload form decoding
//!
//! The upload page posts indexed fields:
//!
//! ```text
//! title=Pancakes
//! ingredientCount=2
//! ingredient[0]=Flour   quantity[0]=2 cups
//! ingredient[1]=Eggs    quantity[1]=2
//! instructionCount=1
//! instruction[0]=Mix and fry
//! ```
//!
//! Missing fields read as empty strings. A malformed count is reported as a
//! [`FormError`] rather than aborting the request.

use super::format::{Ingredient, RecipeDraft};
use crate::error::FormError;
use std::collections::HashMap;

/// Upper bound on `ingredientCount` / `instructionCount`
pub const MAX_FORM_ENTRIES: usize = 500;

/// A decoded upload form, before author and date are attached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    /// (name, quantity) rows in form order
    pub ingredients: Vec<(String, String)>,
    pub instructions: Vec<String>,
}

impl RecipeForm {
    /// Decode the indexed upload fields
    pub fn parse(fields: &HashMap<String, String>) -> Result<Self, FormError> {
        let field = |name: &str| fields.get(name).map(String::as_str).unwrap_or_default();

        let ingredient_count = parse_count(fields, "ingredientCount")?;
        let ingredients = (0..ingredient_count)
            .map(|i| {
                (
                    field(&format!("ingredient[{}]", i)).to_string(),
                    field(&format!("quantity[{}]", i)).to_string(),
                )
            })
            .filter(|(name, _)| !name.trim().is_empty())
            .collect();

        let instruction_count = parse_count(fields, "instructionCount")?;
        let instructions = (0..instruction_count)
            .map(|i| field(&format!("instruction[{}]", i)).to_string())
            .collect();

        Ok(Self {
            title: field("title").to_string(),
            ingredients,
            instructions,
        })
    }

    /// Attach the author and submission date
    pub fn into_draft(self, author: impl Into<String>, date: impl Into<String>) -> RecipeDraft {
        let mut draft = RecipeDraft::new(self.title, author, date);
        for (name, quantity) in self.ingredients {
            draft.add_ingredient(Ingredient::new(name, quantity));
        }
        draft.instructions = self.instructions;
        draft
    }
}

fn parse_count(fields: &HashMap<String, String>, name: &'static str) -> Result<usize, FormError> {
    let value = fields.get(name).map(String::as_str).unwrap_or_default();
    let count: usize = value.trim().parse().map_err(|_| FormError::InvalidCount {
        field: name,
        value: value.to_string(),
    })?;

    if count > MAX_FORM_ENTRIES {
        return Err(FormError::TooManyEntries {
            field: name,
            count,
            limit: MAX_FORM_ENTRIES,
        });
    }

    Ok(count)
}
