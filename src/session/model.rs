// src/session/model.rs

//! Session values and shopping-cart aggregation

use crate::recipe::{Ingredient, Recipe, ingredient_key};
use serde::Serialize;
use std::collections::BTreeMap;

/// Separator between quantities contributed by different recipes
pub const QUANTITY_SEPARATOR: &str = ", ";

/// Per-user state attached to an opaque session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: String,
    /// Opaque token issued by the cookie/auth layer
    pub id: String,
    /// Aggregated ingredients keyed by lower-cased name
    pub cart: BTreeMap<String, Ingredient>,
}

impl Session {
    /// A session with an empty cart
    pub fn new(user: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            id: id.into(),
            cart: BTreeMap::new(),
        }
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Cart entries ordered by ingredient key
    pub fn cart_items(&self) -> impl Iterator<Item = &Ingredient> {
        self.cart.values()
    }

    /// Merge every ingredient of `recipe` into the cart
    ///
    /// An ingredient already in the cart keeps its entry and gets the new
    /// quantity appended after the existing one.
    pub(crate) fn add_recipe_to_cart(&mut self, recipe: &Recipe) {
        for (key, ingredient) in &recipe.ingredients {
            let key = ingredient_key(key);
            match self.cart.get_mut(&key) {
                Some(entry) => {
                    entry.quantity =
                        format!("{}{}{}", entry.quantity, QUANTITY_SEPARATOR, ingredient.quantity);
                }
                None => {
                    self.cart.insert(key, ingredient.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeDraft;

    fn recipe(id: &str, ingredients: &[(&str, &str)]) -> Recipe {
        let mut draft = RecipeDraft::new(format!("recipe {}", id), "ada", "01/01/2024");
        for (name, quantity) in ingredients {
            draft = draft.with_ingredient(*name, *quantity);
        }
        Recipe::from_draft(id.to_string(), draft)
    }

    #[test]
    fn test_new_session_has_empty_cart() {
        let session = Session::new("ada", "token-1");
        assert!(session.is_cart_empty());
        assert_eq!(session.cart_items().count(), 0);
    }

    #[test]
    fn test_cart_concatenates_quantities_in_order() {
        let mut session = Session::new("ada", "token-1");
        session.add_recipe_to_cart(&recipe("0", &[("Salt", "1 tsp"), ("Flour", "2 cups")]));
        session.add_recipe_to_cart(&recipe("1", &[("salt", "2 tsp")]));
        session.add_recipe_to_cart(&recipe("2", &[("SALT", "a pinch")]));

        assert_eq!(session.cart.len(), 2);
        assert_eq!(session.cart["salt"].quantity, "1 tsp, 2 tsp, a pinch");
        assert_eq!(session.cart["salt"].name, "Salt");
        assert_eq!(session.cart["flour"].quantity, "2 cups");
    }

    #[test]
    fn test_same_recipe_twice() {
        let mut session = Session::new("ada", "token-1");
        let soup = recipe("0", &[("Water", "1 l")]);
        session.add_recipe_to_cart(&soup);
        session.add_recipe_to_cart(&soup);

        assert_eq!(session.cart["water"].quantity, "1 l, 1 l");
    }
}
