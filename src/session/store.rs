// src/session/store.rs

//! Session map, safe for concurrent callers
//!
//! One lock guards the whole map. Cart updates resolve the recipe through the
//! shared [`RecipeStore`] before taking that lock, so the two stores never
//! hold each other's locks.

use super::model::Session;
use crate::error::{StoreError, StoreResult};
use crate::recipe::RecipeStore;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Mapping from session token to [`Session`]
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    recipes: Arc<RecipeStore>,
}

impl SessionStore {
    /// Create an empty store that resolves cart additions against `recipes`
    pub fn new(recipes: Arc<RecipeStore>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            recipes,
        }
    }

    /// Look up a session by token
    pub fn lookup(&self, id: &str) -> StoreResult<Session> {
        self.sessions
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::SessionNotFound(id.to_string()))
    }

    /// Insert a session, replacing any existing one with the same token
    pub fn add_session(&self, session: Session) {
        let mut sessions = self.sessions.lock();
        debug!("Adding session for user {}", session.user);
        sessions.insert(session.id.clone(), session);
    }

    /// Remove a session; unknown tokens are ignored
    pub fn remove_session(&self, id: &str) {
        if self.sessions.lock().remove(id).is_some() {
            debug!("Removed session {}", id);
        }
    }

    /// Add every ingredient of recipe `recipe_id` to the session's cart
    ///
    /// Recipe lookup errors are returned before the session is touched.
    pub fn update_cart(&self, session_id: &str, recipe_id: &str) -> StoreResult<()> {
        let recipe = self.recipes.lookup(recipe_id)?;

        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))?;

        session.add_recipe_to_cart(&recipe);
        debug!(
            "Added recipe {} to cart of session {} ({} items)",
            recipe_id,
            session_id,
            session.cart.len()
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeDraft;

    fn stores() -> (Arc<RecipeStore>, SessionStore) {
        let recipes = Arc::new(RecipeStore::new());
        recipes.add_recipe(
            RecipeDraft::new("Bread", "ada", "01/01/2024")
                .with_ingredient("Salt", "1 tsp")
                .with_ingredient("Flour", "500 g"),
        );
        recipes.add_recipe(
            RecipeDraft::new("Soup", "bob", "01/02/2024")
                .with_ingredient("Salt", "2 tsp")
                .with_ingredient("Water", "1 l"),
        );
        let sessions = SessionStore::new(recipes.clone());
        (recipes, sessions)
    }

    #[test]
    fn test_session_lifecycle() {
        let (_, sessions) = stores();
        assert!(sessions.is_empty());

        sessions.add_session(Session::new("ada", "tok"));
        assert_eq!(sessions.lookup("tok").unwrap().user, "ada");
        assert_eq!(sessions.len(), 1);

        sessions.remove_session("tok");
        assert_eq!(
            sessions.lookup("tok"),
            Err(StoreError::SessionNotFound("tok".to_string()))
        );

        // Removing again is a no-op
        sessions.remove_session("tok");
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_add_session_overwrites() {
        let (_, sessions) = stores();
        sessions.add_session(Session::new("ada", "tok"));
        sessions.update_cart("tok", "0").unwrap();

        sessions.add_session(Session::new("bob", "tok"));
        let session = sessions.lookup("tok").unwrap();
        assert_eq!(session.user, "bob");
        assert!(session.is_cart_empty());
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn test_update_cart_aggregates() {
        let (_, sessions) = stores();
        sessions.add_session(Session::new("ada", "tok"));

        sessions.update_cart("tok", "0").unwrap();
        sessions.update_cart("tok", "1").unwrap();

        let session = sessions.lookup("tok").unwrap();
        assert_eq!(session.cart["salt"].quantity, "1 tsp, 2 tsp");
        assert_eq!(session.cart["flour"].quantity, "500 g");
        assert_eq!(session.cart["water"].quantity, "1 l");
    }

    #[test]
    fn test_update_cart_unknown_session() {
        let (_, sessions) = stores();
        sessions.add_session(Session::new("ada", "tok"));
        sessions.update_cart("tok", "0").unwrap();
        let before = sessions.lookup("tok").unwrap();

        assert_eq!(
            sessions.update_cart("nope", "1"),
            Err(StoreError::SessionNotFound("nope".to_string()))
        );
        assert_eq!(sessions.lookup("tok").unwrap(), before);
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn test_update_cart_bad_recipe_leaves_session() {
        let (_, sessions) = stores();
        sessions.add_session(Session::new("ada", "tok"));
        sessions.update_cart("tok", "0").unwrap();
        let before = sessions.lookup("tok").unwrap();

        assert!(matches!(
            sessions.update_cart("tok", "abc"),
            Err(StoreError::InvalidId(_))
        ));
        assert!(matches!(
            sessions.update_cart("tok", "9"),
            Err(StoreError::OutOfRange { .. })
        ));
        assert_eq!(sessions.lookup("tok").unwrap(), before);
    }

    #[test]
    fn test_recipe_error_wins_over_unknown_session() {
        let (_, sessions) = stores();
        assert!(matches!(
            sessions.update_cart("nope", "x"),
            Err(StoreError::InvalidId(_))
        ));
    }

    #[test]
    fn test_lookup_returns_copy() {
        let (_, sessions) = stores();
        sessions.add_session(Session::new("ada", "tok"));

        let mut copy = sessions.lookup("tok").unwrap();
        copy.user = "mallory".to_string();
        copy.cart.insert(
            "gold".to_string(),
            crate::recipe::Ingredient::new("Gold", "1 bar"),
        );

        let stored = sessions.lookup("tok").unwrap();
        assert_eq!(stored.user, "ada");
        assert!(stored.is_cart_empty());
    }

    #[test]
    fn test_sees_recipes_added_later() {
        let (recipes, sessions) = stores();
        sessions.add_session(Session::new("ada", "tok"));
        let id = recipes.add_recipe(RecipeDraft::new("Tea", "cy", "d").with_ingredient("Tea", "1 bag"));

        sessions.update_cart("tok", &id).unwrap();
        assert_eq!(sessions.lookup("tok").unwrap().cart["tea"].quantity, "1 bag");
    }
}
