// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use recipe_blog::{Blog, RecipeDraft, RecipeStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a blog backed by a snapshot in a fresh temp directory, seeded with
/// three recipes (not yet persisted).
///
/// Returns (TempDir, Blog) - keep the TempDir alive to prevent cleanup.
pub fn setup_blog() -> (TempDir, Blog) {
    let temp_dir = tempfile::tempdir().unwrap();
    let blog = Blog::new(seeded_store(), snapshot_path(&temp_dir));
    (temp_dir, blog)
}

pub fn snapshot_path(dir: &TempDir) -> PathBuf {
    dir.path().join("recipes.json")
}

/// Store holding "Pizza Pie", "Torta" and "Salted Caramel", in that order
pub fn seeded_store() -> RecipeStore {
    let store = RecipeStore::new();
    for draft in seed_drafts() {
        store.add_recipe(draft);
    }
    store
}

pub fn seed_drafts() -> Vec<RecipeDraft> {
    vec![
        RecipeDraft::new("Pizza Pie", "ada", "01/02/2024")
            .with_ingredient("Cheese", "2 cups")
            .with_ingredient("Flour", "3 cups")
            .with_ingredient("Salt", "1 tsp")
            .with_instruction("Make dough")
            .with_instruction("Bake at 250C"),
        RecipeDraft::new("Torta", "bob", "02/03/2024")
            .with_ingredient("Eggs", "4")
            .with_ingredient("Cheese", "1 cup")
            .with_instruction("Whisk")
            .with_instruction("Fry"),
        RecipeDraft::new("Salted Caramel", "cy", "03/04/2024")
            .with_ingredient("Sugar", "200 g")
            .with_ingredient("Salt", "2 tsp")
            .with_instruction("Melt sugar"),
    ]
}
