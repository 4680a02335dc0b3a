// src/lib.rs

//! Recipe Blog Store
//!
//! In-memory content and session store behind a recipe-sharing blog.
//!
//! # Architecture
//!
//! - Recipes: append-only collection, ids are insertion indices
//! - Sessions: opaque token -> user + shopping cart
//! - Shopping cart: ingredients merged across recipes by concatenating
//!   quantities
//! - Snapshot: the recipe collection is rewritten to one JSON file after
//!   every addition
//!
//! Each store owns a single lock and only hands out copies. Rendering,
//! cookies, routing and credential checks belong to the caller.

pub mod blog;
pub mod config;
mod error;
pub mod recipe;
pub mod session;
pub mod snapshot;

pub use blog::{Blog, DATE_FORMAT, submission_date};
pub use config::BlogConfig;
pub use error::{FormError, PublishError, SnapshotError, StoreError, StoreResult};
pub use recipe::{Ingredient, Recipe, RecipeDraft, RecipeForm, RecipeStore, SearchQuery};
pub use session::{Session, SessionStore};
