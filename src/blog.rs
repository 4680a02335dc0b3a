// src/blog.rs

//! Process-level store handle and the add-recipe workflow
//!
//! [`Blog`] is constructed once at startup and shared (by `Arc` or reference)
//! with whatever layer handles requests. Adding a recipe commits it in memory
//! first and writes the snapshot afterwards, outside the recipe lock, so a
//! slow disk never blocks lookups or cart updates.

use crate::config::BlogConfig;
use crate::error::{PublishError, SnapshotError};
use crate::recipe::{Recipe, RecipeDraft, RecipeForm, RecipeStore};
use crate::session::SessionStore;
use crate::snapshot;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Date format of recipe submissions
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Today's local date as `MM/DD/YYYY`
pub fn submission_date() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// The recipe and session stores plus the snapshot they persist to
#[derive(Debug)]
pub struct Blog {
    recipes: Arc<RecipeStore>,
    sessions: SessionStore,
    snapshot_path: PathBuf,
    /// Serializes snapshot writes; never held together with a store lock
    writer: Mutex<()>,
}

impl Blog {
    /// Wrap an existing recipe store
    pub fn new(recipes: RecipeStore, snapshot_path: impl Into<PathBuf>) -> Self {
        let recipes = Arc::new(recipes);
        Self {
            sessions: SessionStore::new(recipes.clone()),
            recipes,
            snapshot_path: snapshot_path.into(),
            writer: Mutex::new(()),
        }
    }

    /// Load the configured snapshot
    ///
    /// A malformed snapshot is always an error. A missing one is an error
    /// unless `storage.create_missing` is set.
    pub fn open(config: &BlogConfig) -> Result<Self> {
        let path = config.snapshot_path();

        let recipes = if !path.exists() && config.storage.create_missing {
            info!("Snapshot {} not found, starting empty", path.display());
            Vec::new()
        } else {
            snapshot::load(path).context("Cannot start without a valid recipe snapshot")?
        };

        Ok(Self::new(RecipeStore::from_recipes(recipes), path))
    }

    /// Write an empty snapshot at `path` unless one already exists
    ///
    /// Returns whether a file was created.
    pub fn init_snapshot(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        snapshot::save(path, &[])
            .with_context(|| format!("Failed to initialize snapshot: {}", path.display()))?;
        Ok(true)
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    /// Shared handle to the recipe store
    pub fn recipe_store(&self) -> Arc<RecipeStore> {
        self.recipes.clone()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Add a recipe and persist the collection
    ///
    /// On [`PublishError::NotPersisted`] the recipe is still in the store.
    pub fn add_recipe(&self, draft: RecipeDraft) -> Result<String, PublishError> {
        let id = self.recipes.add_recipe(draft);

        if let Err(source) = self.persist() {
            warn!("Recipe {} may not survive a restart: {}", id, source);
            return Err(PublishError::NotPersisted { id, source });
        }

        info!("Published recipe {}", id);
        Ok(id)
    }

    /// Publish an upload form on behalf of the session's user
    pub fn publish(
        &self,
        session_id: &str,
        form: RecipeForm,
        date: impl Into<String>,
    ) -> Result<Recipe, PublishError> {
        let author = self.sessions.lookup(session_id)?.user;
        let id = self.add_recipe(form.into_draft(author, date))?;
        Ok(self.recipes.lookup(&id)?)
    }

    /// Rewrite the snapshot from the current collection
    pub fn persist(&self) -> Result<(), SnapshotError> {
        let _writer = self.writer.lock();
        // Copied under the writer lock so a later write never misses an
        // earlier append.
        let recipes = self.recipes.all();
        snapshot::save(&self.snapshot_path, &recipes)
    }
}
