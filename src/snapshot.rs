// src/snapshot.rs

//! Recipe snapshot file
//!
//! The whole collection is stored as one indented JSON array in insertion
//! order and replaced in full after every addition. Writes go to a temporary
//! file next to the target which is then renamed over it, so readers never
//! see a truncated snapshot.

use crate::error::SnapshotError;
use crate::recipe::Recipe;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Load a snapshot file
pub fn load(path: &Path) -> Result<Vec<Recipe>, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let recipes: Vec<Recipe> =
        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Replace the snapshot file with `recipes`
pub fn save(path: &Path, recipes: &[Recipe]) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(recipes)?;

    let write_err = |source: std::io::Error| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(json.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Wrote {} recipes to {}", recipes.len(), path.display());
    Ok(())
}
