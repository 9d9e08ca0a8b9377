use crate::index::FavoriteStore;
use std::collections::HashMap;
use std::path::PathBuf;

const FAVORITES_FILE: &str = "favorites.json";

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Favorites kept as one pretty-printed JSON object (`hash -> bool`) in the
/// data directory.
pub struct JsonFavoriteStore {
    dir: PathBuf,
}

impl JsonFavoriteStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn ensure_dir(&self) -> Result<(), PersistenceError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(FAVORITES_FILE)
    }
}

impl FavoriteStore for JsonFavoriteStore {
    /// Missing file means no favorites yet.
    fn load(&self) -> Result<HashMap<String, bool>, PersistenceError> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, favorites: &HashMap<String, bool>) -> Result<(), PersistenceError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(favorites)?;
        std::fs::write(self.file_path(), json)?;
        Ok(())
    }
}
