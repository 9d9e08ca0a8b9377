use crate::persistence::PersistenceError;
use crate::types::CatalogEntry;
use std::collections::HashMap;

/// Key-value storage for the favorites overlay.
pub trait FavoriteStore: Send {
    fn load(&self) -> Result<HashMap<String, bool>, PersistenceError>;
    fn save(&self, favorites: &HashMap<String, bool>) -> Result<(), PersistenceError>;
}

/// In-memory catalog of reviewed games keyed by content hash, plus the
/// favorites overlay.
///
/// The catalog is only ever replaced as a whole. Favorites are independent of
/// the catalog and survive reloads.
pub struct ReviewIndex {
    entries: Vec<CatalogEntry>,
    by_hash: HashMap<String, usize>,
    favorites: HashMap<String, bool>,
    store: Box<dyn FavoriteStore>,
}

impl ReviewIndex {
    /// Empty catalog; favorites are read from `store`.
    pub fn new(store: Box<dyn FavoriteStore>) -> Result<Self, PersistenceError> {
        let favorites = store.load()?;
        Ok(Self {
            entries: Vec::new(),
            by_hash: HashMap::new(),
            favorites,
            store,
        })
    }

    /// Replace the whole catalog. The new mapping is built before anything is
    /// swapped in. On duplicate hashes the last entry wins.
    pub fn load_catalog(&mut self, entries: Vec<CatalogEntry>) {
        let by_hash = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.hash.clone(), i))
            .collect();
        self.entries = entries;
        self.by_hash = by_hash;
        tracing::debug!(entries = self.entries.len(), "Catalog replaced");
    }

    pub fn lookup_by_hash(&self, hash: &str) -> Option<&CatalogEntry> {
        self.by_hash.get(hash).map(|&i| &self.entries[i])
    }

    /// Row of `hash` in catalog order.
    pub fn position_of(&self, hash: &str) -> Option<usize> {
        self.by_hash.get(hash).copied()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_favorite(&self, hash: &str) -> bool {
        self.favorites.get(hash).copied().unwrap_or(false)
    }

    /// Update the overlay, then persist it. A persistence error is returned
    /// but the in-memory flag keeps the new value.
    pub fn set_favorite(&mut self, hash: &str, favorite: bool) -> Result<(), PersistenceError> {
        self.favorites.insert(hash.to_string(), favorite);
        self.store.save(&self.favorites)
    }

    /// Flip the favorite flag of `hash` and return the new value.
    pub fn toggle_favorite(&mut self, hash: &str) -> (bool, Result<(), PersistenceError>) {
        let favorite = !self.is_favorite(hash);
        (favorite, self.set_favorite(hash, favorite))
    }
}
