use crate::{models::ProductId, Result};
use shopfront_cache::KeyValueStore;
use tracing::{debug, warn};

/// Storage key holding the favorites as a JSON array of integers
pub const FAVORITES_KEY: &str = "favorites";

/// Product ids the user has hearted, in the order they were added
///
/// Independent from the catalog: ids that no longer exist upstream are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<ProductId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted form. Anything that isn't a JSON array of
    /// non-negative integers yields `None`; `null` reads as empty.
    pub fn from_json(raw: &str) -> Option<Self> {
        let ids: Option<Vec<ProductId>> = serde_json::from_str(raw).ok()?;
        let mut set = Self::new();
        for id in ids.unwrap_or_default() {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        Some(set)
    }

    pub fn to_json(&self) -> String {
        // Serializing a Vec<u64> can't fail
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership; returns true if `id` is a favorite afterwards
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ProductId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }
}

/// FavoriteSet glued to its durable store
pub struct Favorites<S: KeyValueStore> {
    set: FavoriteSet,
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Read the persisted set once. Missing, malformed or unreadable data all
    /// degrade to an empty set.
    pub fn load(store: S) -> Self {
        let set = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => FavoriteSet::from_json(&raw).unwrap_or_else(|| {
                warn!("Ignoring malformed favorites data: {:?}", raw);
                FavoriteSet::new()
            }),
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                warn!("Could not read favorites, starting empty: {}", e);
                FavoriteSet::new()
            }
        };

        debug!("Loaded {} favorites", set.len());
        Self { set, store }
    }

    pub fn set(&self) -> &FavoriteSet {
        &self.set
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.set.contains(id)
    }

    /// Toggle and persist right away
    ///
    /// The in-memory flip sticks even if the write fails; the error is returned
    /// so the caller can tell the user.
    pub fn toggle(&mut self, id: ProductId) -> Result<bool> {
        let now_favorite = self.set.toggle(id);
        debug!("Product {} favorite: {}", id, now_favorite);
        self.store.set(FAVORITES_KEY, &self.set.to_json())?;
        Ok(now_favorite)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_cache::{MemoryStore, StoreError};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> shopfront_cache::store::Result<Option<String>> {
            Err(StoreError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> shopfront_cache::store::Result<()> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn test_from_json() {
        let set = FavoriteSet::from_json("[3, 1, 3]").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 1]);
        assert!(FavoriteSet::from_json("null").unwrap().is_empty());
        assert!(FavoriteSet::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(FavoriteSet::from_json("").is_none());
        assert!(FavoriteSet::from_json("{\"a\":1}").is_none());
        assert!(FavoriteSet::from_json("[\"seven\"]").is_none());
        assert!(FavoriteSet::from_json("[-1]").is_none());
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut set: FavoriteSet = [1, 2].into_iter().collect();
        let before = set.clone();

        assert!(set.toggle(9));
        assert!(!set.toggle(9));
        assert_eq!(set, before);

        assert!(!set.toggle(1));
        assert!(set.toggle(1));
        assert!(set.contains(1));
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let favorites = Favorites::load(MemoryStore::new());
        assert!(favorites.set().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let favorites = Favorites::load(MemoryStore::with_entry(FAVORITES_KEY, "not json"));
        assert!(favorites.set().is_empty());
    }

    #[test]
    fn test_load_unreadable_store_is_empty() {
        let favorites = Favorites::load(BrokenStore);
        assert!(favorites.set().is_empty());
    }

    #[test]
    fn test_toggle_persists_every_time() {
        let mut favorites = Favorites::load(MemoryStore::new());

        assert!(favorites.toggle(7).unwrap());
        assert_eq!(
            favorites.store().get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[7]")
        );

        assert!(!favorites.toggle(7).unwrap());
        assert_eq!(
            favorites.store().get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_ids_outside_catalog_survive() {
        let mut favorites = Favorites::load(MemoryStore::with_entry(FAVORITES_KEY, "[404]"));
        favorites.toggle(1).unwrap();
        assert!(favorites.contains(404));
        assert_eq!(favorites.set().to_json(), "[404,1]");
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut favorites = Favorites::load(BrokenStore);
        assert!(favorites.toggle(5).is_err());
        assert!(favorites.contains(5));
    }
}
