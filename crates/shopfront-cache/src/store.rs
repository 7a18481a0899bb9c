use thiserror::Error;

/// Everything that can go wrong while touching a key-value backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Store lock was poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Durable string-to-string storage, scoped to one user profile
///
/// Values are opaque to the store; callers own the serialization format.
/// A missing key is `Ok(None)`, never an error.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
