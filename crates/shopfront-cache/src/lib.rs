// Key-value persistence for the storefront
// One small capability trait, three interchangeable backends

pub mod file;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{KeyValueStore, StoreError};
