// Core storefront logic - catalog, labels, filtering, favorites
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod format;
pub mod labels;
pub mod models;

pub use catalog::{CatalogSource, CatalogStore, FakeStoreSource, LoadState};
pub use config::{Config, StorageBackend};
pub use context::AppContext;
pub use error::Error;
pub use favorites::{FavoriteSet, Favorites, FAVORITES_KEY};
pub use labels::{label_for, CategoryLabel, Icon};
pub use models::{Category, Product, ProductId};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
