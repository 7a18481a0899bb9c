use thiserror::Error;

/// All the ways things can go wrong in the storefront core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog API error: {0}")]
    ApiError(#[from] shopfront_api::FakeStoreError),

    #[error("Storage error: {0}")]
    StorageError(#[from] shopfront_cache::StoreError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
