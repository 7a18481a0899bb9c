use crate::{
    models::{Category, Product},
    Result,
};
use async_trait::async_trait;
use shopfront_api::FakeStoreClient;
use tracing::{info, warn};

/// Where the catalog comes from - the remote API in production, fakes in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
    async fn fetch_categories(&self) -> Result<Vec<Category>>;
}

/// `CatalogSource` backed by the Fake Store API
pub struct FakeStoreSource {
    client: FakeStoreClient,
}

impl FakeStoreSource {
    pub fn new(client: FakeStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogSource for FakeStoreSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let products = self.client.get_products().await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        Ok(self.client.get_categories().await?)
    }
}

/// Where the catalog is in its (one-shot) lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed(String),
}

/// In-memory catalog, fetched once per session
///
/// Products and categories are published together or not at all.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<Category>,
    state: LoadState,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            state: LoadState::Pending,
        }
    }

    /// Already-loaded catalog, for tests and offline tooling
    pub fn from_parts(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
            state: LoadState::Ready,
        }
    }

    /// Fetch products and categories; both must succeed before either is published
    pub async fn load(&mut self, source: &dyn CatalogSource) -> Result<()> {
        info!("Loading catalog");

        let fetched = futures::try_join!(source.fetch_products(), source.fetch_categories());

        match fetched {
            Ok((products, categories)) => {
                info!(
                    "Catalog ready: {} products, {} categories",
                    products.len(),
                    categories.len()
                );
                self.products = products;
                self.categories = categories;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!("Catalog load failed: {}", e);
                self.products.clear();
                self.categories.clear();
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn find(&self, id: crate::ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn phone() -> Product {
        Product {
            id: 1,
            title: "Phone".into(),
            description: "Pocket computer".into(),
            price: 499.0,
            category: "electronics".into(),
            image: "https://img.example/1.png".into(),
        }
    }

    #[tokio::test]
    async fn test_load_publishes_both_lists() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_products()
            .times(1)
            .returning(|| Ok(vec![phone()]));
        source
            .expect_fetch_categories()
            .times(1)
            .returning(|| Ok(vec!["electronics".to_string()]));

        let mut store = CatalogStore::new();
        assert_eq!(store.state(), &LoadState::Pending);

        store.load(&source).await.unwrap();

        assert!(store.is_ready());
        assert_eq!(store.all_products(), &[phone()]);
        assert_eq!(store.all_categories(), &["electronics".to_string()]);
        assert_eq!(store.find(1).map(|p| p.title.as_str()), Some("Phone"));
        assert!(store.find(2).is_none());
    }

    #[tokio::test]
    async fn test_category_failure_publishes_nothing() {
        let mut source = MockCatalogSource::new();
        source.expect_fetch_products().returning(|| Ok(vec![phone()]));
        source
            .expect_fetch_categories()
            .returning(|| Err(Error::ConfigError("boom".into())));

        let mut store = CatalogStore::new();
        assert!(store.load(&source).await.is_err());

        assert!(store.all_products().is_empty());
        assert!(store.all_categories().is_empty());
        assert!(matches!(store.state(), LoadState::Failed(msg) if msg.contains("boom")));
    }

    #[tokio::test]
    async fn test_product_failure_publishes_nothing() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_products()
            .returning(|| Err(Error::ConfigError("down".into())));
        source
            .expect_fetch_categories()
            .returning(|| Ok(vec!["electronics".to_string()]));

        let mut store = CatalogStore::new();
        assert!(store.load(&source).await.is_err());

        assert!(store.all_categories().is_empty());
        assert!(!store.is_ready());
    }

    #[tokio::test]
    async fn test_failed_reload_clears_previous_catalog() {
        let mut store = CatalogStore::from_parts(vec![phone()], vec!["electronics".into()]);

        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_products()
            .returning(|| Err(Error::ConfigError("down".into())));
        source.expect_fetch_categories().returning(|| Ok(vec![]));

        let _ = store.load(&source).await;
        assert!(store.all_products().is_empty());
    }
}
