use crate::{catalog::CatalogStore, favorites::Favorites, format::format_price};
use shopfront_cache::KeyValueStore;

/// Everything one storefront session owns
///
/// Built once at start-up and lent out to the renderer and the controller.
pub struct AppContext<S: KeyValueStore = Box<dyn KeyValueStore>> {
    pub catalog: CatalogStore,
    pub favorites: Favorites<S>,
    pub currency_symbol: String,
}

impl<S: KeyValueStore> AppContext<S> {
    pub fn new(catalog: CatalogStore, store: S, currency_symbol: impl Into<String>) -> Self {
        Self {
            catalog,
            favorites: Favorites::load(store),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn price_label(&self, price: f64) -> String {
        format_price(price, &self.currency_symbol)
    }
}
