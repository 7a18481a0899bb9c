use serde::{Deserialize, Serialize};
use shopfront_api::StoreProduct;

pub type ProductId = u64;

/// Category identifier as the API spells it ("electronics", "men's clothing"...)
///
/// Deliberately a plain string: new categories show up without a release.
pub type Category = String;

/// A catalog item. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub image: String,
}

impl From<StoreProduct> for Product {
    fn from(p: StoreProduct) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            // The API never sends negative prices, but don't trust it to
            price: p.price.max(0.0),
            category: p.category,
            image: p.image,
        }
    }
}
