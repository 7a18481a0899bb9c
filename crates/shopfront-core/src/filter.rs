use crate::models::Product;

/// Products whose category is exactly `category` (case-sensitive), in catalog order
pub fn by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// Free-text search over title, description and category
///
/// The term is trimmed and lower-cased; an empty term returns everything.
/// A product matches when the term is a substring of any of the three fields.
pub fn by_search_term(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.trim().to_lowercase();

    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
