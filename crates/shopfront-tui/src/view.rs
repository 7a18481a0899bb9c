// Renderer: projects catalog data into view models drawn on a `Surface`
use shopfront_core::{
    format::format_price,
    labels::{label_for, show_all_label},
    Category, CategoryLabel, FavoriteSet, Product, ProductId,
};

/// Shown in place of the product grid when the catalog could not be loaded
pub const LOAD_ERROR_MESSAGE: &str =
    "Произошла ошибка при загрузке товаров. Пожалуйста, попробуйте позже.";

/// Something the user can activate. Every clickable element carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowCategory(Category),
    ShowAll,
    Search(String),
    ToggleFavorite(ProductId),
}

/// Visual state of a favorite toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteMark {
    Filled,  // ♥ in the accent color
    Outline, // ♡ in the muted color
}

impl FavoriteMark {
    pub fn from_membership(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteMark::Filled
        } else {
            FavoriteMark::Outline
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, FavoriteMark::Filled)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FavoriteMark::Filled => "♥",
            FavoriteMark::Outline => "♡",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
    pub label: CategoryLabel,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub image: String,
    pub title: String,
    pub category_label: String,
    pub price_label: String,
    pub favorite: FavoriteMark,
}

impl ProductCard {
    /// What activating this card's heart does
    pub fn toggle_action(&self) -> Action {
        Action::ToggleFavorite(self.id)
    }
}

/// Content of the product area: cards, or a single error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductRegion {
    Cards(Vec<ProductCard>),
    Error(String),
}

impl Default for ProductRegion {
    fn default() -> Self {
        ProductRegion::Cards(Vec::new())
    }
}

/// Whatever actually puts pixels (or cells) on screen
///
/// `draw_*` calls replace the whole region; there is no partial patching
/// except for `set_favorite_mark`, which touches a single card.
pub trait Surface {
    fn draw_categories(&mut self, tiles: Vec<CategoryTile>);
    fn draw_products(&mut self, region: ProductRegion);
    fn set_favorite_mark(&mut self, id: ProductId, mark: FavoriteMark);

    /// Non-blocking one-line notice (failed save, etc.)
    fn show_status(&mut self, _message: String) {}
}

/// One tile per category plus a trailing "show all" tile
pub fn render_categories<S: Surface + ?Sized>(surface: &mut S, categories: &[Category]) {
    let mut tiles: Vec<CategoryTile> = categories
        .iter()
        .map(|category| CategoryTile {
            label: label_for(category),
            action: Action::ShowCategory(category.clone()),
        })
        .collect();

    tiles.push(CategoryTile {
        label: show_all_label(),
        action: Action::ShowAll,
    });

    surface.draw_categories(tiles);
}

/// One card per product, hearts reflecting the current favorites
pub fn render_products<S: Surface + ?Sized>(
    surface: &mut S,
    products: &[Product],
    favorites: &FavoriteSet,
    currency_symbol: &str,
) {
    let cards = products
        .iter()
        .map(|product| ProductCard {
            id: product.id,
            image: product.image.clone(),
            title: product.title.clone(),
            category_label: label_for(&product.category).text,
            price_label: format_price(product.price, currency_symbol),
            favorite: FavoriteMark::from_membership(favorites.contains(product.id)),
        })
        .collect();

    surface.draw_products(ProductRegion::Cards(cards));
}

/// Catalog failed: error text in the product area, nothing in the category row
pub fn render_load_error<S: Surface + ?Sized>(surface: &mut S) {
    surface.draw_categories(Vec::new());
    surface.draw_products(ProductRegion::Error(LOAD_ERROR_MESSAGE.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Icon;

    #[derive(Default)]
    struct Canvas {
        tiles: Vec<CategoryTile>,
        region: ProductRegion,
    }

    impl Surface for Canvas {
        fn draw_categories(&mut self, tiles: Vec<CategoryTile>) {
            self.tiles = tiles;
        }

        fn draw_products(&mut self, region: ProductRegion) {
            self.region = region;
        }

        fn set_favorite_mark(&mut self, _id: ProductId, _mark: FavoriteMark) {}
    }

    fn product(id: u64, category: &str, price: f64) -> Product {
        Product {
            id,
            title: format!("Item {}", id),
            description: String::new(),
            price,
            category: category.to_string(),
            image: format!("https://img.example/{}.jpg", id),
        }
    }

    #[test]
    fn test_categories_get_show_all_tile_last() {
        let mut canvas = Canvas::default();
        render_categories(&mut canvas, &["electronics".to_string(), "toys".to_string()]);

        assert_eq!(canvas.tiles.len(), 3);
        assert_eq!(canvas.tiles[0].label.text, "Электроника");
        assert_eq!(canvas.tiles[0].action, Action::ShowCategory("electronics".into()));
        assert_eq!(canvas.tiles[1].label.icon, Icon::Shop);
        assert_eq!(canvas.tiles[2].label.text, "Смотреть все");
        assert_eq!(canvas.tiles[2].action, Action::ShowAll);
    }

    #[test]
    fn test_rendering_twice_replaces_instead_of_appending() {
        let mut canvas = Canvas::default();
        render_categories(&mut canvas, &["electronics".to_string()]);
        render_categories(&mut canvas, &["electronics".to_string()]);
        assert_eq!(canvas.tiles.len(), 2);

        let favorites = FavoriteSet::new();
        render_products(&mut canvas, &[product(1, "electronics", 1.0)], &favorites, "₽");
        render_products(&mut canvas, &[product(1, "electronics", 1.0)], &favorites, "₽");
        assert!(matches!(&canvas.region, ProductRegion::Cards(cards) if cards.len() == 1));
    }

    #[test]
    fn test_product_cards() {
        let mut canvas = Canvas::default();
        let favorites: FavoriteSet = [2].into_iter().collect();
        render_products(
            &mut canvas,
            &[product(1, "jewelery", 1234.5), product(2, "gadgets", 9.99)],
            &favorites,
            "₽",
        );

        let ProductRegion::Cards(cards) = &canvas.region else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].category_label, "Ювелирные изделия");
        assert_eq!(cards[0].price_label, "1\u{a0}234,5 ₽");
        assert_eq!(cards[0].favorite, FavoriteMark::Outline);
        assert_eq!(cards[0].image, "https://img.example/1.jpg");
        assert_eq!(cards[1].category_label, "gadgets");
        assert_eq!(cards[1].favorite, FavoriteMark::Filled);
        assert_eq!(cards[1].toggle_action(), Action::ToggleFavorite(2));
    }

    #[test]
    fn test_load_error() {
        let mut canvas = Canvas::default();
        render_categories(&mut canvas, &["electronics".to_string()]);
        render_load_error(&mut canvas);

        assert!(canvas.tiles.is_empty());
        assert_eq!(canvas.region, ProductRegion::Error(LOAD_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_favorite_mark() {
        assert!(FavoriteMark::from_membership(true).is_filled());
        assert_eq!(FavoriteMark::from_membership(false).symbol(), "♡");
    }
}
