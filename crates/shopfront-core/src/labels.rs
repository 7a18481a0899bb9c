/// Icon shown on a category tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Devices, // 💻
    Diamond, // 💎
    Male,    // 👔
    Female,  // 👗
    Shop,    // 🛍
    All,     // ➕
}

impl Icon {
    /// Stable identifier, the same names the web storefront used for its icon set
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Devices => "devices",
            Icon::Diamond => "diamond",
            Icon::Male => "male",
            Icon::Female => "female",
            Icon::Shop => "shop",
            Icon::All => "all",
        }
    }

    pub fn as_emoji(&self) -> &'static str {
        match self {
            Icon::Devices => "💻",
            Icon::Diamond => "💎",
            Icon::Male => "👔",
            Icon::Female => "👗",
            Icon::Shop => "🛍",
            Icon::All => "➕",
        }
    }
}

/// Display text + icon for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub text: String,
    pub icon: Icon,
}

/// Label for the synthetic tile that clears the category filter
pub const SHOW_ALL_LABEL: &str = "Смотреть все";

/// Shown when the API hands us a category with an empty name
const UNNAMED_CATEGORY: &str = "Без категории";

const KNOWN_CATEGORIES: &[(&str, &str, Icon)] = &[
    ("electronics", "Электроника", Icon::Devices),
    ("jewelery", "Ювелирные изделия", Icon::Diamond),
    ("men's clothing", "Мужская одежда", Icon::Male),
    ("women's clothing", "Женская одежда", Icon::Female),
];

/// Map a category id to its display label.
///
/// Never fails: anything missing from the table comes back as itself with the
/// generic shop icon.
pub fn label_for(category: &str) -> CategoryLabel {
    if let Some((_, text, icon)) = KNOWN_CATEGORIES.iter().find(|(id, _, _)| *id == category) {
        return CategoryLabel {
            text: (*text).to_string(),
            icon: *icon,
        };
    }

    let text = if category.is_empty() {
        UNNAMED_CATEGORY.to_string()
    } else {
        category.to_string()
    };

    CategoryLabel {
        text,
        icon: Icon::Shop,
    }
}

/// Label for the "show all" tile
pub fn show_all_label() -> CategoryLabel {
    CategoryLabel {
        text: SHOW_ALL_LABEL.to_string(),
        icon: Icon::All,
    }
}
