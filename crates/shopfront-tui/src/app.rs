// TUI application state and key handling
use crate::view::{Action, CategoryTile, FavoriteMark, ProductCard, ProductRegion, Surface};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use shopfront_core::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Moving around tiles and cards
    Searching, // Typing in search box
}

/// Which part of the screen arrow keys and Enter act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Products,
    SearchButton,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Products,
            Focus::Products => Focus::SearchButton,
            Focus::SearchButton => Focus::Categories,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub loading: bool,
    pub input_mode: InputMode,
    pub focus: Focus,
    pub search_input: String,
    pub category_tiles: Vec<CategoryTile>,
    pub category_cursor: usize,
    pub products: ProductRegion,
    pub list_state: ListState,
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            loading: true,
            input_mode: InputMode::Normal,
            focus: Focus::Categories,
            search_input: String::new(),
            category_tiles: Vec::new(),
            category_cursor: 0,
            products: ProductRegion::default(),
            list_state: ListState::default(),
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn cards(&self) -> &[ProductCard] {
        match &self.products {
            ProductRegion::Cards(cards) => cards,
            ProductRegion::Error(_) => &[],
        }
    }

    pub fn selected_card(&self) -> Option<&ProductCard> {
        self.list_state.selected().and_then(|i| self.cards().get(i))
    }

    pub fn selected_tile(&self) -> Option<&CategoryTile> {
        self.category_tiles.get(self.category_cursor)
    }

    pub fn favorite_count_in_view(&self) -> usize {
        self.cards().iter().filter(|c| c.favorite.is_filled()).count()
    }

    fn next_card(&mut self) {
        let len = self.cards().len();
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(next));
    }

    fn previous_card(&mut self) {
        if let Some(i) = self.list_state.selected() {
            self.list_state.select(Some(i.saturating_sub(1)));
        }
    }

    fn next_tile(&mut self) {
        if !self.category_tiles.is_empty() {
            self.category_cursor = (self.category_cursor + 1).min(self.category_tiles.len() - 1);
        }
    }

    fn previous_tile(&mut self) {
        self.category_cursor = self.category_cursor.saturating_sub(1);
    }

    fn submit_search(&mut self) -> Action {
        self.input_mode = InputMode::Normal;
        self.focus = Focus::Products;
        Action::Search(self.search_input.clone())
    }

    /// Translate a key press into an activation, if it is one
    ///
    /// Cursor movement and typing are handled here; anything that needs the
    /// catalog comes back as an `Action` for the controller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return None;
        }

        self.status_message = None;

        match self.input_mode {
            InputMode::Searching => match key.code {
                KeyCode::Enter => Some(self.submit_search()),
                KeyCode::Char(c) => {
                    self.search_input.push(c);
                    None
                }
                KeyCode::Backspace => {
                    self.search_input.pop();
                    None
                }
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    None
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Normal;
                    self.focus = Focus::SearchButton;
                    None
                }
                _ => None,
            },
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => {
                    self.quit();
                    None
                }
                KeyCode::Char('/') => {
                    self.input_mode = InputMode::Searching;
                    None
                }
                KeyCode::Tab => {
                    self.focus = self.focus.next();
                    None
                }
                KeyCode::Char('a') => Some(Action::ShowAll),
                KeyCode::Left | KeyCode::Char('h') if self.focus == Focus::Categories => {
                    self.previous_tile();
                    None
                }
                KeyCode::Right | KeyCode::Char('l') if self.focus == Focus::Categories => {
                    self.next_tile();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.focus = Focus::Products;
                    self.next_card();
                    None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.previous_card();
                    None
                }
                KeyCode::Char('f') | KeyCode::Char(' ') => {
                    self.selected_card().map(ProductCard::toggle_action)
                }
                KeyCode::Enter => match self.focus {
                    Focus::Categories => self.selected_tile().map(|t| t.action.clone()),
                    Focus::Products => self.selected_card().map(ProductCard::toggle_action),
                    Focus::SearchButton => Some(self.submit_search()),
                },
                _ => None,
            },
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for App {
    fn draw_categories(&mut self, tiles: Vec<CategoryTile>) {
        self.category_tiles = tiles;
        self.category_cursor = 0;
    }

    fn draw_products(&mut self, region: ProductRegion) {
        self.products = region;
        let selected = if self.cards().is_empty() { None } else { Some(0) };
        self.list_state.select(selected);
    }

    fn set_favorite_mark(&mut self, id: ProductId, mark: FavoriteMark) {
        if let ProductRegion::Cards(cards) = &mut self.products {
            for card in cards.iter_mut().filter(|c| c.id == id) {
                card.favorite = mark;
            }
        }
    }

    fn show_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::labels::{label_for, show_all_label};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn card(id: u64) -> ProductCard {
        ProductCard {
            id,
            image: String::new(),
            title: format!("Item {}", id),
            category_label: "Электроника".into(),
            price_label: "1 ₽".into(),
            favorite: FavoriteMark::Outline,
        }
    }

    fn app_with_content() -> App {
        let mut app = App::new();
        app.draw_categories(vec![
            CategoryTile {
                label: label_for("electronics"),
                action: Action::ShowCategory("electronics".into()),
            },
            CategoryTile {
                label: show_all_label(),
                action: Action::ShowAll,
            },
        ]);
        app.draw_products(ProductRegion::Cards(vec![card(1), card(2)]));
        app
    }

    #[test]
    fn test_typing_then_enter_submits_search() {
        let mut app = app_with_content();
        assert_eq!(app.handle_key(key(KeyCode::Char('/'))), None);
        for c in "desk".chars() {
            assert_eq!(app.handle_key(key(KeyCode::Char(c))), None);
        }
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Char('k')));

        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Some(Action::Search("desk".into()))
        );
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_search_button_submits_current_input() {
        let mut app = app_with_content();
        app.search_input = "lamp".into();
        app.focus = Focus::Products;
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::SearchButton);
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Some(Action::Search("lamp".into()))
        );
    }

    #[test]
    fn test_enter_on_tiles() {
        let mut app = app_with_content();
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Some(Action::ShowCategory("electronics".into()))
        );
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Some(Action::ShowAll));
    }

    #[test]
    fn test_favorite_key_targets_selected_card() {
        let mut app = app_with_content();
        app.handle_key(key(KeyCode::Down));
        assert_eq!(
            app.handle_key(key(KeyCode::Char('f'))),
            Some(Action::ToggleFavorite(2))
        );
    }

    #[test]
    fn test_set_favorite_mark_touches_only_that_card() {
        let mut app = app_with_content();
        app.set_favorite_mark(2, FavoriteMark::Filled);

        assert_eq!(app.cards()[0].favorite, FavoriteMark::Outline);
        assert_eq!(app.cards()[1].favorite, FavoriteMark::Filled);
        assert_eq!(app.favorite_count_in_view(), 1);
    }

    #[test]
    fn test_error_region_has_no_cards() {
        let mut app = app_with_content();
        app.draw_products(ProductRegion::Error("nope".into()));
        assert!(app.cards().is_empty());
        assert_eq!(app.handle_key(key(KeyCode::Char('f'))), None);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
