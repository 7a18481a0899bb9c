// Interaction controller: user actions in, re-renders out
use crate::view::{self, Action, FavoriteMark, Surface};
use shopfront_cache::KeyValueStore;
use shopfront_core::{
    filter::{by_category, by_search_term},
    AppContext, LoadState,
};
use tracing::{debug, warn};

/// Borrows the session context and a surface for the duration of one event
///
/// There is no remembered "current filter": every action starts again from
/// the full catalog.
pub struct Controller<'a, K: KeyValueStore, S: Surface + ?Sized> {
    ctx: &'a mut AppContext<K>,
    surface: &'a mut S,
}

impl<'a, K: KeyValueStore, S: Surface + ?Sized> Controller<'a, K, S> {
    pub fn new(ctx: &'a mut AppContext<K>, surface: &'a mut S) -> Self {
        Self { ctx, surface }
    }

    /// First paint after the catalog load settles
    pub fn show_catalog(&mut self) {
        match self.ctx.catalog.state() {
            LoadState::Ready => {
                view::render_categories(&mut *self.surface, self.ctx.catalog.all_categories());
                self.render_all();
            }
            LoadState::Failed(reason) => {
                debug!("Showing load error: {}", reason);
                view::render_load_error(&mut *self.surface);
            }
            LoadState::Pending => {}
        }
    }

    pub fn activate(&mut self, action: Action) {
        debug!("Activated {:?}", action);

        // Without a catalog the error message stays; filtering nothing must not hide it
        if matches!(self.ctx.catalog.state(), LoadState::Failed(_))
            && !matches!(action, Action::ToggleFavorite(_))
        {
            view::render_load_error(&mut *self.surface);
            return;
        }

        match action {
            Action::ShowCategory(category) => {
                let products = by_category(self.ctx.catalog.all_products(), &category);
                self.render(&products);
            }
            Action::ShowAll => self.render_all(),
            Action::Search(term) => {
                let products = by_search_term(self.ctx.catalog.all_products(), &term);
                self.render(&products);
            }
            Action::ToggleFavorite(id) => self.toggle_favorite(id),
        }
    }

    fn toggle_favorite(&mut self, id: shopfront_core::ProductId) {
        let now_favorite = match self.ctx.favorites.toggle(id) {
            Ok(now_favorite) => now_favorite,
            Err(e) => {
                warn!("Failed to save favorites: {}", e);
                self.surface
                    .show_status(format!("Не удалось сохранить избранное: {}", e));
                // The flip itself already happened in memory
                self.ctx.favorites.contains(id)
            }
        };

        self.surface
            .set_favorite_mark(id, FavoriteMark::from_membership(now_favorite));
    }

    fn render_all(&mut self) {
        view::render_products(
            &mut *self.surface,
            self.ctx.catalog.all_products(),
            self.ctx.favorites.set(),
            &self.ctx.currency_symbol,
        );
    }

    fn render(&mut self, products: &[shopfront_core::Product]) {
        view::render_products(
            &mut *self.surface,
            products,
            self.ctx.favorites.set(),
            &self.ctx.currency_symbol,
        );
    }
}
