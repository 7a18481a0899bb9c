// Terminal UI implementation using ratatui
// The storefront window, minus the browser

pub mod app;
pub mod controller;
pub mod runner;
pub mod ui;
pub mod view;

pub use app::{App, Focus, InputMode};
pub use controller::Controller;
pub use runner::run_tui;
pub use view::{Action, CategoryTile, FavoriteMark, ProductCard, ProductRegion, Surface};
