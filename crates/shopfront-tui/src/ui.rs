// UI rendering logic
use crate::{App, FavoriteMark, Focus, InputMode, ProductRegion};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const ACCENT: Color = Color::Red;
const MUTED: Color = Color::DarkGray;
const PRICE: Color = Color::Rgb(99, 102, 241);

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input + button
            Constraint::Length(5), // Category tiles
            Constraint::Min(5),    // Product cards
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_search(frame, app, chunks[1]);
    render_categories(frame, app, chunks[2]);
    render_products(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.cards().len();
    let favorites = app.favorite_count_in_view();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🛍 Shopfront",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("Товаров: {}", count), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(format!("♥ {}", favorites), Style::default().fg(ACCENT)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    let input_style = match app.input_mode {
        InputMode::Searching => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default(),
    };

    let placeholder = app.search_input.is_empty() && app.input_mode == InputMode::Normal;
    let text = if placeholder {
        Span::styled("Поиск товаров... (/)", Style::default().fg(MUTED))
    } else {
        Span::raw(app.search_input.as_str())
    };

    let input = Paragraph::new(Line::from(text)).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(app.input_mode == InputMode::Searching)),
    );
    frame.render_widget(input, parts[0]);

    if app.input_mode == InputMode::Searching {
        let typed = u16::try_from(app.search_input.chars().count()).unwrap_or(u16::MAX);
        let cursor_x = parts[0].x.saturating_add(1).saturating_add(typed);
        frame.set_cursor_position((
            cursor_x.min(parts[0].right().saturating_sub(2)),
            parts[0].y.saturating_add(1),
        ));
    }

    let button_focused = app.focus == Focus::SearchButton && app.input_mode == InputMode::Normal;
    let button = Paragraph::new("Найти")
        .alignment(Alignment::Center)
        .style(if button_focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        })
        .block(Block::default().borders(Borders::ALL).border_style(focus_border(button_focused)));
    frame.render_widget(button, parts[1]);
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Categories && app.input_mode == InputMode::Normal;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Категории (←/→, Enter)")
        .border_style(focus_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.category_tiles.is_empty() {
        return;
    }

    let tiles = app.category_tiles.len() as u32;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..tiles).map(|_| Constraint::Ratio(1, tiles)).collect::<Vec<_>>())
        .split(inner);

    for (idx, (tile, cell)) in app.category_tiles.iter().zip(cells.iter()).enumerate() {
        let selected = focused && idx == app.category_cursor;
        let style = if selected {
            Style::default().bg(Color::Rgb(49, 50, 68)).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let widget = Paragraph::new(vec![
            Line::from(tile.label.icon.as_emoji()),
            Line::from(tile.label.text.as_str()),
        ])
        .alignment(Alignment::Center)
        .style(style);
        frame.render_widget(widget, *cell);
    }
}

fn render_products(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Products && app.input_mode == InputMode::Normal;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Товары (↑/↓, f: избранное)")
        .border_style(focus_border(focused));

    if app.loading {
        let loading = Paragraph::new("Загрузка...")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let cards = match &app.products {
        ProductRegion::Error(message) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(error, area);
            return;
        }
        ProductRegion::Cards(cards) => cards,
    };

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let heart_color = match card.favorite {
                FavoriteMark::Filled => ACCENT,
                FavoriteMark::Outline => MUTED,
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", card.favorite.symbol()),
                        Style::default().fg(heart_color),
                    ),
                    Span::styled(
                        card.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(
                        format!("  Категория: {}", card.category_label),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw("   "),
                    Span::styled(
                        card.price_label.as_str(),
                        Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", card.image),
                    Style::default().fg(MUTED),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(49, 50, 68)))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)))
    } else {
        let hint = match app.input_mode {
            InputMode::Searching => "Enter: найти | Esc: отмена | Tab: к кнопке",
            InputMode::Normal => "/: поиск | Tab: фокус | a: все товары | f: избранное | q: выход",
        };
        Line::from(Span::styled(hint, Style::default().fg(MUTED)))
    };

    frame.render_widget(Paragraph::new(line), area);
}
