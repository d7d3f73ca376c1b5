// Layout and rendering: stacks nav bar, hero banner, rows and status line,
// then composites overlays (detail modal, help).

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::components::catalog_rows::CatalogRows;
use crate::components::centered_overlay;
use crate::components::detail_modal::DetailModal;
use crate::components::hero_banner::HeroBanner;
use crate::components::nav_bar::NavBar;
use crate::components::search_bar::SearchBar;
use crate::components::Component;
use crate::theme::Theme;

const NAV_HEIGHT: u16 = 1;
const HERO_HEIGHT: u16 = 9;
const SEARCH_WIDTH: u16 = 34;

pub struct DrawState<'a> {
    pub nav_bar: &'a NavBar,
    pub search_bar: &'a SearchBar,
    pub hero_banner: &'a HeroBanner,
    pub catalog_rows: &'a CatalogRows,
    pub detail_modal: &'a DetailModal,
    pub error_message: &'a Option<String>,
    pub show_help: bool,
    pub theme: &'a Theme,
}

/// Where each panel lands for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub nav: Rect,
    pub search: Rect,
    pub hero: Rect,
    pub rows: Rect,
    pub status: Rect,
}

/// The hero collapses once the page is scrolled, giving the rows its space.
pub fn layout(area: Rect, scrolled: bool) -> ScreenLayout {
    let hero_height = if scrolled { 0 } else { HERO_HEIGHT };
    let outer = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Length(hero_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    let top = Layout::horizontal([Constraint::Min(0), Constraint::Length(SEARCH_WIDTH)])
        .split(outer[0]);

    ScreenLayout {
        nav: top[0],
        search: top[1],
        hero: outer[1],
        rows: outer[2],
        status: outer[3],
    }
}

pub fn draw(frame: &mut Frame, state: &DrawState) {
    let theme = state.theme;
    let area = frame.area();
    let screen = layout(area, state.nav_bar.is_scrolled());

    state.nav_bar.draw(frame, screen.nav, theme);
    state.search_bar.draw(frame, screen.search, theme);
    state.hero_banner.draw(frame, screen.hero, theme);
    state.catalog_rows.draw(frame, screen.rows, theme);
    draw_status(frame, screen.status, state);

    if state.detail_modal.is_visible() {
        state.detail_modal.draw(frame, area, theme);
    }

    if state.show_help {
        draw_help_overlay(frame, theme);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, state: &DrawState) {
    let theme = state.theme;
    let line = if let Some(ref msg) = state.error_message {
        Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(theme.error)),
            Span::styled(msg.as_str(), Style::default().fg(theme.accent)),
        ])
    } else {
        Line::from(Span::styled(
            " ↑↓ rows · ←→ titles · Enter details · / search · r reload · ? help · q quit",
            Style::default().fg(theme.text_dim),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help_overlay(frame: &mut Frame, theme: &Theme) {
    let overlay_area = centered_overlay(frame.area(), 52, 20);
    frame.render_widget(Clear, overlay_area);

    let keybindings = [
        ("q", "Quit"),
        ("j / Down", "Next row"),
        ("k / Up", "Previous row"),
        ("l / Right", "Next title"),
        ("h / Left", "Previous title"),
        ("Enter", "Open details"),
        ("p", "Play featured title"),
        ("i", "More info on featured title"),
        ("/", "Search"),
        ("Escape", "Clear search / close details"),
        ("t", "Play trailer (in details)"),
        ("x", "Close details"),
        ("r", "Reload all rows"),
        ("?", "Toggle this help overlay"),
    ];

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Keybindings ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, desc) in &keybindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", key), Style::default().fg(theme.accent)),
            Span::raw(*desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(theme.text_dim),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
