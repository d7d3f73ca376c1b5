// Component behavior in isolation (search bar, rows, detail modal) plus
// full-screen rendering into a test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tokio::sync::mpsc;

use termflix::action::Action;
use termflix::api::images::ImageUrls;
use termflix::api::models::{CatalogItem, MediaKind};
use termflix::components::catalog_rows::{CatalogRows, RowId};
use termflix::components::detail_modal::DetailModal;
use termflix::components::hero_banner::HeroBanner;
use termflix::components::nav_bar::NavBar;
use termflix::components::search_bar::SearchBar;
use termflix::components::{centered_overlay, Component};
use termflix::opener;
use termflix::present;
use termflix::theme::Theme;
use termflix::ui::{self, DrawState};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn movie(id: u64, title: &str) -> CatalogItem {
    CatalogItem {
        title: Some(title.to_string()),
        ..CatalogItem::new(id, MediaKind::Movie)
    }
}

fn rows() -> CatalogRows {
    CatalogRows::new(ImageUrls::default(), 4)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<Action>) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Ok(action) = rx.try_recv() {
        actions.push(action);
    }
    actions
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

// ── Search bar ───────────────────────────────────────────────────────────────

#[test]
fn test_search_bar_ignores_keys_until_focused() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut bar = SearchBar::new();
    bar.register_action_handler(tx);

    assert!(!bar.handle_key_event(key(KeyCode::Char('a'))).unwrap());
    assert!(drain(&mut rx).is_empty());

    bar.update(&Action::FocusSearch).unwrap();
    assert!(bar.handle_key_event(key(KeyCode::Char('a'))).unwrap());
    assert!(bar.handle_key_event(key(KeyCode::Char('b'))).unwrap());
    assert_eq!(bar.input(), "ab");

    let inputs: Vec<String> = drain(&mut rx)
        .into_iter()
        .filter_map(|a| match a {
            Action::SearchInput(text) => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(inputs, vec!["a".to_string(), "ab".to_string()]);
}

#[test]
fn test_search_bar_backspace_and_escape() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut bar = SearchBar::new();
    bar.register_action_handler(tx);
    bar.update(&Action::FocusSearch).unwrap();

    bar.handle_key_event(key(KeyCode::Char('x'))).unwrap();
    bar.handle_key_event(key(KeyCode::Backspace)).unwrap();
    assert_eq!(bar.input(), "");
    // Backspace on an empty box reports nothing.
    bar.handle_key_event(key(KeyCode::Backspace)).unwrap();
    assert_eq!(drain(&mut rx).len(), 2);

    bar.handle_key_event(key(KeyCode::Char('y'))).unwrap();
    bar.handle_key_event(key(KeyCode::Esc)).unwrap();
    assert!(!bar.is_focused());
    assert_eq!(bar.input(), "");
    assert!(matches!(
        drain(&mut rx).last(),
        Some(Action::SearchInput(text)) if text.is_empty()
    ));
}

#[test]
fn test_search_bar_enter_blurs_but_keeps_text() {
    let mut bar = SearchBar::new();
    bar.update(&Action::FocusSearch).unwrap();
    bar.handle_key_event(key(KeyCode::Char('z'))).unwrap();
    bar.handle_key_event(key(KeyCode::Enter)).unwrap();
    assert!(!bar.is_focused());
    assert_eq!(bar.input(), "z");
}

#[test]
fn test_search_bar_lets_arrows_through() {
    let mut bar = SearchBar::new();
    bar.update(&Action::FocusSearch).unwrap();
    assert!(!bar.handle_key_event(key(KeyCode::Down)).unwrap());
}

// ── Catalog rows ─────────────────────────────────────────────────────────────

#[test]
fn test_rows_start_without_search_results() {
    let rows = rows();
    let visible: Vec<RowId> = rows.visible_rows().iter().map(|r| r.id).collect();
    assert_eq!(
        visible,
        vec![
            RowId::Trending,
            RowId::Originals,
            RowId::Popular,
            RowId::TopRated,
            RowId::TvShows,
            RowId::ContinueWatching,
            RowId::NewReleases,
        ]
    );
}

#[test]
fn test_row_titles() {
    assert_eq!(RowId::Trending.to_string(), "Trending Now");
    assert_eq!(RowId::NewReleases.to_string(), "New Releases");
}

#[test]
fn test_skeletons_then_items() {
    let mut rows = rows();
    rows.show_all_skeletons();
    let trending = rows.row(RowId::Trending).unwrap();
    assert!(trending.is_loading());
    assert!(trending.cards().is_empty());
    assert!(!rows.row(RowId::SearchResults).unwrap().is_loading());

    rows.set_items(RowId::Trending, vec![movie(1, "One"), movie(2, "Two")]);
    let trending = rows.row(RowId::Trending).unwrap();
    assert!(!trending.is_loading());
    assert_eq!(trending.cards()[1].payload.title, "Two");
    // Siblings are untouched.
    assert!(rows.row(RowId::Popular).unwrap().is_loading());
}

#[test]
fn test_card_selection_clamps() {
    let mut rows = rows();
    rows.set_items(RowId::Trending, vec![movie(1, "One"), movie(2, "Two")]);
    rows.prev_card();
    assert_eq!(rows.selected_item().map(|i| i.id), Some(1));
    rows.next_card();
    rows.next_card();
    rows.next_card();
    assert_eq!(rows.selected_item().map(|i| i.id), Some(2));
}

#[test]
fn test_row_focus_clamps() {
    let mut rows = rows();
    rows.prev_row();
    assert_eq!(rows.focused_index(), 0);
    rows.scroll(100);
    assert_eq!(rows.focused_index(), 6);
    assert!(rows.is_scrolled());
}

#[test]
fn test_search_results_insert_on_top_and_hide() {
    let mut rows = rows();
    rows.next_row();
    rows.show_search_results(vec![movie(9, "Found")]);
    assert!(rows.is_search_visible());
    assert_eq!(rows.focused_row().map(|r| r.id), Some(RowId::SearchResults));
    assert_eq!(rows.selected_item().map(|i| i.id), Some(9));

    rows.hide_search_results();
    assert!(!rows.is_search_visible());
    assert_eq!(rows.focused_row().map(|r| r.id), Some(RowId::Trending));
    assert!(rows.cards(RowId::SearchResults).is_empty());
}

#[test]
fn test_enter_sends_open_detail() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut rows = rows();
    rows.register_action_handler(tx);
    rows.set_items(RowId::Trending, vec![movie(5, "Five")]);

    assert!(rows.handle_key_event(key(KeyCode::Enter)).unwrap());
    match drain(&mut rx).as_slice() {
        [Action::OpenDetail(item)] => assert_eq!(item.id, 5),
        other => panic!("expected one OpenDetail, got {:?}", other),
    }
}

#[test]
fn test_enter_on_loading_row_sends_nothing() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut rows = rows();
    rows.register_action_handler(tx);
    rows.show_all_skeletons();

    rows.handle_key_event(key(KeyCode::Enter)).unwrap();
    assert!(drain(&mut rx).is_empty());
}

// ── Detail modal ─────────────────────────────────────────────────────────────

#[test]
fn test_modal_trailer_key_only_with_trailer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut modal = DetailModal::new();
    modal.register_action_handler(tx);

    let item = movie(1, "One");
    let preliminary = present::detail(&item, &ImageUrls::default());
    modal.show(1, item, preliminary);

    assert!(modal.handle_key_event(key(KeyCode::Char('t'))).unwrap());
    assert!(drain(&mut rx).is_empty());

    assert!(modal.apply_trailer(1, Some("https://www.youtube.com/watch?v=k".to_string())));
    modal.handle_key_event(key(KeyCode::Char('t'))).unwrap();
    match drain(&mut rx).as_slice() {
        [Action::OpenTrailer(url)] => assert_eq!(url, "https://www.youtube.com/watch?v=k"),
        other => panic!("expected OpenTrailer, got {:?}", other),
    }
}

#[test]
fn test_modal_details_keep_resolved_trailer() {
    let mut modal = DetailModal::new();
    let item = movie(1, "One");
    let images = ImageUrls::default();
    modal.show(3, item.clone(), present::detail(&item, &images));

    modal.apply_trailer(3, Some("https://www.youtube.com/watch?v=first".to_string()));
    let mut full = item.clone();
    full.runtime = Some(90);
    assert!(modal.apply_details(3, present::detail(&full, &images)));

    let payload = modal.payload().unwrap();
    assert_eq!(payload.runtime, "90 min");
    assert!(payload.has_trailer());
}

#[test]
fn test_modal_ignores_other_requests() {
    let mut modal = DetailModal::new();
    let item = movie(1, "One");
    let images = ImageUrls::default();
    modal.show(2, item.clone(), present::detail(&item, &images));

    assert!(!modal.apply_details(1, present::detail(&movie(1, "Old"), &images)));
    assert!(!modal.apply_trailer(1, None));
    assert!(modal.is_resolving_trailer());

    modal.hide();
    assert!(!modal.apply_trailer(2, None));
}

#[test]
fn test_hidden_modal_passes_keys_through() {
    let mut modal = DetailModal::new();
    assert!(!modal.handle_key_event(key(KeyCode::Esc)).unwrap());
}

#[test]
fn test_overlay_is_centered_and_clamped() {
    let area = Rect::new(0, 0, 100, 40);
    assert_eq!(DetailModal::overlay_area(area), Rect::new(12, 11, 76, 18));
    let tiny = Rect::new(0, 0, 20, 10);
    assert_eq!(centered_overlay(tiny, 76, 18), tiny);
}

// ── Layout & rendering ───────────────────────────────────────────────────────

#[test]
fn test_layout_collapses_hero_when_scrolled() {
    let area = Rect::new(0, 0, 100, 40);
    let top = ui::layout(area, false);
    assert_eq!(top.nav.height, 1);
    assert_eq!(top.hero.height, 9);
    assert_eq!(top.search.width, 34);
    assert_eq!(top.status.y, 39);

    let scrolled = ui::layout(area, true);
    assert_eq!(scrolled.hero.height, 0);
    assert!(scrolled.rows.height > top.rows.height);
}

#[test]
fn test_full_screen_render() {
    let mut nav_bar = NavBar::new();
    nav_bar.set_scrolled(false);
    let search_bar = SearchBar::new();
    let mut hero_banner = HeroBanner::new();
    let mut catalog_rows = rows();
    let mut detail_modal = DetailModal::new();
    let theme = Theme::dark();
    let images = ImageUrls::default();

    let featured = movie(1, "Featured Film");
    hero_banner.set(present::hero(&featured, &images), 0, 5);
    catalog_rows.show_all_skeletons();
    catalog_rows.set_items(RowId::Trending, vec![movie(2, "Card Title")]);
    detail_modal.show(1, featured.clone(), present::detail(&featured, &images));

    let error = Some("no URL opener found".to_string());
    let state = DrawState {
        nav_bar: &nav_bar,
        search_bar: &search_bar,
        hero_banner: &hero_banner,
        catalog_rows: &catalog_rows,
        detail_modal: &detail_modal,
        error_message: &error,
        show_help: false,
        theme: &theme,
    };

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| ui::draw(frame, &state)).unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains("TERMFLIX"));
    assert!(text.contains("FEATURED FILM"));
    assert!(text.contains(present::MATCH_BADGE));
    assert!(text.contains("Trending Now"));
    assert!(text.contains("no URL opener found"));
    assert!(text.contains("Looking for a trailer"));
}

#[test]
fn test_help_overlay_renders() {
    let nav_bar = NavBar::new();
    let search_bar = SearchBar::new();
    let hero_banner = HeroBanner::new();
    let catalog_rows = rows();
    let detail_modal = DetailModal::new();
    let theme = Theme::light();

    let state = DrawState {
        nav_bar: &nav_bar,
        search_bar: &search_bar,
        hero_banner: &hero_banner,
        catalog_rows: &catalog_rows,
        detail_modal: &detail_modal,
        error_message: &None,
        show_help: true,
        theme: &theme,
    };

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::draw(frame, &state)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Keybindings"));
    assert!(text.contains("Reload all rows"));
}

// ── Opener ───────────────────────────────────────────────────────────────────

#[test]
fn test_only_web_urls_are_opened() {
    assert!(opener::is_web_url("https://www.youtube.com/watch?v=abc123"));
    assert!(opener::is_web_url("http://example.org"));
    assert!(!opener::is_web_url("file:///etc/passwd"));
    assert!(!opener::is_web_url("javascript:alert(1)"));
}

#[tokio::test]
async fn test_open_url_rejects_non_web_url() {
    assert!(opener::open_url("file:///etc/passwd").await.is_err());
}
