// Central coordinator: owns all components, the catalog client, and browse state.
// Runs the event loop (key/mouse → Action → handle_action → component updates → draw).

mod actions;
pub mod debounce;
mod fetch;
pub mod hero;
mod input;

use std::time::Duration;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::action::Action;
use crate::api::models::CatalogItem;
use crate::api::tmdb::CatalogClient;
use crate::components::catalog_rows::CatalogRows;
use crate::components::detail_modal::DetailModal;
use crate::components::hero_banner::HeroBanner;
use crate::components::nav_bar::NavBar;
use crate::components::search_bar::SearchBar;
use crate::components::Component;
use crate::config::Config;
use crate::theme::Theme;
use crate::tui::{Tui, TuiEvent};
use crate::ui;

use self::debounce::SearchDebounce;
use self::hero::HeroRotation;

/// Which slice of the popular list doubles as the "New Releases" row.
pub const NEW_RELEASES_START: usize = 10;
pub const NEW_RELEASES_END: usize = 20;

/// `popular[10..20]`, or whatever part of it exists.
pub fn new_releases(popular: &[CatalogItem]) -> Vec<CatalogItem> {
    let start = NEW_RELEASES_START.min(popular.len());
    let end = NEW_RELEASES_END.min(popular.len());
    popular[start..end].to_vec()
}

/// Top-level coordinator: owns every component, the catalog client and the
/// browse state. Runs the main event loop (input → action → update → draw).
pub struct App {
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    // Components
    pub nav_bar: NavBar,
    pub search_bar: SearchBar,
    pub hero_banner: HeroBanner,
    pub catalog_rows: CatalogRows,
    pub detail_modal: DetailModal,

    // State
    pub(crate) catalog: CatalogClient,
    pub(crate) config: Config,
    pub(crate) theme: Theme,
    pub hero: HeroRotation,
    hero_ticker: Option<JoinHandle<()>>,
    pub search: SearchDebounce,
    /// Bumped per search; results tagged with an older id are dropped.
    pub search_id: u64,
    /// Bumped per full load; rows tagged with an older generation are dropped.
    pub load_generation: u64,
    /// Whether trending has seeded the hero for the current generation.
    pub(crate) hero_seeded: bool,
    /// Bumped per modal open; detail responses for older opens are dropped.
    pub detail_request_id: u64,
    pub show_help: bool,
    pub error_message: Option<String>,
    /// Clears `error_message`; replaced whenever a newer error is shown.
    error_timer: Option<JoinHandle<()>>,
    /// Terminal area from the last draw, for mouse hit-testing.
    pub viewport: Rect,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let catalog = CatalogClient::new(&config.catalog)?;

        let mut nav_bar = NavBar::new();
        let mut search_bar = SearchBar::new();
        let mut hero_banner = HeroBanner::new();
        let mut catalog_rows =
            CatalogRows::new(catalog.images().clone(), config.browse.skeleton_count);
        let mut detail_modal = DetailModal::new();

        let components: [&mut dyn Component; 5] = [
            &mut nav_bar,
            &mut search_bar,
            &mut hero_banner,
            &mut catalog_rows,
            &mut detail_modal,
        ];
        for component in components {
            component.register_action_handler(action_tx.clone());
        }

        let search = SearchDebounce::new(
            Duration::from_millis(config.browse.search_debounce_ms),
            action_tx.clone(),
        );

        Ok(Self {
            running: true,
            action_tx,
            action_rx,
            nav_bar,
            search_bar,
            hero_banner,
            catalog_rows,
            detail_modal,
            catalog,
            theme: Theme::from_name(&config.general.theme),
            hero: HeroRotation::new(config.browse.hero_items),
            hero_ticker: None,
            config,
            search,
            search_id: 0,
            load_generation: 0,
            hero_seeded: false,
            detail_request_id: 0,
            show_help: false,
            error_message: None,
            error_timer: None,
            viewport: Rect::default(),
        })
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new(self.config.general.frame_rate)?;
        tui.enter()?;

        self.action_tx.send(Action::LoadAllContent)?;

        while self.running {
            let state = ui::DrawState {
                nav_bar: &self.nav_bar,
                search_bar: &self.search_bar,
                hero_banner: &self.hero_banner,
                catalog_rows: &self.catalog_rows,
                detail_modal: &self.detail_modal,
                error_message: &self.error_message,
                show_help: self.show_help,
                theme: &self.theme,
            };
            self.viewport = tui.draw(|frame| ui::draw(frame, &state))?;

            tokio::select! {
                Some(event) = tui.event_rx.recv() => {
                    match event {
                        TuiEvent::Key(key) => self.handle_key(key)?,
                        TuiEvent::Mouse(mouse) => self.handle_mouse(mouse)?,
                        TuiEvent::Resize => {} // ratatui redraws at correct size automatically
                        TuiEvent::Tick => { self.action_tx.send(Action::Tick)?; }
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await?;
                }
            }
        }

        self.stop_hero_ticker();
        self.cancel_error_timer();
        self.search.cancel();
        tui.exit()?;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Wait for the next queued action and handle it. Returns `false` once
    /// the channel has closed.
    pub async fn process_next_action(&mut self) -> anyhow::Result<bool> {
        match self.action_rx.recv().await {
            Some(action) => {
                self.handle_action(action).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Handle everything already queued, without waiting for more.
    pub async fn flush_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            let _ = self.handle_action(action).await;
        }
    }

    pub(crate) fn restart_hero_ticker(&mut self) {
        self.stop_hero_ticker();
        let period = Duration::from_secs(self.config.browse.hero_rotation_secs.max(1));
        self.hero_ticker = Some(hero::spawn_ticker(self.action_tx.clone(), period));
    }

    fn stop_hero_ticker(&mut self) {
        if let Some(handle) = self.hero_ticker.take() {
            handle.abort();
        }
    }

    pub(crate) fn cancel_error_timer(&mut self) {
        if let Some(handle) = self.error_timer.take() {
            handle.abort();
        }
    }

    /// Keep the nav bar's solid style in step with row focus.
    pub(crate) fn sync_scroll_state(&mut self) {
        self.nav_bar.set_scrolled(self.catalog_rows.is_scrolled());
    }
}
