// Action dispatch: routes each Action variant to the right handler.

use std::time::Duration;

use crate::action::Action;
use crate::api::models::CatalogItem;
use crate::app::debounce::DebounceOutcome;
use crate::app::{new_releases, App};
use crate::components::catalog_rows::RowId;
use crate::components::Component;
use crate::opener;
use crate::present;

/// How long a transient error stays on the status line.
const ERROR_DISPLAY: Duration = Duration::from_secs(5);

impl App {
    pub async fn handle_action(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            // Lifecycle
            Action::Quit => {
                self.search.cancel();
                self.running = false;
            }

            // Content loading
            Action::LoadAllContent => self.load_all_content(),
            Action::RowLoaded {
                generation,
                row,
                items,
            } => self.apply_row(generation, row, items),
            Action::RotateHero => self.rotate_hero(),

            // Search
            Action::FocusSearch => {
                self.search_bar.update(&Action::FocusSearch)?;
            }
            Action::SearchInput(raw) => {
                if self.search.input(&raw) == DebounceOutcome::Cleared {
                    // Drop whatever is still in flight for the old text.
                    self.search_id += 1;
                    self.catalog_rows.hide_search_results();
                    self.sync_scroll_state();
                }
            }
            Action::RunSearch { query } => {
                // A timer that fired before the input changed again is stale.
                if query != self.search_bar.input().trim() {
                    tracing::debug!(query = %query, "dropping search for outdated input");
                    return Ok(());
                }
                self.spawn_search(query);
            }
            Action::SearchResults { search_id, items } => {
                if search_id != self.search_id {
                    tracing::debug!(search_id, current = self.search_id, "stale search results");
                    return Ok(());
                }
                if items.is_empty() {
                    self.catalog_rows.hide_search_results();
                } else {
                    self.catalog_rows.show_search_results(items);
                }
                self.sync_scroll_state();
            }

            // Detail modal
            Action::OpenDetail(item) => self.open_detail(item),
            Action::DetailLoaded {
                request_id,
                item: Some(item),
            } => {
                let payload = present::detail(&item, self.catalog.images());
                if !self.detail_modal.apply_details(request_id, payload) {
                    tracing::debug!(request_id, "ignoring details for closed modal");
                }
            }
            Action::DetailLoaded {
                request_id,
                item: None,
            } => self.detail_modal.details_unavailable(request_id),
            Action::TrailerResolved { request_id, url } => {
                if !self.detail_modal.apply_trailer(request_id, url) {
                    tracing::debug!(request_id, "ignoring trailer for closed modal");
                }
            }
            Action::CloseDetail => self.detail_modal.hide(),
            Action::OpenTrailer(url) => {
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = opener::open_url(&url).await {
                        tracing::warn!(error = %e, "could not open trailer");
                        tx.send(Action::ShowError(e.to_string())).ok();
                    }
                });
            }

            // Errors & help
            Action::ShowError(msg) => {
                self.error_message = Some(msg);
                self.cancel_error_timer();
                let tx = self.action_tx.clone();
                self.error_timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(ERROR_DISPLAY).await;
                    tx.send(Action::ClearError).ok();
                }));
            }
            Action::ClearError => {
                self.error_timer = None;
                self.error_message = None;
            }
            Action::ShowHelp => self.show_help = true,
            Action::HideHelp => self.show_help = false,

            // Navigation
            Action::Back => {
                if self.detail_modal.is_visible() {
                    self.detail_modal.hide();
                } else if self.show_help {
                    self.show_help = false;
                } else if self.catalog_rows.is_search_visible() {
                    self.search_bar.input.clear();
                    self.search_bar.blur();
                    self.action_tx.send(Action::SearchInput(String::new()))?;
                }
            }

            // Forward anything unhandled to components
            action => {
                for follow_up in self.catalog_rows.update(&action)? {
                    self.action_tx.send(follow_up)?;
                }
                self.search_bar.update(&action)?;
            }
        }
        Ok(())
    }

    fn apply_row(&mut self, generation: u64, row: RowId, items: Vec<CatalogItem>) {
        if generation != self.load_generation {
            tracing::debug!(generation, current = self.load_generation, %row, "stale row");
            return;
        }
        tracing::debug!(%row, count = items.len(), "row loaded");

        match row {
            RowId::Trending => {
                if !self.hero_seeded && !items.is_empty() {
                    self.hero.reset(&items);
                    self.hero_seeded = true;
                    self.show_hero();
                    self.restart_hero_ticker();
                }
            }
            RowId::Popular => {
                self.catalog_rows
                    .set_items(RowId::NewReleases, new_releases(&items));
            }
            _ => {}
        }
        self.catalog_rows.set_items(row, items);
    }

    fn rotate_hero(&mut self) {
        if self.hero.advance().is_some() {
            self.show_hero();
        }
    }

    fn show_hero(&mut self) {
        if let Some(item) = self.hero.current() {
            let payload = present::hero(item, self.catalog.images());
            self.hero_banner
                .set(payload, self.hero.index(), self.hero.len());
        }
    }

    fn open_detail(&mut self, item: CatalogItem) {
        self.detail_request_id += 1;
        let request_id = self.detail_request_id;
        tracing::info!(id = item.id, kind = ?item.kind, request_id, "opening details");

        let preliminary = present::detail(&item, self.catalog.images());
        self.detail_modal.show(request_id, item.clone(), preliminary);
        self.spawn_detail(request_id, item);
    }
}
