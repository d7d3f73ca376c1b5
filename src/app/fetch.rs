// Data fetching: spawns async tasks that load rows, search results and
// modal details, reporting back through the action channel.

use std::future::Future;

use crate::action::Action;
use crate::api::models::CatalogItem;
use crate::api::tmdb::CatalogClient;
use crate::app::App;
use crate::components::catalog_rows::RowId;

/// Rows fed by their own catalog query at load time. `NewReleases` is
/// derived from `Popular` and has no query of its own.
const QUERIED_ROWS: [RowId; 6] = [
    RowId::Trending,
    RowId::Originals,
    RowId::Popular,
    RowId::TopRated,
    RowId::TvShows,
    RowId::ContinueWatching,
];

async fn fetch_row(client: CatalogClient, row: RowId) -> Vec<CatalogItem> {
    match row {
        RowId::Trending => client.trending().await,
        RowId::Originals => client.originals().await,
        RowId::Popular => client.popular_movies().await,
        RowId::TopRated => client.top_rated().await,
        RowId::TvShows => client.popular_shows().await,
        RowId::ContinueWatching => client.now_playing().await,
        RowId::SearchResults | RowId::NewReleases => Vec::new(),
    }
}

impl App {
    /// Spawn a background task whose output is turned into an action.
    fn spawn_fetch<Fut, T>(&self, fut: Fut, on_done: impl FnOnce(T) -> Action + Send + 'static)
    where
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            tx.send(on_done(fut.await)).ok();
        });
    }

    /// Skeletons everywhere, then all six queries at once. Each row fills in
    /// as its own query settles.
    pub(super) fn load_all_content(&mut self) {
        self.load_generation += 1;
        self.hero_seeded = false;
        let generation = self.load_generation;
        tracing::info!(generation, "loading all rows");

        self.catalog_rows.show_all_skeletons();
        for row in QUERIED_ROWS {
            self.spawn_row(generation, row);
        }
    }

    fn spawn_row(&self, generation: u64, row: RowId) {
        let client = self.catalog.clone();
        self.spawn_fetch(fetch_row(client, row), move |items| Action::RowLoaded {
            generation,
            row,
            items,
        });
    }

    pub(super) fn spawn_search(&mut self, query: String) {
        self.search_id += 1;
        let search_id = self.search_id;
        tracing::debug!(search_id, query = %query, "searching");

        let client = self.catalog.clone();
        self.spawn_fetch(
            async move { client.search(&query).await },
            move |items| Action::SearchResults { search_id, items },
        );
    }

    /// Details first, then the trailer, each reported as soon as it lands.
    pub(super) fn spawn_detail(&self, request_id: u64, item: CatalogItem) {
        let tx = self.action_tx.clone();
        let client = self.catalog.clone();
        tokio::spawn(async move {
            let detailed = client.details(item.id, item.kind).await;
            tx.send(Action::DetailLoaded {
                request_id,
                item: detailed,
            })
            .ok();
            let url = client.trailer_url(item.id, item.kind).await;
            tx.send(Action::TrailerResolved { request_id, url }).ok();
        });
    }
}
