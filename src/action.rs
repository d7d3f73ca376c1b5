// Every user interaction, async result, and internal event is represented as an
// Action variant. The App event loop dispatches these to component handlers.

use crate::api::models::CatalogItem;
use crate::components::catalog_rows::RowId;

/// All events flowing through the app: user actions, async results, and
/// internal signals. The [`App`](crate::app::App) event loop dispatches
/// each variant to the appropriate handler.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,

    /// Start a fresh load of every row. `generation` tags the results.
    LoadAllContent,
    RowLoaded {
        generation: u64,
        row: RowId,
        items: Vec<CatalogItem>,
    },
    RotateHero,

    FocusSearch,
    /// The search input changed; carries the full current text.
    SearchInput(String),
    /// Debounce window elapsed without further typing.
    RunSearch {
        query: String,
    },
    SearchResults {
        search_id: u64,
        items: Vec<CatalogItem>,
    },

    OpenDetail(CatalogItem),
    /// `None` when the lookup failed; the preliminary payload stays up.
    DetailLoaded {
        request_id: u64,
        item: Option<CatalogItem>,
    },
    TrailerResolved {
        request_id: u64,
        url: Option<String>,
    },
    CloseDetail,
    OpenTrailer(String),

    ShowError(String),
    ClearError,
    ShowHelp,
    HideHelp,
    Tick,
}
