use std::{sync::Arc, time::Duration};

use shared::{
    domain::{Artwork, ArtworkId},
    error::FetchError,
    protocol::{ArtworkPage, PAGE_SIZE},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info};

pub mod fetcher;
pub mod selection;

pub use fetcher::{ArticFetcher, PageFetcher, DEFAULT_BASE_URL};
pub use selection::SelectionAccumulator;

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Upper bound on a single page fetch. Elapsing counts as a network
    /// failure for that fetch.
    pub fetch_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Events published toward the rendering side.
#[derive(Debug, Clone)]
pub enum TableEvent {
    /// A navigation finished and the table now shows this page.
    PageLoaded {
        page_index: u32,
        items: Vec<Artwork>,
    },
    /// The selection set changed, by accumulation, submit, or a manual
    /// checkbox edit.
    SelectionChanged { selected: Vec<ArtworkId> },
}

/// Point-in-time copy of everything a renderer needs.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    pub page_index: u32,
    pub loading: bool,
    pub items: Vec<Artwork>,
    pub total: u64,
    pub selected: Vec<ArtworkId>,
    pub target_text: String,
}

impl TableSnapshot {
    /// Offset of the first visible row within the whole catalog, as a
    /// paginator reports it.
    pub fn first_row_offset(&self) -> u64 {
        u64::from(self.page_index) * PAGE_SIZE as u64
    }
}

struct TableState {
    page_index: u32,
    loading: bool,
    items: Vec<Artwork>,
    total: u64,
    // Bumped on every navigation; a fetch completion whose generation no
    // longer matches belongs to an overtaken navigation and is dropped.
    generation: u64,
    selection: SelectionAccumulator,
    last_error: Option<FetchError>,
}

impl TableState {
    fn new() -> Self {
        Self {
            page_index: 0,
            loading: false,
            items: Vec::new(),
            total: 0,
            generation: 0,
            selection: SelectionAccumulator::new(),
            last_error: None,
        }
    }
}

/// Headless session behind the artworks table. Owns the current page,
/// the server-reported total and the selection; a renderer observes it
/// through [`TableSession::subscribe_events`] and
/// [`TableSession::snapshot`].
pub struct TableSession {
    fetcher: Arc<dyn PageFetcher>,
    config: SessionConfig,
    inner: Mutex<TableState>,
    events: broadcast::Sender<TableEvent>,
}

impl TableSession {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Arc<Self> {
        Self::with_config(fetcher, SessionConfig::default())
    }

    pub fn with_config(fetcher: Arc<dyn PageFetcher>, config: SessionConfig) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            fetcher,
            config,
            inner: Mutex::new(TableState::new()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<TableEvent> {
        self.events.subscribe()
    }

    /// Initial load. The table always opens on page 0.
    pub async fn start(&self) {
        self.goto_page(0).await;
    }

    /// Navigates to `page_index` and fetches it. Failures are logged and
    /// recorded, never surfaced as an event; the rows and selection from
    /// before the call stay visible. When navigations race, the latest
    /// call wins and earlier completions are dropped.
    pub async fn goto_page(&self, page_index: u32) {
        let generation = {
            let mut guard = self.inner.lock().await;
            guard.page_index = page_index;
            guard.loading = true;
            guard.generation += 1;
            guard.generation
        };

        let result = match tokio::time::timeout(
            self.config.fetch_timeout,
            self.fetcher.fetch_page(page_index),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(FetchError::Network(format!(
                "page fetch timed out after {:?}",
                self.config.fetch_timeout
            ))),
        };

        self.complete_fetch(generation, page_index, result).await;
    }

    /// Applies a fetch completion if its generation is still current.
    /// Stale completions must not touch rows, total, selection or the
    /// loading flag.
    async fn complete_fetch(
        &self,
        generation: u64,
        page_index: u32,
        result: Result<ArtworkPage, FetchError>,
    ) {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        if generation != state.generation {
            debug!(
                page_index,
                generation,
                current = state.generation,
                "page: dropping overtaken fetch"
            );
            return;
        }

        state.loading = false;
        match result {
            Ok(page) => {
                state.items = page.items;
                state.total = page.total;
                state.last_error = None;
                let grew = state.selection.on_page_loaded(&state.items);
                info!(
                    page_index,
                    rows = state.items.len(),
                    total = state.total,
                    "page: loaded"
                );
                let _ = self.events.send(TableEvent::PageLoaded {
                    page_index,
                    items: state.items.clone(),
                });
                if grew {
                    let _ = self.events.send(TableEvent::SelectionChanged {
                        selected: state.selection.selected().to_vec(),
                    });
                }
            }
            Err(err) => {
                error!(page_index, %err, "page: fetch failed");
                state.last_error = Some(err);
            }
        }
    }

    /// Overlay input edit. Digits-only; anything else is rejected and
    /// returns false. Editing the text never moves the selection by
    /// itself.
    pub async fn set_target_text(&self, text: &str) -> bool {
        let mut guard = self.inner.lock().await;
        guard.selection.set_target_text(text)
    }

    /// The overlay submit button: rebuild the selection from the rows of
    /// the current page. Returns false when the target text does not
    /// parse.
    pub async fn submit(&self) -> bool {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        let replaced = state.selection.submit(&state.items);
        if replaced {
            let selected = state.selection.selected().to_vec();
            info!(
                page_index = state.page_index,
                rows = selected.len(),
                "selection: rebuilt from current page"
            );
            let _ = self.events.send(TableEvent::SelectionChanged { selected });
        }
        replaced
    }

    /// Single-row checkbox edit.
    pub async fn toggle_row(&self, id: ArtworkId) {
        let mut guard = self.inner.lock().await;
        guard.selection.toggle_row(id);
        let _ = self.events.send(TableEvent::SelectionChanged {
            selected: guard.selection.selected().to_vec(),
        });
    }

    /// Wholesale selection assignment, e.g. from the header checkbox.
    pub async fn set_selection(&self, ids: Vec<ArtworkId>) {
        let mut guard = self.inner.lock().await;
        guard.selection.set_selection(ids);
        let _ = self.events.send(TableEvent::SelectionChanged {
            selected: guard.selection.selected().to_vec(),
        });
    }

    pub async fn snapshot(&self) -> TableSnapshot {
        let guard = self.inner.lock().await;
        TableSnapshot {
            page_index: guard.page_index,
            loading: guard.loading,
            items: guard.items.clone(),
            total: guard.total,
            selected: guard.selection.selected().to_vec(),
            target_text: guard.selection.target_text().to_string(),
        }
    }

    /// Most recent swallowed fetch failure, for diagnostics.
    pub async fn last_error(&self) -> Option<FetchError> {
        self.inner.lock().await.last_error.clone()
    }

    /// Page count implied by the server-reported total at the fixed page
    /// size.
    pub async fn total_pages(&self) -> u64 {
        let total = self.inner.lock().await.total;
        total.div_ceil(PAGE_SIZE as u64)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
