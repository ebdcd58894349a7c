//! Top-level load operations.
//!
//! [`PokedexLoader`] drives one batch per call: it asks the pagination state
//! for the next range, fetches it through the [`BatchFetcher`] and hands the
//! records to a [`Renderer`]. Failures are caught here, once: they are
//! logged, broadcast as [`Event::LoadFailed`] and shown to the renderer as
//! the generic [`ViewStatus::Error`].

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::BatchFetcher;
use crate::pagination::PaginationState;
use crate::render::{RenderMode, Renderer, ViewStatus};
use crate::types::{Event, PageRange};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

/// Capacity of the event channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// What a load call did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The batch was fetched and rendered
    Loaded {
        /// IDs requested
        range: PageRange,
        /// Records rendered
        count: usize,
    },
    /// The batch failed; nothing was rendered
    Failed {
        /// IDs requested
        range: PageRange,
    },
}

impl LoadOutcome {
    /// True when the batch was rendered
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    /// Range the call requested
    pub fn range(&self) -> PageRange {
        match self {
            LoadOutcome::Loaded { range, .. } | LoadOutcome::Failed { range } => *range,
        }
    }
}

/// Paginated record loader
pub struct PokedexLoader {
    /// Record fetcher
    fetcher: BatchFetcher,
    /// Position of the next page
    pagination: PaginationState,
    /// Advance past failed pages
    advance_on_failure: bool,
    /// Event broadcast channel sender
    event_tx: broadcast::Sender<Event>,
}

impl PokedexLoader {
    /// Create a loader from configuration
    ///
    /// # Errors
    /// Returns a configuration error for invalid settings, or an error if
    /// the HTTP client cannot be created
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let fetcher = BatchFetcher::new(&config.api)?;
        let pagination = PaginationState::from_config(&config.pagination)?;
        let (event_tx, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!(
            base_url = %fetcher.base_url(),
            start = config.pagination.start_offset,
            page_size = config.pagination.page_size,
            "loader initialized"
        );

        Ok(Self {
            fetcher,
            pagination,
            advance_on_failure: config.pagination.advance_on_failure,
            event_tx,
        })
    }

    /// Subscribe to loader events
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// Current pagination state
    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// The underlying fetcher
    pub fn fetcher(&self) -> &BatchFetcher {
        &self.fetcher
    }

    /// Load the first page, replacing whatever the renderer shows
    pub async fn load_initial<R>(&mut self, renderer: &mut R) -> LoadOutcome
    where
        R: Renderer + ?Sized,
    {
        self.load_page(renderer, RenderMode::Replace).await
    }

    /// Load the next page and append it
    pub async fn load_more<R>(&mut self, renderer: &mut R) -> LoadOutcome
    where
        R: Renderer + ?Sized,
    {
        self.load_page(renderer, RenderMode::Append).await
    }

    async fn load_page<R>(&mut self, renderer: &mut R, mode: RenderMode) -> LoadOutcome
    where
        R: Renderer + ?Sized,
    {
        let range = self.pagination.next_range();
        renderer.set_status(ViewStatus::Loading);
        self.emit(Event::BatchStarted { range });

        let outcome = match self.fetcher.fetch_batch(range).await {
            Ok(records) => {
                renderer.render(&records, mode);
                renderer.set_status(ViewStatus::Ready);
                self.emit(Event::BatchLoaded {
                    range,
                    count: records.len(),
                });
                LoadOutcome::Loaded {
                    range,
                    count: records.len(),
                }
            }
            Err(e) => {
                error!(range = %range, error = %e, code = e.error_code(), "failed to load records");
                renderer.set_status(ViewStatus::Error);
                self.emit(Event::LoadFailed {
                    range,
                    error: e.to_string(),
                });
                LoadOutcome::Failed { range }
            }
        };

        if outcome.is_loaded() || self.advance_on_failure {
            match self.pagination.advance() {
                Ok(next) => self.pagination = next,
                Err(e) => warn!(range = %range, error = %e, "pagination cannot advance further"),
            }
        }
        outcome
    }

    fn emit(&self, event: Event) {
        // No subscribers is fine
        self.event_tx.send(event).ok();
    }
}
