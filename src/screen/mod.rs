//! List-detail screen controller.
//!
//! Every admin list screen instantiates the same state machine: fetch a page,
//! render it, re-fetch on page/limit/filter changes, debounce free-text
//! search, and run view/edit/delete/create through a modal whose draft is
//! decoupled from the table. [`ListScreen`] owns that machine once, generic
//! over a [`ListResource`]; concrete screens only supply the typed client.

/// Debounced input coalescing
pub mod debounce;
/// Image-field preview state machine
pub mod image;

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page};
use crate::errors::Result;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub use debounce::Debouncer;
pub use image::{ImageField, PreviewSource};

/// The CRUD surface a list screen needs from its resource client.
#[async_trait]
pub trait ListResource: Send + Sync {
    /// Row type shown in the table.
    type Item: Clone + Send + Sync + 'static;
    /// Uncommitted edit/create dto.
    type Draft: Clone + Default + Send + Sync + 'static;

    /// Fetches one page.
    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Self::Item>>;
    /// Creates an entity from a draft.
    async fn create_item(&self, draft: &Self::Draft) -> Result<MutationOutcome>;
    /// Partially updates an entity from a draft.
    async fn update_item(&self, id: &EntityId, draft: &Self::Draft) -> Result<MutationOutcome>;
    /// Deletes an entity.
    async fn remove_item(&self, id: &EntityId) -> Result<MutationOutcome>;

    /// Primary key of a row.
    fn id_of(item: &Self::Item) -> EntityId;
    /// Copies a row's editable fields into a decoupled draft.
    fn draft_of(item: &Self::Item) -> Self::Draft;
    /// Presence/format checks run before a create leaves the screen.
    fn validate_draft(draft: &Self::Draft) -> Result<()>;
}

/// Load state of the table. Data is cleared on error rather than retained;
/// the previous page is gone once a fetch fails.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing fetched yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The current page
    Loaded(Page<T>),
    /// The last fetch failed; holds the user-facing message
    Failed(String),
}

/// Modal state as a sum type, so "modal open without a mode" or "edit without
/// a target" cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal<T, D> {
    Closed,
    /// Read-only detail view
    Viewing(T),
    /// Edit form; `draft` is decoupled from the table row
    Editing {
        target: T,
        draft: D,
    },
    /// Delete confirmation
    Deleting(T),
    /// Create form
    Creating {
        draft: D,
    },
}

/// One list screen instance: query state, the loaded page, the modal, and the
/// in-flight flags. Every successful mutation re-fetches the current page so
/// the table always reflects server truth (including server-computed counts).
pub struct ListScreen<R: ListResource> {
    resource: R,
    query: ListQuery,
    state: LoadState<R::Item>,
    modal: Modal<R::Item, R::Draft>,
    submitting: bool,
    fetch_seq: u64,
    search_debounce: Debouncer<String>,
    settled_search: mpsc::UnboundedReceiver<String>,
}

impl<R: ListResource> ListScreen<R> {
    /// Creates a screen with the given page size and debounce window. The
    /// first page is not fetched until [`refresh`](Self::refresh) runs.
    #[must_use]
    pub fn new(resource: R, limit: u32, debounce_window: Duration) -> Self {
        let (search_debounce, settled_search) = Debouncer::new(debounce_window);
        Self {
            resource,
            query: ListQuery::new().with_page(1).with_limit(limit),
            state: LoadState::Idle,
            modal: Modal::Closed,
            submitting: false,
            fetch_seq: 0,
            search_debounce,
            settled_search,
        }
    }

    /// Creates a screen from the configured screen defaults.
    #[must_use]
    pub fn from_settings(resource: R, settings: &crate::config::settings::Settings) -> Self {
        Self::new(
            resource,
            settings.default_page_size,
            Duration::from_millis(settings.debounce_ms),
        )
    }

    /// The resource client this screen talks through.
    pub const fn resource(&self) -> &R {
        &self.resource
    }

    /// Current query state (page, limit, search, filters).
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Current table state.
    pub const fn state(&self) -> &LoadState<R::Item> {
        &self.state
    }

    /// Current modal state.
    pub const fn modal(&self) -> &Modal<R::Item, R::Draft> {
        &self.modal
    }

    /// Rows of the loaded page, or empty when not loaded.
    pub fn rows(&self) -> &[R::Item] {
        match &self.state {
            LoadState::Loaded(page) => &page.data,
            _ => &[],
        }
    }

    /// Whether a mutation is in flight (submit controls disable on this).
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Fetches the current page. Responses superseded by a newer fetch are
    /// discarded so a slow response can never overwrite a newer one.
    pub async fn refresh(&mut self) -> Result<()> {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        self.state = LoadState::Loading;

        match self.resource.fetch_page(&self.query).await {
            Ok(page) => {
                if seq == self.fetch_seq {
                    debug!(
                        page = page.page,
                        total = page.total,
                        "list page loaded"
                    );
                    self.state = LoadState::Loaded(page);
                }
                Ok(())
            }
            Err(e) => {
                if seq == self.fetch_seq {
                    warn!(error = %e, "list fetch failed");
                    self.state = LoadState::Failed(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Jumps to a page and re-fetches.
    pub async fn set_page(&mut self, page: u32) -> Result<()> {
        self.query.page = Some(page.max(1));
        self.refresh().await
    }

    /// Changes the page size and re-fetches. The page index is kept; running
    /// past the new last page just yields an empty page.
    pub async fn set_limit(&mut self, limit: u32) -> Result<()> {
        self.query.limit = Some(limit);
        self.refresh().await
    }

    /// Sets or clears an entity-specific filter and re-fetches.
    pub async fn set_filter(
        &mut self,
        key: impl Into<String> + Send,
        value: Option<impl ToString + Send>,
    ) -> Result<()> {
        self.query.set_filter(key, value);
        self.refresh().await
    }

    /// Feeds a keystroke into the search debouncer. No fetch happens until
    /// the input settles; drive settled values with
    /// [`settle_search`](Self::settle_search).
    pub fn search_input(&self, term: impl Into<String>) {
        self.search_debounce.input(term.into());
    }

    /// Awaits the next settled search term, replaces the query's search,
    /// resets to page 1 (never "page 3 of a different result set"), and
    /// fetches. Returns `Ok(false)` when the debouncer is gone.
    pub async fn settle_search(&mut self) -> Result<bool> {
        let Some(term) = self.settled_search.recv().await else {
            return Ok(false);
        };
        let term = term.trim().to_string();
        self.query.search = if term.is_empty() { None } else { Some(term) };
        self.query.page = Some(1);
        self.refresh().await?;
        Ok(true)
    }

    // Modal transitions

    /// Opens the read-only detail modal.
    pub fn open_view(&mut self, item: R::Item) {
        self.modal = Modal::Viewing(item);
    }

    /// Opens the edit modal with a draft copied from the row. Mutating the
    /// draft never touches the table; only a successful save (via re-fetch)
    /// does.
    pub fn open_edit(&mut self, item: R::Item) {
        let draft = R::draft_of(&item);
        self.modal = Modal::Editing {
            target: item,
            draft,
        };
    }

    /// Opens the create modal with a default draft.
    pub fn open_create(&mut self) {
        self.modal = Modal::Creating {
            draft: R::Draft::default(),
        };
    }

    /// Opens the delete confirmation.
    pub fn request_delete(&mut self, item: R::Item) {
        self.modal = Modal::Deleting(item);
    }

    /// Closes the modal, discarding any draft.
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Mutable access to the open edit/create draft, if any.
    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match &mut self.modal {
            Modal::Editing { draft, .. } | Modal::Creating { draft } => Some(draft),
            _ => None,
        }
    }

    /// Saves the edit draft. On success the modal closes and the page is
    /// re-fetched; on failure the modal stays open with the draft intact so
    /// the user can correct and retry.
    pub async fn save(&mut self) -> Result<()> {
        if self.submitting {
            return Ok(());
        }
        let Modal::Editing { target, draft } = &self.modal else {
            return Ok(());
        };
        let id = R::id_of(target);
        let draft = draft.clone();

        self.submitting = true;
        let result = self.resource.update_item(&id, &draft).await;
        self.submitting = false;

        result?;
        self.modal = Modal::Closed;
        self.refresh().await
    }

    /// Submits the create draft. Validation failures return before any
    /// request is issued; the modal then behaves like a failed save.
    pub async fn submit_create(&mut self) -> Result<()> {
        if self.submitting {
            return Ok(());
        }
        let Modal::Creating { draft } = &self.modal else {
            return Ok(());
        };
        R::validate_draft(draft)?;
        let draft = draft.clone();

        self.submitting = true;
        let result = self.resource.create_item(&draft).await;
        self.submitting = false;

        result?;
        self.modal = Modal::Closed;
        self.refresh().await
    }

    /// Confirms the pending delete. The re-fetch after deleting the only row
    /// of the last page returns an empty page; the screen does not
    /// auto-decrement `page` to compensate.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        if self.submitting {
            return Ok(());
        }
        let Modal::Deleting(target) = &self.modal else {
            return Ok(());
        };
        let id = R::id_of(target);

        self.submitting = true;
        let result = self.resource.remove_item(&id).await;
        self.submitting = false;

        result?;
        self.modal = Modal::Closed;
        self.refresh().await
    }

    /// Runs a modal-bypassing single-action mutation (status toggles) and
    /// re-fetches. Build the future from a clone of the client so it does
    /// not borrow the screen.
    pub async fn toggle<F>(&mut self, action: F) -> Result<()>
    where
        F: Future<Output = Result<MutationOutcome>> + Send,
    {
        if self.submitting {
            return Ok(());
        }
        self.submitting = true;
        let result = action.await;
        self.submitting = false;

        result?;
        self.refresh().await
    }
}
