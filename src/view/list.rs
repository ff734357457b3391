//! # Record List View
//!
//! Fetches its collection once per mount on a spawned task and renders it.
//! The owner drives it from the UI loop: [`RecordListView::poll`] applies a
//! finished fetch without blocking, [`RecordListView::unmount`] cancels an
//! in-flight one so a late result never lands in a torn-down view.

use crate::api::{CollectionSource, FetchError};
use crate::core::RecordCollection;
use crate::view::{render_section, DisplayFields, RenderedSection, ViewState};
use log::{debug, warn};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

/// How a view treats a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log it and show an empty list
    #[default]
    Absorb,
    /// Keep the reason in [`ViewState::Failed`]
    Surface,
}

type FetchOutcome = Result<RecordCollection, FetchError>;

struct PendingFetch {
    handle: JoinHandle<()>,
    rx: oneshot::Receiver<FetchOutcome>,
}

/// A labelled list of records backed by a collection source
pub struct RecordListView {
    heading: String,
    source: Arc<dyn CollectionSource>,
    fields: DisplayFields,
    policy: FailurePolicy,
    state: ViewState,
    pending: Option<PendingFetch>,
    mounted: bool,
}

impl RecordListView {
    pub fn new(
        heading: impl Into<String>,
        source: Arc<dyn CollectionSource>,
        fields: DisplayFields,
    ) -> Self {
        RecordListView {
            heading: heading.into(),
            source,
            fields,
            policy: FailurePolicy::default(),
            state: ViewState::Empty,
            pending: None,
            mounted: false,
        }
    }

    /// The reminders list as shown by the app
    pub fn reminders(source: Arc<dyn CollectionSource>) -> Self {
        Self::new("Reminders", source, DisplayFields::reminder())
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Start the fetch for this mount.
    ///
    /// Returns `false` when already mounted, or when no tokio runtime is
    /// available to run the fetch; the fetch fires once per mount.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("{} cannot mount outside a tokio runtime: {}", self.heading, e);
                return false;
            }
        };
        self.mounted = true;

        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);
        let policy = self.policy;

        let handle = runtime.spawn(async move {
            let outcome = match policy {
                FailurePolicy::Absorb => Ok(source.fetch().await),
                FailurePolicy::Surface => source.try_fetch().await,
            };
            // Receiver is gone if the view unmounted meanwhile
            let _ = tx.send(outcome);
        });

        debug!("{} mounted, fetching from {}", self.heading, self.source.name());
        self.pending = Some(PendingFetch { handle, rx });
        true
    }

    /// Apply a finished fetch, if any. Never blocks.
    ///
    /// Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        match pending.rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.pending = None;
                warn!("{} fetch task ended without a result", self.heading);
                false
            }
        }
    }

    /// Wait for the in-flight fetch and apply it.
    ///
    /// Returns `true` when the state changed.
    pub async fn settle(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        match pending.rx.await {
            Ok(outcome) => {
                self.apply(outcome);
                true
            }
            Err(_) => {
                warn!("{} fetch task ended without a result", self.heading);
                false
            }
        }
    }

    /// Tear the view down: cancel any in-flight fetch and drop the state
    pub fn unmount(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            debug!("{} unmounted with a fetch in flight; result discarded", self.heading);
        }
        self.mounted = false;
        self.state = ViewState::Empty;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn fields(&self) -> &DisplayFields {
        &self.fields
    }

    pub fn render(&self) -> RenderedSection {
        render_section(&self.heading, &self.fields, &self.state)
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        self.state = match outcome {
            Ok(records) => {
                debug!("{} loaded {} records", self.heading, records.len());
                ViewState::Loaded(records)
            }
            Err(e) => {
                warn!("{} failed to load from {}: {}", self.heading, self.source.name(), e);
                ViewState::Failed(e.to_string())
            }
        };
    }
}

impl Drop for RecordListView {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}
