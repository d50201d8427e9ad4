use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::SearchClient;
use crate::error::Result;
use crate::request::SearchRequest;
use crate::response::SearchResponse;

/// Hands out monotonically increasing submission ids and remembers the
/// newest one. Outcomes may render only while their id is still current,
/// so the latest submission always owns the displayed state.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new submission and return its id. Every earlier id is
    /// stale from this point on.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `id` still identifies the newest submission.
    pub fn is_current(&self, id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == id
    }

    /// Id of the newest submission, 0 before the first [`begin`].
    ///
    /// [`begin`]: RequestSequencer::begin
    pub fn current(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

/// A [`SearchClient`] paired with a [`RequestSequencer`]. Submissions that
/// finish after a newer one began are dropped, success or failure alike.
pub struct SearchSession {
    client: SearchClient,
    sequencer: RequestSequencer,
}

impl SearchSession {
    pub fn new(client: SearchClient) -> Self {
        SearchSession {
            client,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    /// Execute one search under the sequencer. Returns `None` when a newer
    /// submission started while this one was in flight; the caller must
    /// render nothing in that case.
    pub async fn submit(&self, request: &SearchRequest) -> Option<Result<SearchResponse>> {
        let id = self.sequencer.begin();
        let outcome = self.client.search(request).await;
        if !self.sequencer.is_current(id) {
            tracing::debug!(id, "Dropping superseded search outcome");
            return None;
        }
        Some(outcome)
    }
}
