use std::{collections::VecDeque, sync::Mutex};

use crate::{WikiBackend, WikiEntry, WikiError, WikiQuery, WikiResult};

/// Result for a mocked `fetch_entry` call.
/// It can either be an entry or an error to return.
pub enum MockFetchResult {
    Entry(WikiEntry),
    Error(WikiError),
}

impl MockFetchResult {
    /// Construct a result that yields the provided entry.
    pub fn entry(entry: WikiEntry) -> Self {
        Self::Entry(entry)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: WikiError) -> Self {
        Self::Error(error)
    }
}

impl From<WikiEntry> for MockFetchResult {
    fn from(entry: WikiEntry) -> Self {
        Self::entry(entry)
    }
}

impl From<WikiError> for MockFetchResult {
    fn from(error: WikiError) -> Self {
        Self::error(error)
    }
}

impl From<WikiResult<WikiEntry>> for MockFetchResult {
    fn from(result: WikiResult<WikiEntry>) -> Self {
        match result {
            Ok(entry) => Self::Entry(entry),
            Err(error) => Self::Error(error),
        }
    }
}

/// A recorded `fetch_entry` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFetch {
    pub route: &'static str,
    pub query: WikiQuery,
}

#[derive(Default)]
struct MockWikiBackendState {
    available: bool,
    probe_count: usize,
    mocked_fetch_results: VecDeque<MockFetchResult>,
    tracked_fetches: Vec<TrackedFetch>,
}

/// A mock backend for testing that tracks fetches and yields predefined
/// entries.
pub struct MockWikiBackend {
    name: &'static str,
    state: Mutex<MockWikiBackendState>,
}

impl Default for MockWikiBackend {
    fn default() -> Self {
        Self {
            name: "mock",
            state: Mutex::new(MockWikiBackendState {
                available: true,
                ..MockWikiBackendState::default()
            }),
        }
    }
}

impl MockWikiBackend {
    /// Construct a mock backend that reports itself as available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer of subsequent probes.
    pub fn set_available(&self, available: bool) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.available = available;
        drop(state);
        self
    }

    /// Enqueue a single mocked fetch result.
    pub fn enqueue_fetch<R>(&self, result: R) -> &Self
    where
        R: Into<MockFetchResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_fetch_results.push_back(result.into());
        drop(state);
        self
    }

    /// Retrieve the fetches made so far.
    pub fn tracked_fetches(&self) -> Vec<TrackedFetch> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_fetches.clone()
    }

    /// Number of probes made so far.
    pub fn probe_count(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.probe_count
    }
}

#[async_trait::async_trait]
impl WikiBackend for MockWikiBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn probe(&self) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.probe_count += 1;
        state.available
    }

    async fn fetch_entry(&self, route: &'static str, query: &WikiQuery) -> WikiResult<WikiEntry> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_fetches.push(TrackedFetch {
            route,
            query: query.clone(),
        });

        let result = state.mocked_fetch_results.pop_front().ok_or_else(|| {
            WikiError::MalformedResponse("no mocked fetch results available".into())
        })?;

        match result {
            MockFetchResult::Entry(entry) => Ok(entry),
            MockFetchResult::Error(error) => Err(error),
        }
    }
}
