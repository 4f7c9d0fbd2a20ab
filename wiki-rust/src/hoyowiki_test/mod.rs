//! Test doubles for code built on top of the wiki pipeline.

mod backend;

pub use backend::{MockFetchResult, MockWikiBackend, TrackedFetch};
