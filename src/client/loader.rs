//! # Result List Loader
//!
//! Progressively materializes object records for a fixed identifier
//! sequence, ten at a time, as the user scrolls.
//!
//!
//!
//! ## Batching
//!
//! Each trigger takes the next up-to-ten identifiers at the cursor and
//! fetches them concurrently. Results are collected positionally, so the
//! display list keeps identifier order no matter which fetch finishes
//! first. The cursor then advances by the batch size, capped at the end of
//! the sequence.
//!
//! Batches never interleave: the loading flag makes a trigger a no-op while
//! a batch is in flight, so ordering across batches is sequential by
//! construction rather than by locking.
//!
//!
//!
//! ## Sentinel
//!
//! The rendering engine reports the visibility ratio of a marker element
//! placed after the grid. A ratio of at least 0.85 triggers the next batch.
use futures::future::try_join_all;

use crate::client::api::{ArtObject, CollectionApi, FetchError};

/// Identifiers fetched per trigger.
pub const BATCH_SIZE: usize = 10;

/// Sentinel visibility ratio at which the next batch fires.
pub const SENTINEL_THRESHOLD: f64 = 0.85;

pub struct ResultListLoader<A> {
    api: A,
    object_ids: Vec<u64>,
    loaded: Vec<ArtObject>,
    cursor: usize,
    loading: bool,
}

impl<A: CollectionApi> ResultListLoader<A> {
    /// A loader for one identifier sequence, with nothing fetched yet.
    /// Callers load the first batch through [`Self::reset`] or
    /// [`Self::load_next_batch`].
    pub fn new(api: A, object_ids: Vec<u64>) -> Self {
        Self {
            api,
            object_ids,
            loaded: Vec::new(),
            cursor: 0,
            loading: false,
        }
    }

    /// Records fetched so far, in identifier order. Always exactly `cursor`
    /// entries once a batch completes.
    pub fn loaded(&self) -> &[ArtObject] {
        &self.loaded
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.object_ids.len()
    }

    /// Swap in a new identifier sequence, drop everything loaded, and fetch
    /// the first batch immediately.
    pub async fn reset(&mut self, object_ids: Vec<u64>) -> Result<(), FetchError> {
        self.object_ids = object_ids;
        self.loaded.clear();
        self.cursor = 0;
        self.loading = false;

        self.load_next_batch().await
    }

    /// Sentinel visibility callback from the rendering engine. Fires a batch
    /// load once the marker is sufficiently visible and nothing is in
    /// flight.
    pub async fn sentinel_visible(&mut self, ratio: f64) -> Result<(), FetchError> {
        if ratio >= SENTINEL_THRESHOLD && !self.loading {
            self.load_next_batch().await?;
        }

        Ok(())
    }

    /// Fetch the next batch. A no-op while a batch is in flight or once the
    /// cursor has reached the end of the sequence.
    ///
    /// A failed fetch aborts the whole batch: nothing partial is appended,
    /// the cursor stays put, and the loading flag is cleared so the same
    /// batch can be retried from an error state.
    pub async fn load_next_batch(&mut self) -> Result<(), FetchError> {
        if self.loading || self.cursor >= self.object_ids.len() {
            return Ok(());
        }

        self.loading = true;

        let end = (self.cursor + BATCH_SIZE).min(self.object_ids.len());
        let batch = &self.object_ids[self.cursor..end];

        let fetched = try_join_all(batch.iter().map(|&id| self.api.fetch_object(id))).await;

        let items = match fetched {
            Ok(items) => items,
            Err(source) => {
                self.loading = false;
                return Err(source);
            }
        };

        self.loaded.extend(items);
        self.cursor = end;
        self.loading = false;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::api::SearchResult;

    /// Records every requested id and answers with a stub record.
    #[derive(Default)]
    struct RecordingApi {
        requested: Mutex<Vec<u64>>,
        fail_on: Option<u64>,
        failures_remaining: AtomicUsize,
    }

    impl RecordingApi {
        fn failing_once_on(id: u64) -> Self {
            Self {
                fail_on: Some(id),
                failures_remaining: AtomicUsize::new(1),
                ..Self::default()
            }
        }
    }

    impl CollectionApi for &RecordingApi {
        async fn search(&self, _query: &str) -> Result<SearchResult, FetchError> {
            unreachable!("loader never searches")
        }

        async fn fetch_object(&self, id: u64) -> Result<ArtObject, FetchError> {
            self.requested.lock().unwrap().push(id);

            if self.fail_on == Some(id) && self.failures_remaining.load(Ordering::SeqCst) > 0 {
                self.failures_remaining.fetch_sub(1, Ordering::SeqCst);
                return Err(FetchError::Endpoint(url::ParseError::EmptyHost));
            }

            Ok(ArtObject {
                object_id: id,
                ..ArtObject::default()
            })
        }
    }

    fn ids(range: std::ops::RangeInclusive<u64>) -> Vec<u64> {
        range.collect()
    }

    fn loaded_ids(loader: &ResultListLoader<&RecordingApi>) -> Vec<u64> {
        loader.loaded().iter().map(|item| item.object_id).collect()
    }

    #[tokio::test]
    async fn twenty_five_ids_load_in_three_batches_then_stop() {
        let api = RecordingApi::default();
        let mut loader = ResultListLoader::new(&api, Vec::new());

        loader.reset(ids(1..=25)).await.unwrap();
        assert_eq!(loaded_ids(&loader), ids(1..=10));
        assert_eq!(loader.cursor(), 10);

        loader.load_next_batch().await.unwrap();
        loader.load_next_batch().await.unwrap();
        assert_eq!(loaded_ids(&loader), ids(1..=25));
        assert_eq!(loader.cursor(), 25);
        assert!(!loader.has_more());

        // Exhausted: a further trigger issues no network calls.
        loader.load_next_batch().await.unwrap();
        assert_eq!(api.requested.lock().unwrap().len(), 25);
        assert_eq!(loader.cursor(), 25);
    }

    #[tokio::test]
    async fn short_final_batch_caps_cursor_at_sequence_length() {
        let api = RecordingApi::default();
        let mut loader = ResultListLoader::new(&api, ids(1..=13));

        loader.load_next_batch().await.unwrap();
        loader.load_next_batch().await.unwrap();

        assert_eq!(loader.cursor(), 13);
        assert_eq!(loaded_ids(&loader).len(), 13);
    }

    #[tokio::test]
    async fn loaded_length_always_matches_cursor() {
        let api = RecordingApi::default();
        let mut loader = ResultListLoader::new(&api, ids(1..=25));

        while loader.has_more() {
            loader.load_next_batch().await.unwrap();
            assert_eq!(loader.loaded().len(), loader.cursor());
            assert!(!loader.is_loading());
        }
    }

    #[tokio::test]
    async fn sentinel_below_threshold_does_not_trigger() {
        let api = RecordingApi::default();
        let mut loader = ResultListLoader::new(&api, ids(1..=5));

        loader.sentinel_visible(0.5).await.unwrap();
        assert!(api.requested.lock().unwrap().is_empty());

        loader.sentinel_visible(0.85).await.unwrap();
        assert_eq!(loaded_ids(&loader), ids(1..=5));
    }

    #[tokio::test]
    async fn reset_discards_previous_sequence() {
        let api = RecordingApi::default();
        let mut loader = ResultListLoader::new(&api, Vec::new());

        loader.reset(ids(1..=12)).await.unwrap();
        loader.reset(ids(100..=103)).await.unwrap();

        assert_eq!(loaded_ids(&loader), ids(100..=103));
        assert_eq!(loader.cursor(), 4);
    }

    #[tokio::test]
    async fn failed_batch_appends_nothing_and_is_retryable() {
        let api = RecordingApi::failing_once_on(13);
        let mut loader = ResultListLoader::new(&api, ids(1..=25));

        loader.load_next_batch().await.unwrap();
        assert_eq!(loader.cursor(), 10);

        // Second batch fails on id 13: no partial append, cursor unchanged,
        // loader not wedged in the loading state.
        assert!(loader.load_next_batch().await.is_err());
        assert_eq!(loaded_ids(&loader), ids(1..=10));
        assert_eq!(loader.cursor(), 10);
        assert!(!loader.is_loading());

        // The same batch retries cleanly once the failure clears.
        loader.sentinel_visible(0.9).await.unwrap();
        assert_eq!(loaded_ids(&loader), ids(1..=20));
        assert_eq!(loader.cursor(), 20);
    }
}
