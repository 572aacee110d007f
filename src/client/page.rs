//! Top-level page state: wires debounced queries to search requests.

use itertools::Itertools;
use tracing::warn;

use crate::client::api::CollectionApi;

/// Fixed copy shown for any failed search. The underlying error is logged,
/// never rendered.
pub const SEARCH_ERROR_MESSAGE: &str =
    "An error occurred while fetching results. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// No query yet, or the last query was cleared.
    Idle,
    /// A search request is in flight.
    Loading,
    Results { total: u64, object_ids: Vec<u64> },
    Empty,
    Error(String),
}

pub struct PageController<A> {
    api: A,
    state: PageState,
}

impl<A: CollectionApi> PageController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PageState::Idle,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Handle one debounced query.
    ///
    /// A whitespace-only query clears the page without a network call.
    /// Otherwise the trimmed query goes to the search endpoint and the page
    /// lands in results, empty, or error. Each search replaces the previous
    /// state wholesale; stale outcomes are never merged.
    pub async fn on_search(&mut self, query: &str) {
        let query = query.trim();

        if query.is_empty() {
            self.state = PageState::Idle;
            return;
        }

        self.state = PageState::Loading;

        self.state = match self.api.search(query).await {
            Ok(result) => {
                let object_ids = result.object_ids.unwrap_or_default();

                if result.total == 0 || object_ids.is_empty() {
                    PageState::Empty
                } else {
                    PageState::Results {
                        total: result.total,
                        object_ids,
                    }
                }
            }
            Err(source) => {
                warn!("Search failed: {source}");
                PageState::Error(SEARCH_ERROR_MESSAGE.to_string())
            }
        };
    }

    /// Remount key for the result list, derived from the identifier
    /// sequence. A changed key means a fresh loader, never a merge with
    /// stale loader state.
    pub fn results_key(&self) -> Option<String> {
        match &self.state {
            PageState::Results { object_ids, .. } => Some(object_ids.iter().join(",")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::api::{ArtObject, FetchError, SearchResult};

    struct StubApi {
        response: Result<SearchResult, ()>,
        calls: AtomicUsize,
    }

    impl StubApi {
        fn ok(total: u64, object_ids: Option<Vec<u64>>) -> Self {
            Self {
                response: Ok(SearchResult { total, object_ids }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl CollectionApi for &StubApi {
        async fn search(&self, _query: &str) -> Result<SearchResult, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .clone()
                .map_err(|()| FetchError::Endpoint(url::ParseError::EmptyHost))
        }

        async fn fetch_object(&self, _id: u64) -> Result<ArtObject, FetchError> {
            unreachable!("page controller never fetches objects")
        }
    }

    #[tokio::test]
    async fn whitespace_query_clears_without_network_call() {
        let api = StubApi::ok(3, Some(vec![1, 2, 3]));
        let mut page = PageController::new(&api);

        page.on_search("monet").await;
        assert!(matches!(page.state(), PageState::Results { .. }));

        page.on_search("   ").await;
        assert_eq!(page.state(), &PageState::Idle);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn query_is_trimmed_before_searching() {
        let api = StubApi::ok(1, Some(vec![7]));
        let mut page = PageController::new(&api);

        page.on_search("  monet  ").await;

        assert_eq!(page.state(), &PageState::Results {
            total: 1,
            object_ids: vec![7],
        });
    }

    #[tokio::test]
    async fn zero_total_lands_in_empty_not_error() {
        let api = StubApi::ok(0, None);
        let mut page = PageController::new(&api);

        page.on_search("zzzz").await;

        assert_eq!(page.state(), &PageState::Empty);
    }

    #[tokio::test]
    async fn failed_search_lands_in_error_with_fixed_copy() {
        let api = StubApi::failing();
        let mut page = PageController::new(&api);

        page.on_search("monet").await;

        assert_eq!(
            page.state(),
            &PageState::Error(SEARCH_ERROR_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn results_key_tracks_the_identifier_sequence() {
        let api = StubApi::ok(3, Some(vec![10, 20, 30]));
        let mut page = PageController::new(&api);

        assert_eq!(page.results_key(), None);

        page.on_search("monet").await;
        assert_eq!(page.results_key(), Some("10,20,30".to_string()));
    }
}
