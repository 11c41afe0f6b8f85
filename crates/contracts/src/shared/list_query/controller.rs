use super::debounce::DebounceGate;
use super::filter_state::FilterState;
use super::page_result::PageResult;
use super::request::ListRequest;
use super::sequence::RequestSequence;
use crate::enums::ListStatus;
use crate::shared::api_error::ApiError;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

/// Backend capability behind one admin list
#[async_trait(?Send)]
pub trait PageSource {
    type Item: Clone;

    async fn fetch_page(&self, request: &ListRequest) -> Result<PageResult<Self::Item>, ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListControllerConfig {
    pub debounce: Duration,
    /// Non-empty searches shorter than this are not sent
    pub min_search_len: usize,
}

impl Default for ListControllerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_search_len: 0,
        }
    }
}

/// What happened to one submitted filter state
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    /// Fresh page, to be displayed
    Applied(PageResult<T>),
    /// A newer filter state arrived during the debounce window
    Debounced,
    /// A newer request was issued while this one was in flight
    Superseded,
    /// Search text too short to query
    Skipped,
    /// The backend call failed; the previous page stays valid
    Failed(ApiError),
    /// The owning view is gone
    Closed,
}

impl<T> QueryOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, QueryOutcome::Applied(_))
    }
}

/// Debounced, sequenced query driver for one list view.
///
/// Timing is injected through the `sleep` argument of [`submit`], so the
/// same driver runs on the browser event loop and under a test runtime.
///
/// [`submit`]: ListController::submit
pub struct ListController<P: PageSource> {
    source: P,
    gate: DebounceGate,
    sequence: RequestSequence,
    last_result: Mutex<Option<PageResult<P::Item>>>,
    min_search_len: usize,
}

impl<P: PageSource> ListController<P> {
    pub fn new(source: P, config: ListControllerConfig) -> Self {
        Self {
            source,
            gate: DebounceGate::new(config.debounce),
            sequence: RequestSequence::new(),
            last_result: Mutex::new(None),
            min_search_len: config.min_search_len,
        }
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    /// Debounce `state`, then query it unless something newer came along.
    /// The first call of the controller's life skips the debounce wait.
    pub async fn submit<S, F, Fut>(&self, state: FilterState<S>, sleep: F) -> QueryOutcome<P::Item>
    where
        S: ListStatus,
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.gate.is_closed() {
            return QueryOutcome::Closed;
        }
        let scheduled = self.gate.schedule();
        if let Some(delay) = scheduled.delay {
            sleep(delay).await;
        }
        if !self.gate.is_current(scheduled.ticket) {
            return if self.gate.is_closed() {
                QueryOutcome::Closed
            } else {
                QueryOutcome::Debounced
            };
        }
        if !state.is_queryable(self.min_search_len) {
            log::debug!(
                "search '{}' shorter than {} chars, not querying",
                state.search_text,
                self.min_search_len
            );
            return QueryOutcome::Skipped;
        }
        self.fetch(state.to_request()).await
    }

    /// Query right away, bypassing the debounce (manual refresh, reload
    /// after a mutation). Still sequenced against other requests.
    pub async fn refresh<S: ListStatus>(&self, state: &FilterState<S>) -> QueryOutcome<P::Item> {
        if self.gate.is_closed() {
            return QueryOutcome::Closed;
        }
        self.fetch(state.to_request()).await
    }

    async fn fetch(&self, request: ListRequest) -> QueryOutcome<P::Item> {
        let ticket = self.sequence.issue();
        let result = self.source.fetch_page(&request).await;

        if self.gate.is_closed() {
            return QueryOutcome::Closed;
        }
        if !self.sequence.is_latest(ticket) {
            log::debug!("dropping response #{} in favour of a newer request", ticket.value());
            return QueryOutcome::Superseded;
        }

        match result {
            Ok(page) => {
                if let Ok(mut last) = self.last_result.lock() {
                    *last = Some(page.clone());
                }
                QueryOutcome::Applied(page)
            }
            Err(err) => {
                log::warn!("list query failed: {}", err);
                QueryOutcome::Failed(err)
            }
        }
    }

    /// Last page that was successfully applied
    pub fn last_result(&self) -> Option<PageResult<P::Item>> {
        self.last_result.lock().ok().and_then(|last| last.clone())
    }

    /// Cancel the pending debounce and make in-flight responses inert
    pub fn teardown(&self) {
        self.gate.cancel();
        self.sequence.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::VendorStatus;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeVendors {
        requests: RefCell<Vec<ListRequest>>,
        latency_ms: RefCell<HashMap<String, u64>>,
        failing: Cell<bool>,
    }

    impl FakeVendors {
        fn with_latency(self, search: &str, ms: u64) -> Self {
            self.latency_ms.borrow_mut().insert(search.to_string(), ms);
            self
        }

        fn searches(&self) -> Vec<String> {
            self.requests
                .borrow()
                .iter()
                .map(|r| r.search_text.clone())
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl PageSource for FakeVendors {
        type Item = String;

        async fn fetch_page(&self, request: &ListRequest) -> Result<PageResult<String>, ApiError> {
            self.requests.borrow_mut().push(request.clone());
            let latency = self
                .latency_ms
                .borrow()
                .get(&request.search_text)
                .copied()
                .unwrap_or(10);
            tokio::time::sleep(Duration::from_millis(latency)).await;
            if self.failing.get() {
                return Err(ApiError::Status(500));
            }
            Ok(PageResult::new(vec![request.search_text.clone()], 1))
        }
    }

    fn config(debounce_ms: u64) -> ListControllerConfig {
        ListControllerConfig {
            debounce: Duration::from_millis(debounce_ms),
            min_search_len: 0,
        }
    }

    fn searching(text: &str) -> FilterState<VendorStatus> {
        let mut state = FilterState::new(10);
        state.set_search_text(text);
        state
    }

    fn page_of(text: &str) -> QueryOutcome<String> {
        QueryOutcome::Applied(PageResult::new(vec![text.to_string()], 1))
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_query_is_immediate() {
        let controller = ListController::new(FakeVendors::default(), config(500));
        let started = tokio::time::Instant::now();
        let outcome = controller.submit(searching(""), tokio::time::sleep).await;
        assert!(outcome.is_applied());
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_issues_one_query_with_last_state() {
        let controller = ListController::new(FakeVendors::default(), config(500));
        controller.submit(searching(""), tokio::time::sleep).await;

        let (a, b, c) = tokio::join!(
            controller.submit(searching("a"), tokio::time::sleep),
            async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                controller.submit(searching("ab"), tokio::time::sleep).await
            },
            async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                controller.submit(searching("abc"), tokio::time::sleep).await
            },
        );

        assert_eq!(a, QueryOutcome::Debounced);
        assert_eq!(b, QueryOutcome::Debounced);
        assert_eq!(c, page_of("abc"));
        assert_eq!(controller.source().searches(), vec!["", "abc"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_earlier_response_is_discarded() {
        let source = FakeVendors::default()
            .with_latency("slow", 300)
            .with_latency("fast", 20);
        let controller = ListController::new(source, config(0));

        let (slow, fast) = tokio::join!(
            controller.submit(searching("slow"), tokio::time::sleep),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                controller.submit(searching("fast"), tokio::time::sleep).await
            },
        );

        assert_eq!(slow, QueryOutcome::Superseded);
        assert_eq!(fast, page_of("fast"));
        assert_eq!(
            controller.last_result().map(|p| p.items),
            Some(vec!["fast".to_string()])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_previous_page() {
        let controller = ListController::new(FakeVendors::default(), config(300));
        controller.submit(searching("ok"), tokio::time::sleep).await;

        controller.source().failing.set(true);
        let outcome = controller.submit(searching("boom"), tokio::time::sleep).await;

        assert_eq!(outcome, QueryOutcome::Failed(ApiError::Status(500)));
        assert_eq!(
            controller.last_result().map(|p| p.items),
            Some(vec!["ok".to_string()])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_debounce() {
        let controller = ListController::new(FakeVendors::default(), config(500));
        controller.submit(searching(""), tokio::time::sleep).await;

        let (pending, _) = tokio::join!(
            controller.submit(searching("late"), tokio::time::sleep),
            async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                controller.teardown();
            },
        );

        assert_eq!(pending, QueryOutcome::Closed);
        assert_eq!(controller.source().searches(), vec![""]);
        assert_eq!(
            controller.submit(searching("x"), tokio::time::sleep).await,
            QueryOutcome::Closed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_ignores_in_flight_response() {
        let source = FakeVendors::default().with_latency("slow", 200);
        let controller = ListController::new(source, config(300));

        let (in_flight, _) = tokio::join!(
            controller.submit(searching("slow"), tokio::time::sleep),
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                controller.teardown();
            },
        );

        assert_eq!(in_flight, QueryOutcome::Closed);
        assert_eq!(controller.last_result(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_search_is_skipped() {
        let controller = ListController::new(
            FakeVendors::default(),
            ListControllerConfig {
                debounce: Duration::from_millis(300),
                min_search_len: 3,
            },
        );
        let outcome = controller.submit(searching("jo"), tokio::time::sleep).await;
        assert_eq!(outcome, QueryOutcome::Skipped);
        assert!(controller.source().searches().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_bypasses_debounce() {
        let controller = ListController::new(FakeVendors::default(), config(500));
        controller.submit(searching(""), tokio::time::sleep).await;
        let started = tokio::time::Instant::now();
        let outcome = controller.refresh(&searching("again")).await;
        assert_eq!(outcome, page_of("again"));
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}
