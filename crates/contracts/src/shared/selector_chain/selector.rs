use super::chain::{OptionsFetch, SelectorChain};
use crate::domain::a006_location::{LocationLevel, LocationOption};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::OptionsRequest;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// Backend capability that lists the options of one location level
#[async_trait(?Send)]
pub trait OptionSource {
    async fn fetch_options(
        &self,
        level: LocationLevel,
        request: &OptionsRequest,
    ) -> Result<Vec<LocationOption>, ApiError>;
}

/// Result of one selection step
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// Options of `level` were loaded
    Loaded { level: LocationLevel, count: usize },
    /// Leaf level selected, nothing to fetch
    Selected,
    /// Another selection replaced this one while it was loading
    Stale,
    /// Options of `level` could not be loaded; the list stays empty
    Failed { level: LocationLevel, error: ApiError },
}

/// Async driver around [`SelectorChain`]: performs the fetches the chain
/// asks for and feeds the results back.
pub struct DependentSelector<O: OptionSource> {
    source: O,
    chain: Mutex<SelectorChain>,
}

impl<O: OptionSource> DependentSelector<O> {
    pub fn new(source: O) -> Self {
        Self {
            source,
            chain: Mutex::new(SelectorChain::new()),
        }
    }

    fn chain(&self) -> MutexGuard<'_, SelectorChain> {
        self.chain.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current state of every level
    pub fn snapshot(&self) -> SelectorChain {
        self.chain().clone()
    }

    /// Load the root (country) options
    pub async fn load_root(&self) -> SelectionOutcome {
        let fetch = self.chain().begin_fetch(LocationLevel::Country);
        self.run(fetch).await
    }

    pub async fn select_parent(
        &self,
        level: LocationLevel,
        option: LocationOption,
    ) -> SelectionOutcome {
        let fetch = self.chain().select(level, option);
        match fetch {
            Some(fetch) => self.run(fetch).await,
            None => SelectionOutcome::Selected,
        }
    }

    /// Clear every selection and option list, root options included
    pub fn reset(&self) {
        self.chain().reset();
    }

    async fn run(&self, fetch: OptionsFetch) -> SelectionOutcome {
        let result = self.source.fetch_options(fetch.level, &fetch.request).await;
        let outcome = match &result {
            Ok(options) => SelectionOutcome::Loaded {
                level: fetch.level,
                count: options.len(),
            },
            Err(error) => SelectionOutcome::Failed {
                level: fetch.level,
                error: error.clone(),
            },
        };

        if !self.chain().resolve(&fetch, result) {
            log::debug!("dropping stale {} options", fetch.level.label());
            return SelectionOutcome::Stale;
        }
        if let SelectionOutcome::Failed { level, error } = &outcome {
            log::warn!("failed to load {} options: {}", level.label(), error);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selector_chain::OptionsState;
    use std::cell::RefCell;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeLocations {
        requests: RefCell<Vec<(LocationLevel, OptionsRequest)>>,
    }

    #[async_trait(?Send)]
    impl OptionSource for FakeLocations {
        async fn fetch_options(
            &self,
            level: LocationLevel,
            request: &OptionsRequest,
        ) -> Result<Vec<LocationOption>, ApiError> {
            self.requests.borrow_mut().push((level, request.clone()));
            let parent = request
                .city_ids
                .as_ref()
                .or(request.state_ids.as_ref())
                .or(request.country_ids.as_ref())
                .and_then(|ids| ids.first().cloned())
                .unwrap_or_default();

            // "slow" parents answer late, "down" parents fail
            let latency = if parent == "slow" { 300 } else { 10 };
            tokio::time::sleep(Duration::from_millis(latency)).await;
            if parent == "down" {
                return Err(ApiError::Network("connection reset".to_string()));
            }
            Ok(vec![
                LocationOption::new(format!("{parent}-1"), "One"),
                LocationOption::new(format!("{parent}-2"), "Two"),
            ])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cascade_loads_each_level() {
        let selector = DependentSelector::new(FakeLocations::default());
        assert_eq!(
            selector.load_root().await,
            SelectionOutcome::Loaded { level: LocationLevel::Country, count: 2 }
        );

        let outcome = selector
            .select_parent(LocationLevel::Country, LocationOption::new("in", "India"))
            .await;
        assert_eq!(outcome, SelectionOutcome::Loaded { level: LocationLevel::State, count: 2 });

        let snapshot = selector.snapshot();
        assert_eq!(snapshot.options(LocationLevel::State).options()[0].id, "in-1");
        assert!(snapshot.is_enabled(LocationLevel::City));

        let requests = selector.source.requests.borrow();
        assert_eq!(requests[1].0, LocationLevel::State);
        assert_eq!(requests[1].1.country_ids, Some(vec!["in".to_string()]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_reselect_drops_slow_answer() {
        let selector = DependentSelector::new(FakeLocations::default());

        let (slow, fast) = tokio::join!(
            selector.select_parent(LocationLevel::Country, LocationOption::new("slow", "Slow")),
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                selector
                    .select_parent(LocationLevel::Country, LocationOption::new("us", "USA"))
                    .await
            },
        );

        assert_eq!(slow, SelectionOutcome::Stale);
        assert_eq!(fast, SelectionOutcome::Loaded { level: LocationLevel::State, count: 2 });
        let snapshot = selector.snapshot();
        assert_eq!(snapshot.selected(LocationLevel::Country).map(|o| o.id.as_str()), Some("us"));
        assert_eq!(snapshot.options(LocationLevel::State).options()[0].id, "us-1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_leaves_child_empty() {
        let selector = DependentSelector::new(FakeLocations::default());
        selector
            .select_parent(LocationLevel::Country, LocationOption::new("in", "India"))
            .await;
        selector
            .select_parent(LocationLevel::State, LocationOption::new("ka", "Karnataka"))
            .await;

        let outcome = selector
            .select_parent(LocationLevel::Country, LocationOption::new("down", "Offline"))
            .await;
        assert!(matches!(
            outcome,
            SelectionOutcome::Failed { level: LocationLevel::State, .. }
        ));

        let snapshot = selector.snapshot();
        assert_eq!(snapshot.options(LocationLevel::State), &OptionsState::Failed);
        assert_eq!(snapshot.selected(LocationLevel::State), None);
        assert_eq!(snapshot.options(LocationLevel::City), &OptionsState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_drops_in_flight_fetch() {
        let selector = DependentSelector::new(FakeLocations::default());
        selector.load_root().await;

        let (pending, ()) = tokio::join!(
            selector.select_parent(LocationLevel::Country, LocationOption::new("slow", "Slow")),
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                selector.reset();
            },
        );
        assert_eq!(pending, SelectionOutcome::Stale);

        let snapshot = selector.snapshot();
        assert_eq!(snapshot.selected(LocationLevel::Country), None);
        assert_eq!(snapshot.options(LocationLevel::Country), &OptionsState::Idle);
        assert_eq!(snapshot.options(LocationLevel::State), &OptionsState::Idle);

        assert_eq!(
            selector.load_root().await,
            SelectionOutcome::Loaded { level: LocationLevel::Country, count: 2 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaf_selection() {
        let selector = DependentSelector::new(FakeLocations::default());
        let outcome = selector
            .select_parent(LocationLevel::Area, LocationOption::new("a-1", "Old Town"))
            .await;
        assert_eq!(outcome, SelectionOutcome::Selected);
        assert!(selector.source.requests.borrow().is_empty());
    }
}
