//! Reactive glue between a page and its [`ListController`].
//!
//! A page owns one [`ListView`]: it edits `filter`, reads `page` and
//! `loading`, and the view takes care of debouncing, sequencing, failure
//! toasts and teardown when the page is unmounted.

use crate::shared::config::config;
use crate::shared::http_source::HttpPageSource;
use crate::shared::toast::ToastService;
use contracts::enums::ListStatus;
use contracts::shared::list_query::{
    DateRange, FilterState, ListController, ListControllerConfig, PageResult, PaginationWindow,
    QueryOutcome,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::sync::Arc;

type Controller<T> = ListController<HttpPageSource<T>>;

/// Row type a list endpoint can return
pub trait ListItem: DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> ListItem for T where T: DeserializeOwned + Clone + Send + Sync + 'static {}

pub struct ListView<T, S>
where
    T: ListItem,
    S: ListStatus,
{
    pub filter: RwSignal<FilterState<S>>,
    pub page: RwSignal<PageResult<T>>,
    pub loading: RwSignal<bool>,
    controller: StoredValue<Arc<Controller<T>>>,
    toasts: ToastService,
    failure_title: &'static str,
}

impl<T, S> Clone for ListView<T, S>
where
    T: ListItem,
    S: ListStatus,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for ListView<T, S>
where
    T: ListItem,
    S: ListStatus,
{
}

/// Create the list view for `endpoint` and start querying.
///
/// The first query runs immediately; every later filter change goes through
/// the debounce of `settings`.
pub fn use_list_view<T, S>(
    endpoint: &'static str,
    settings: ListControllerConfig,
    initial: FilterState<S>,
    failure_title: &'static str,
) -> ListView<T, S>
where
    T: ListItem,
    S: ListStatus,
{
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let controller = Arc::new(ListController::new(HttpPageSource::new(endpoint), settings));

    let list = ListView {
        filter: RwSignal::new(initial),
        page: RwSignal::new(PageResult::empty()),
        loading: RwSignal::new(false),
        controller: StoredValue::new(controller.clone()),
        toasts,
        failure_title,
    };

    Effect::new(move |_| {
        let state = list.filter.get();
        let controller = list.controller.get_value();
        list.loading.set(true);
        spawn_local(async move {
            let outcome = controller.submit(state, gloo_timers::future::sleep).await;
            list.apply(outcome);
        });
    });

    on_cleanup(move || {
        log::debug!("tearing down list view for {}", endpoint);
        controller.teardown();
    });

    list
}

impl<T, S> ListView<T, S>
where
    T: ListItem,
    S: ListStatus,
{
    /// Query the current filter right away, bypassing the debounce
    pub fn refresh(&self) {
        let this = *self;
        // the page may be gone by the time a mutation finishes
        let Some(controller) = self.controller.try_get_value() else {
            return;
        };
        let state = self.filter.get_untracked();
        self.loading.set(true);
        spawn_local(async move {
            let outcome = controller.refresh(&state).await;
            this.apply(outcome);
        });
    }

    fn apply(&self, outcome: QueryOutcome<T>) {
        match outcome {
            QueryOutcome::Applied(page) => {
                self.page.set(page);
                self.loading.set(false);
            }
            QueryOutcome::Failed(err) => {
                self.loading.set(false);
                self.toasts.api_error(self.failure_title, &err);
            }
            QueryOutcome::Skipped => self.loading.set(false),
            // a newer query owns the loading flag
            QueryOutcome::Debounced | QueryOutcome::Superseded => {}
            QueryOutcome::Closed => {}
        }
    }

    pub fn set_search(&self, text: &str) {
        self.filter.maybe_update(|f| f.set_search_text(text));
    }

    pub fn set_status(&self, status: Option<S>) {
        self.filter.maybe_update(|f| f.set_status(status));
    }

    pub fn set_category(&self, category_id: Option<String>) {
        self.filter.maybe_update(|f| f.set_category(category_id));
    }

    pub fn set_date_range(&self, range: Option<DateRange>) {
        self.filter.maybe_update(|f| f.set_date_range(range));
    }

    pub fn go_to_page(&self, page_no: u32) {
        self.filter.maybe_update(|f| f.set_page(page_no));
    }

    pub fn total_count(&self) -> Signal<u64> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.total_count))
    }

    pub fn active_filters_count(&self) -> Signal<usize> {
        let filter = self.filter;
        Signal::derive(move || filter.with(|f| f.active_filters_count()))
    }

    pub fn window(&self) -> Signal<PaginationWindow> {
        let (page, filter) = (self.page, self.filter);
        let window_size = config().lists.pagination_window;
        Signal::derive(move || {
            let (page_no, page_size) = filter.with(|f| (f.page_no(), f.page_size()));
            let total_pages = page.with(|p| p.total_pages(page_size));
            PaginationWindow::compute(page_no, total_pages, window_size)
        })
    }

    /// "Showing a - b of N"
    pub fn showing_caption(&self) -> Signal<String> {
        let (page, filter) = (self.page, self.filter);
        Signal::derive(move || {
            let (page_no, page_size) = filter.with(|f| (f.page_no(), f.page_size()));
            page.with(|p| {
                let (first, last) = p.showing_range(page_no, page_size);
                format!("Showing {} - {} of {}", first, last, p.total_count)
            })
        })
    }
}
