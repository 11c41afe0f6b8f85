use super::request::ListRequest;
use crate::enums::ListStatus;
use crate::shared::date_format::format_api_date;
use chrono::{Datelike, Duration, NaiveDate};

/// Inclusive date interval used by the bookings filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range; reversed ends are swapped
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// First to last day of the month containing `today`
    pub fn current_month(today: NaiveDate) -> Self {
        let month_start = today.with_day(1).unwrap_or(today);
        let next_month_start = if today.month() == 12 {
            NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
        };
        let month_end = next_month_start
            .map(|d| d - Duration::days(1))
            .unwrap_or(today);
        Self::new(month_start, month_end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Combined search/filter/pagination parameters of one admin list.
///
/// Every filter mutator returns `true` only when the value actually changed
/// and resets the page to 1 in that case. The page is never below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<S: ListStatus> {
    pub search_text: String,
    /// `None` means "all"
    pub status: Option<S>,
    /// `None` means "all"
    pub category_id: Option<String>,
    pub date_range: Option<DateRange>,
    page_no: u32,
    page_size: u32,
}

impl<S: ListStatus> FilterState<S> {
    pub fn new(page_size: u32) -> Self {
        Self {
            search_text: String::new(),
            status: None,
            category_id: None,
            date_range: None,
            page_no: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn page_no(&self) -> u32 {
        self.page_no
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_search_text(&mut self, text: &str) -> bool {
        if self.search_text == text {
            return false;
        }
        self.search_text = text.to_string();
        self.page_no = 1;
        true
    }

    pub fn set_status(&mut self, status: Option<S>) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.page_no = 1;
        true
    }

    /// `"all"` and the empty string both clear the category filter
    pub fn set_category(&mut self, category_id: Option<String>) -> bool {
        let category_id = category_id.filter(|id| !id.is_empty() && id != "all");
        if self.category_id == category_id {
            return false;
        }
        self.category_id = category_id;
        self.page_no = 1;
        true
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) -> bool {
        if self.date_range == range {
            return false;
        }
        self.date_range = range;
        self.page_no = 1;
        true
    }

    /// Move to `page_no`, clamped to at least 1
    pub fn set_page(&mut self, page_no: u32) -> bool {
        let page_no = page_no.max(1);
        if self.page_no == page_no {
            return false;
        }
        self.page_no = page_no;
        true
    }

    pub fn set_page_size(&mut self, page_size: u32) -> bool {
        let page_size = page_size.max(1);
        if self.page_size == page_size {
            return false;
        }
        self.page_size = page_size;
        self.page_no = 1;
        true
    }

    /// Number of filters that narrow the list, for the filter-panel badge
    pub fn active_filters_count(&self) -> usize {
        [
            !self.search_text.trim().is_empty(),
            self.status.is_some(),
            self.category_id.is_some(),
            self.date_range.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// A non-empty search shorter than `min_search_len` is not worth a query
    pub fn is_queryable(&self, min_search_len: usize) -> bool {
        let text = self.search_text.trim();
        text.is_empty() || text.chars().count() >= min_search_len
    }

    /// Build the wire body for the list endpoint
    pub fn to_request(&self) -> ListRequest {
        ListRequest {
            search_text: self.search_text.trim().to_string(),
            status: self.status.map(|s| s.wire_value().to_string()),
            category_id: self.category_id.clone(),
            start_date: self.date_range.map(|r| format_api_date(r.from)),
            end_date: self.date_range.map(|r| format_api_date(r.to)),
            page: self.page_no,
            size: self.page_size,
        }
    }
}
