use serde::{Deserialize, Serialize};

/// One page of a list query. Replaced wholesale on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages for `page_size`, never less than 1
    pub fn total_pages(&self, page_size: u32) -> u32 {
        let page_size = u64::from(page_size.max(1));
        let pages = self.total_count.div_ceil(page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// 1-based inclusive bounds for the "Showing a - b of N" caption
    pub fn showing_range(&self, page_no: u32, page_size: u32) -> (u64, u64) {
        if self.total_count == 0 {
            return (0, 0);
        }
        let page_size = u64::from(page_size.max(1));
        let first = u64::from(page_no.max(1) - 1) * page_size + 1;
        let last = (first + page_size - 1).min(self.total_count);
        (first.min(self.total_count), last)
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Outer `{ "data": ... }` wrapper every backend response carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Inner `{ "data": [...], "total": N }` payload of list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePayload<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> From<PagePayload<T>> for PageResult<T> {
    fn from(payload: PagePayload<T>) -> Self {
        let total = payload.total.unwrap_or(payload.data.len() as u64);
        PageResult::new(payload.data, total)
    }
}

impl<T> From<ApiEnvelope<PagePayload<T>>> for PageResult<T> {
    fn from(envelope: ApiEnvelope<PagePayload<T>>) -> Self {
        envelope.data.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let page = PageResult::<u8>::new(vec![], 21);
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(PageResult::<u8>::empty().total_pages(10), 1);
        assert_eq!(page.total_pages(0), 21);
    }

    #[test]
    fn test_showing_range() {
        let page = PageResult::<u8>::new(vec![], 23);
        assert_eq!(page.showing_range(1, 10), (1, 10));
        assert_eq!(page.showing_range(3, 10), (21, 23));
        assert_eq!(PageResult::<u8>::empty().showing_range(1, 10), (0, 0));
    }

    #[test]
    fn test_envelope_decodes() {
        let raw = r#"{ "data": { "data": [1, 2, 3], "total": 42 } }"#;
        let envelope: ApiEnvelope<PagePayload<u8>> = serde_json::from_str(raw).unwrap();
        let page: PageResult<u8> = envelope.into();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_count, 42);
    }

    #[test]
    fn test_missing_total_falls_back_to_len() {
        let raw = r#"{ "data": { "data": [7, 8] } }"#;
        let envelope: ApiEnvelope<PagePayload<u8>> = serde_json::from_str(raw).unwrap();
        let page: PageResult<u8> = envelope.into();
        assert_eq!(page.total_count, 2);
    }
}
