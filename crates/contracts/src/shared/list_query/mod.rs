//! Filtered paginated list querying: filter state, wire request, debounce,
//! response sequencing and page-window arithmetic.

pub mod controller;
pub mod debounce;
pub mod filter_state;
pub mod page_result;
pub mod pagination;
pub mod request;
pub mod sequence;

pub use controller::{ListController, ListControllerConfig, PageSource, QueryOutcome};
pub use debounce::{DebounceGate, DebounceTicket, Scheduled};
pub use filter_state::{DateRange, FilterState};
pub use page_result::{ApiEnvelope, PagePayload, PageResult};
pub use pagination::{PageItem, PaginationWindow, DEFAULT_WINDOW_SIZE};
pub use request::{ListRequest, OptionsRequest};
pub use sequence::{RequestSequence, RequestTicket};
