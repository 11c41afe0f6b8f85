//! Value objects embedded in several aggregates

mod contact_details;
mod lenient;
mod named_ref;
mod record_id;

pub use contact_details::ContactDetails;
pub use lenient::{deserialize_id, deserialize_opt_count};
pub use named_ref::NamedRef;
pub use record_id::RecordId;
