pub mod aggregate;

pub use aggregate::{LocationLevel, LocationOption};
