//! Wire contracts and the framework-free list-query core shared by the
//! admin console.

pub mod domain;
pub mod enums;
pub mod shared;
