pub mod aggregate;

pub use aggregate::{Category, CreateCategoryRequest, Subcategory, FIELD_TYPES};
