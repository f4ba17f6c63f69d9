// Core query layer exports
pub mod browser;
pub mod catalog;
pub mod filters;
pub mod search;

pub use browser::{Browser, BrowseResult, CombineMode};
pub use catalog::{Catalog, CatalogError};
pub use filters::{filter_pets, matches_criteria};
pub use search::{matches_text, search_pets};
