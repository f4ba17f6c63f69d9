//! Pet Adoption - catalog browsing and adoption service
//!
//! The core of this library is a pure query layer over a read-only pet
//! catalog: free-text search, structured filtering and their combination.
//! Around it sit mock sessions, favorites, adoption applications and a
//! contact form, all backed by an injected key-value [`services::Storage`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Browser, BrowseResult, Catalog, CatalogError, CombineMode, filter_pets, search_pets};
pub use models::{Pet, PetType, Gender, Size, AgeRange, FilterCriteria};
