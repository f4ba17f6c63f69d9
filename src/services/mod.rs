// Service exports
pub mod adoptions;
pub mod auth;
pub mod contact;
pub mod favorites;
pub mod storage;

pub use adoptions::{AdoptionService, AdoptionError};
pub use auth::{AuthService, AuthError};
pub use contact::{ContactService, ContactError};
pub use favorites::{FavoritesService, resolve_favorites};
pub use storage::{Storage, StorageError, StorageKey, MemoryStore, RedisStore};
