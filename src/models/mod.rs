// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Pet, PetType, Gender, Size, AgeRange, FilterCriteria, User, Adoption, AdoptionStatus, ContactReceipt};
pub use requests::{BrowseParams, RecentParams, RegisterRequest, LoginRequest, AdoptionRequest, ContactRequest};
pub use responses::{PetListResponse, HealthResponse, ErrorResponse, SessionResponse, FavoritesResponse, ToggleFavoriteResponse, AdoptionsResponse};
