use serde::{Deserialize, Serialize};
use crate::models::domain::{Adoption, FilterCriteria, Pet, User};

/// Response for catalog listings
#[derive(Debug, Clone, Serialize)]
pub struct PetListResponse<'a> {
    pub pets: Vec<&'a Pet>,
    pub count: usize,
    #[serde(rename = "totalPets")]
    pub total_pets: usize,
    #[serde(rename = "searchApplied")]
    pub search_applied: bool,
    #[serde(rename = "filterApplied")]
    pub filter_applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<FilterCriteria>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Issued on login or registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

/// Favorites view for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesResponse<'a> {
    #[serde(rename = "petIds")]
    pub pet_ids: Vec<String>,
    pub pets: Vec<&'a Pet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteResponse {
    #[serde(rename = "petId")]
    pub pet_id: String,
    pub favorited: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionsResponse {
    pub adoptions: Vec<Adoption>,
    pub count: usize,
}
