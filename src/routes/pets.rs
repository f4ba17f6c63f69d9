use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::models::{BrowseParams, FilterCriteria, HealthResponse, PetListResponse, PetType, RecentParams};
use crate::routes::{error_response, AppState};

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/pets", web::get().to(browse_pets))
        .route("/pets/filter", web::post().to(filter_pets))
        .route("/pets/recent", web::get().to(recent_pets))
        .route("/pets/type/{pet_type}", web::get().to(pets_by_type))
        .route("/pets/{id}", web::get().to(get_pet));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
    })
}

/// Browse endpoint: free-text search combined with structured filters
///
/// GET /api/v1/pets?q=beagle&type=dog&minAge=1&maxAge=3&vaccinated=true
async fn browse_pets(
    state: web::Data<AppState>,
    params: web::Query<BrowseParams>,
) -> impl Responder {
    let criteria = params.criteria();
    let result = state.browser.browse(&state.catalog, params.query(), &criteria);

    tracing::debug!(
        "Browse q={:?} mode={:?}: {} of {} pets",
        params.q,
        state.browser.mode(),
        result.pets.len(),
        result.total_pets
    );

    HttpResponse::Ok().json(PetListResponse {
        count: result.pets.len(),
        pets: result.pets,
        total_pets: result.total_pets,
        search_applied: result.search_applied,
        filter_applied: result.filter_applied,
        criteria: (!criteria.is_empty()).then_some(criteria),
    })
}

/// Structured filter endpoint
///
/// POST /api/v1/pets/filter
///
/// Request body:
/// ```json
/// {
///   "type": "dog",
///   "age": { "min": 2, "max": 3 },
///   "location": "hyd",
///   "vaccinated": true
/// }
/// ```
async fn filter_pets(
    state: web::Data<AppState>,
    criteria: web::Json<FilterCriteria>,
) -> impl Responder {
    let criteria = criteria.into_inner();
    let pets = state.catalog.filter(&criteria);

    HttpResponse::Ok().json(PetListResponse {
        count: pets.len(),
        pets,
        total_pets: state.catalog.len(),
        search_applied: false,
        filter_applied: !criteria.is_empty(),
        criteria: Some(criteria),
    })
}

/// Most recently listed pets
async fn recent_pets(
    state: web::Data<AppState>,
    params: web::Query<RecentParams>,
) -> impl Responder {
    let limit = params.limit.unwrap_or(state.recent_limit);
    let pets = state.catalog.recent(limit);

    HttpResponse::Ok().json(PetListResponse {
        count: pets.len(),
        pets,
        total_pets: state.catalog.len(),
        search_applied: false,
        filter_applied: false,
        criteria: None,
    })
}

async fn pets_by_type(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Some(pet_type) = PetType::parse(&path) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid pet type",
            "Pet type must be one of: dog, cat, bird, small-animal, reptile",
        );
    };

    let pets = state.catalog.by_type(pet_type);
    HttpResponse::Ok().json(PetListResponse {
        count: pets.len(),
        pets,
        total_pets: state.catalog.len(),
        search_applied: false,
        filter_applied: true,
        criteria: Some(FilterCriteria {
            pet_type: Some(pet_type),
            ..Default::default()
        }),
    })
}

async fn get_pet(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match state.catalog.get(&path) {
        Some(pet) => HttpResponse::Ok().json(pet),
        None => error_response(
            StatusCode::NOT_FOUND,
            "Pet not found",
            format!("No pet with id {}", path.as_str()),
        ),
    }
}
