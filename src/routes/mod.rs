// Route exports
pub mod account;
pub mod contact;
pub mod pets;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use crate::core::{Browser, Catalog};
use crate::models::ErrorResponse;
use crate::services::{AdoptionService, AuthService, ContactService, FavoritesService};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub browser: Browser,
    pub recent_limit: usize,
    pub auth: AuthService,
    pub favorites: FavoritesService,
    pub adoptions: AdoptionService,
    pub contact: ContactService,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(pets::configure)
            .configure(account::configure)
            .configure(contact::configure),
    );
}

/// Build a JSON error body with the given status
pub fn error_response(status: StatusCode, error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let message = format!("Invalid JSON: {}", err);
    error::InternalError::from_response(
        err,
        error_response(StatusCode::BAD_REQUEST, "invalid_json", message),
    )
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    let message = format!("Invalid query: {}", err);
    error::InternalError::from_response(
        err,
        error_response(StatusCode::BAD_REQUEST, "invalid_query", message),
    )
    .into()
}
