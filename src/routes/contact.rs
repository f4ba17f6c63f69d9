use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::models::ContactRequest;
use crate::routes::{error_response, AppState};
use crate::services::ContactError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit_contact));
}

/// Contact form endpoint
///
/// POST /api/v1/contact
async fn submit_contact(
    state: web::Data<AppState>,
    body: web::Json<ContactRequest>,
) -> impl Responder {
    match state.contact.submit(&body).await {
        Ok(receipt) => HttpResponse::Accepted().json(receipt),
        Err(ContactError::Validation(errors)) => {
            error_response(StatusCode::BAD_REQUEST, "Validation failed", errors)
        }
    }
}
