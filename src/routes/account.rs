use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use crate::models::{
    AdoptionRequest, AdoptionsResponse, FavoritesResponse, LoginRequest, RegisterRequest,
    SessionResponse, ToggleFavoriteResponse, User,
};
use crate::routes::{error_response, AppState};
use crate::services::{resolve_favorites, AdoptionError, AuthError};
use validator::Validate;

/// Configure session, favorites and adoption routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/register", web::post().to(register))
        .route("/auth/login", web::post().to(login))
        .route("/auth/logout", web::post().to(logout))
        .route("/auth/me", web::get().to(me))
        .route("/favorites", web::get().to(list_favorites))
        .route("/favorites/{pet_id}", web::post().to(toggle_favorite))
        .route("/favorites/{pet_id}", web::delete().to(remove_favorite))
        .route("/pets/{id}/adopt", web::post().to(adopt_pet))
        .route("/adoptions", web::get().to(list_adoptions));
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn auth_error_response(err: AuthError) -> HttpResponse {
    match err {
        AuthError::InvalidCredentials | AuthError::InvalidRegistration => {
            error_response(StatusCode::BAD_REQUEST, &err.to_string(), "All fields are required and the password must meet the minimum length")
        }
        AuthError::Unauthenticated => {
            error_response(StatusCode::UNAUTHORIZED, "Not authenticated", "A valid session token is required")
        }
        AuthError::Token(_) | AuthError::Storage(_) => {
            tracing::error!("Session failure: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Session error", err)
        }
    }
}

/// Resolve the caller's session or produce the response to send instead
async fn authenticate(state: &AppState, req: &HttpRequest) -> Result<User, HttpResponse> {
    let Some(token) = bearer_token(req) else {
        return Err(auth_error_response(AuthError::Unauthenticated));
    };
    state.auth.current_user(token).await.map_err(auth_error_response)
}

fn storage_failure(context: &str, err: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, context, err)
}

async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    match state.auth.register(&body.name, &body.email, &body.password).await {
        Ok((token, user)) => HttpResponse::Created().json(SessionResponse { token, user }),
        Err(e) => auth_error_response(e),
    }
}

async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    match state.auth.login(&body.email, &body.password).await {
        Ok((token, user)) => HttpResponse::Ok().json(SessionResponse { token, user }),
        Err(e) => auth_error_response(e),
    }
}

async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let Some(token) = bearer_token(&req) else {
        return auth_error_response(AuthError::Unauthenticated);
    };

    match state.auth.logout(token).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => auth_error_response(e),
    }
}

async fn me(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    match authenticate(&state, &req).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(response) => response,
    }
}

/// Favorites with their catalog records, for the dashboard
async fn list_favorites(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match authenticate(&state, &req).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match state.favorites.list(&user.id).await {
        Ok(pet_ids) => {
            let pets = resolve_favorites(&state.catalog, &pet_ids);
            HttpResponse::Ok().json(FavoritesResponse { pet_ids, pets })
        }
        Err(e) => storage_failure("Failed to load favorites", e),
    }
}

async fn toggle_favorite(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let user = match authenticate(&state, &req).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let pet_id = path.into_inner();
    if state.catalog.get(&pet_id).is_none() {
        return error_response(StatusCode::NOT_FOUND, "Pet not found", format!("No pet with id {}", pet_id));
    }

    match state.favorites.toggle(&user.id, &pet_id).await {
        Ok(favorited) => HttpResponse::Ok().json(ToggleFavoriteResponse { pet_id, favorited }),
        Err(e) => storage_failure("Failed to update favorites", e),
    }
}

async fn remove_favorite(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let user = match authenticate(&state, &req).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match state.favorites.remove(&user.id, &path).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => storage_failure("Failed to update favorites", e),
    }
}

/// Adoption application endpoint
///
/// POST /api/v1/pets/{id}/adopt
///
/// Request body:
/// ```json
/// {
///   "reason": "string",
///   "experience": "first-time|previous|current|expert",
///   "housing": "house|house-no-yard|apartment|condo|other"
/// }
/// ```
async fn adopt_pet(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<AdoptionRequest>,
) -> impl Responder {
    let user = match authenticate(&state, &req).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let Some(pet) = state.catalog.get(&path) else {
        return error_response(StatusCode::NOT_FOUND, "Pet not found", format!("No pet with id {}", path.as_str()));
    };

    match state.adoptions.submit(&user.id, pet, &body).await {
        Ok(adoption) => HttpResponse::Created().json(adoption),
        Err(AdoptionError::Validation(errors)) => {
            tracing::info!("Adoption application rejected for {}: {}", user.id, errors);
            error_response(StatusCode::BAD_REQUEST, "Validation failed", errors)
        }
        Err(AdoptionError::Storage(e)) => storage_failure("Failed to record adoption", e),
    }
}

async fn list_adoptions(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match authenticate(&state, &req).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match state.adoptions.list(&user.id).await {
        Ok(adoptions) => HttpResponse::Ok().json(AdoptionsResponse {
            count: adoptions.len(),
            adoptions,
        }),
        Err(e) => storage_failure("Failed to load adoptions", e),
    }
}
