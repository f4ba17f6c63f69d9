use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use pet_adoption::config::{Settings, StorageBackend};
use pet_adoption::core::{Browser, Catalog};
use pet_adoption::routes::{self, AppState};
use pet_adoption::services::{AdoptionService, AuthService, ContactService, FavoritesService, Storage};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting pet adoption service...");

    let catalog = match Catalog::load(settings.catalog.path.as_deref()) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };

    info!("Catalog loaded ({} pets)", catalog.len());

    let storage = match settings.storage.backend {
        StorageBackend::Memory => Storage::memory(),
        StorageBackend::Redis => match Storage::redis(&settings.storage.redis_url).await {
            Ok(storage) => storage,
            Err(e) => {
                error!("Failed to connect to Redis: {}", e);
                return Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e));
            }
        },
    };

    info!("Storage initialized ({} backend)", storage.backend_name());

    if settings.auth.jwt_secret == "change-me-in-production" {
        warn!("Using the default session secret; set PETS_JWT_SECRET");
    }

    let latency = Duration::from_millis(settings.forms.simulated_latency_ms);
    let browser = Browser::new(settings.browse.combine_mode);

    info!("Browser initialized with combine mode {:?}", browser.mode());

    let app_state = AppState {
        catalog,
        browser,
        recent_limit: settings.catalog.recent_limit,
        auth: AuthService::new(
            storage.clone(),
            &settings.auth.jwt_secret,
            settings.auth.session_ttl_secs,
            settings.auth.min_password_len,
        ),
        favorites: FavoritesService::new(storage.clone()),
        adoptions: AdoptionService::new(storage, latency),
        contact: ContactService::new(latency),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
