// File: services/calbook_backend/src/main.rs
use axum::{routing::get, Router};
use calbook_common::logging;
use calbook_config::{load_settings, ConfigSource, ConfigStore, DEFAULT_TIMEZONE};
use calbook_scheduling::handlers::SchedulingState;
use calbook_scheduling::routes as scheduling_routes;
use calbook_scheduling::store::BookingStore;
use chrono_tz::Tz;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    logging::init();

    let settings = load_settings().expect("Failed to load server settings");

    let state = Arc::new(SchedulingState {
        config_store: ConfigStore::new(settings.config_path()),
        booking_store: BookingStore::new(settings.bookings_path()),
    });

    // Touch the owner config once at startup so a fresh data directory is
    // seeded before the first request arrives.
    match state.config_store.load_or_init().await {
        Ok((config, source)) => {
            match source {
                ConfigSource::Loaded => info!(
                    "Loaded scheduling config from {}",
                    state.config_store.path().display()
                ),
                ConfigSource::Initialized => info!(
                    "Initialized default scheduling config at {}",
                    state.config_store.path().display()
                ),
            }
            if config.timezone.parse::<Tz>().is_err() {
                warn!(
                    "Configured timezone {:?} is not a known IANA name, slots will use {}",
                    config.timezone, DEFAULT_TIMEZONE
                );
            }
        }
        Err(err) => warn!("Could not seed scheduling config: {}", err),
    }

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Calbook API!" }))
        .merge(scheduling_routes::routes(state.clone()));

    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use calbook_scheduling::doc::SchedulingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        println!("📖 Adding Swagger UI at /api/docs");
        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", SchedulingApiDoc::openapi());
        app = app.merge(swagger_ui);
    }

    // The booking page and its assets come straight off the public
    // directory; CORS stays permissive so the widget can be embedded.
    let app = app
        .fallback_service(ServeDir::new(&settings.public_dir))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
