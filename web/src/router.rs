use crate::controller::{health_check_controller, index_controller};
use crate::sse::handler::sse_handler;
use crate::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use log::*;
use service::config::Config;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

pub fn define_routes(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .merge(health_routes(app_state.clone()))
        .merge(index_routes(app_state.clone()))
        .merge(sse_routes(app_state.clone()))
        .merge(static_routes(&app_state.config))
        .layer(cors)
}

fn health_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_controller::health_check))
        .with_state(app_state)
}

fn index_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_controller::index))
        .with_state(app_state)
}

fn sse_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/sse", get(sse_handler))
        .with_state(app_state)
}

// Serves the landing page's scripts and stylesheets
fn static_routes(config: &Config) -> Router {
    Router::new().nest_service("/static", ServeDir::new(config.static_dir()))
}

fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.allowed_origins))
        .allow_methods([Method::GET])
}

// A `*` entry allows every origin; tower-http rejects it inside an origin list
fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin.trim() == "*") {
        info!("CORS allows requests from any origin");
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {origin}: {e}");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
