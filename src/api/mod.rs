mod handlers;
pub mod middleware;

use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::index::ProjectIndex;
use middleware::SecurityConfig;

/// Router with security settings taken from the environment.
pub fn create_router(index: ProjectIndex) -> Router {
    create_router_with_security(index, SecurityConfig::from_env())
}

pub fn create_router_with_security(index: ProjectIndex, security: SecurityConfig) -> Router {
    let api = Router::new()
        // Projects
        .route("/projects", get(handlers::list_projects))
        .route("/projects/{id}", get(handlers::get_project))
        // Documents
        .route("/projects/{id}/docs", get(handlers::list_documents))
        .route("/projects/{id}/docs/{*path}", get(handlers::read_document))
        // Config
        .route("/config", get(handlers::get_config))
        .route("/config/search-paths", post(handlers::add_search_path))
        .route("/config/projects", post(handlers::add_project))
        .route_layer(from_fn_with_state(
            security.clone(),
            middleware::auth_middleware,
        ))
        // Health stays reachable without credentials
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&security))
        .with_state(index)
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    match &security.cors_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        None => CorsLayer::permissive(),
    }
}
