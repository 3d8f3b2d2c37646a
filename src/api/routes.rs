//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::{HealthResponse, SuccessResponse};
use crate::contact::ContactRequest;
use crate::middleware::{cors_layer, origin_guard};
use crate::portfolio::{Education, Profile, Project, Skill, SocialLinks};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        description = "Static portfolio data and contact-form submission.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        handlers::get_portfolio,
        handlers::submit_contact,
        handlers::health_check,
    ),
    components(schemas(
        Profile,
        Education,
        SocialLinks,
        Skill,
        Project,
        ContactRequest,
        SuccessResponse,
        HealthResponse,
    )),
    tags(
        (name = "Portfolio", description = "Portfolio data"),
        (name = "Contact", description = "Contact form"),
        (name = "Health", description = "Liveness checks"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let settings = &state.settings;

    let api_routes = Router::new()
        .route("/portfolio", get(handlers::get_portfolio))
        .route("/contact", post(handlers::submit_contact))
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(openapi_json));

    let images = ServeDir::new(&settings.assets.images_dir);

    Router::new()
        .nest("/api", api_routes)
        // Static images; missing files are answered with 404 by ServeDir
        .nest_service(&settings.assets.mount_path, images)
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(settings.server.body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.server.request_timeout_secs,
        )))
        .layer(cors_layer(state.allowed_origins.clone()))
        // Outside the CORS layer so disallowed preflights are refused too
        .layer(middleware::from_fn_with_state(
            state.allowed_origins.clone(),
            origin_guard,
        ))
        .layer(TraceLayer::new_for_http())
}
