use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use hostel_config::{AllowedOrigins, CorsConfig};
use hostel_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::profiles::router::init_profiles_router;
use crate::modules::slips::router::init_slips_router;
use crate::modules::students::router::init_students_router;
use crate::modules::warnings::router::init_warnings_router;
use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Hostel Management System API";

async fn home() -> &'static str {
    WELCOME_MESSAGE
}

async fn not_found() -> AppError {
    AppError::unknown_route()
}

async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    match &config.allowed_origins {
        AllowedOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        AllowedOrigins::List(origins) => {
            let allowed_origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        }
    }
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(home))
        .nest(
            "/api",
            Router::new()
                .merge(init_auth_router())
                .nest("/students", init_students_router())
                .nest("/slips", init_slips_router())
                .nest("/warnings", init_warnings_router())
                .nest("/profiles", init_profiles_router()),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
