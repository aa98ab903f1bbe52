pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pool;
pub mod repository;
pub mod service;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use handlers::rest;
use service::NoteService;

/// Builds the full HTTP surface: the notes resource under `/api`, the
/// OpenAPI document and Swagger UI, and a liveness route at `/`.
pub fn app(service: Arc<NoteService>) -> Router {
    let rest_router = Router::new()
        .route(
            "/notes",
            get(rest::get_all_notes)
                .post(rest::create_note)
                .put(rest::update_note)
                .delete(rest::delete_note),
        )
        .with_state(service);

    Router::new()
        .route("/", get(root))
        .nest("/api", rest_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "Notes server is up").into_response()
}
