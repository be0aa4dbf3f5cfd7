use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DocumentExtractor, ImagePublisher, VideoGenerator};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, upload_and_generate_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, P, G>(state: AppState<E, P, G>) -> Router
where
    E: DocumentExtractor + 'static,
    P: ImagePublisher + 'static,
    G: VideoGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Unmatched routes fall through to the prebuilt single-page app.
    let spa = ServeDir::new(&state.server.static_dir).fallback(ServeFile::new(format!(
        "{}/index.html",
        state.server.static_dir
    )));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/upload-and-generate",
            post(upload_and_generate_handler::<E, P, G>),
        )
        .fallback_service(spa)
        .layer(DefaultBodyLimit::max(
            state.server.max_upload_mb * 1024 * 1024,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
