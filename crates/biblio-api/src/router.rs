//! Route table and middleware assembly.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::handlers::{author, book, health, publisher};
use crate::middleware::{build_cors_layer, request_logging};
use crate::state::AppState;

/// Builds the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.uploads.max_size_bytes as usize;
    let cors = build_cors_layer(&state.config.server);

    Router::new()
        .route("/health", get(health::health))
        .merge(author_routes())
        .merge(book_routes())
        .merge(publisher_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/author", get(author::list).post(author::register))
        .route("/author/login", post(author::login))
        .route("/author/image-upload", post(author::image_upload))
        .route("/author/reset", delete(author::reset))
        .route("/author/name/{name}", get(author::search_by_name))
        .route(
            "/author/{id}",
            get(author::get).put(author::update).delete(author::delete),
        )
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/book", get(book::list).post(book::create))
        .route("/book/reset", delete(book::reset))
        .route("/book/title/{title}", get(book::search_by_title))
        .route(
            "/book/{id}",
            get(book::get).put(book::update).delete(book::delete),
        )
}

fn publisher_routes() -> Router<AppState> {
    Router::new()
        .route("/publisher", get(publisher::list).post(publisher::create))
        .route("/publisher/reset", delete(publisher::reset))
        .route("/publisher/name/{name}", get(publisher::search_by_name))
        .route(
            "/publisher/{id}",
            get(publisher::get)
                .put(publisher::update)
                .delete(publisher::delete),
        )
}
