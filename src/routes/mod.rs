pub mod game;
pub mod health;
pub mod websocket;
pub mod words;

use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{core::GameError, state::AppState};

/// Build the router with all routes
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `cors` - CORS policy to apply
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health and root
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Word bank
        .route("/api/words", get(words::list_words).post(words::add_word))
        .route(
            "/api/words/:index",
            put(words::edit_word).delete(words::delete_word),
        )
        // Match
        .route("/api/match", get(game::get_match).post(game::start_match))
        .route("/api/match/next-round", post(game::next_round))
        .route("/api/match/guess", post(game::guess_letter))
        // WebSocket
        .route("/ws", get(websocket::websocket_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS policy: same-origin only, plus localhost origins in development
pub fn cors_layer(development: bool, port: u16) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if !development {
        return cors;
    }

    let origins: Vec<axum::http::HeaderValue> = [
        format!("http://localhost:{}", port),
        format!("http://127.0.0.1:{}", port),
    ]
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();

    cors.allow_origin(origins)
}

/// Map a core error to an HTTP status and message
pub fn error_response(err: GameError) -> (StatusCode, String) {
    let status = match &err {
        GameError::Validation(_) => StatusCode::BAD_REQUEST,
        GameError::Index { .. } => StatusCode::NOT_FOUND,
        GameError::MatchNotStarted => StatusCode::CONFLICT,
        GameError::Storage(e) => {
            tracing::error!("Storage failure: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, err.to_string())
}
