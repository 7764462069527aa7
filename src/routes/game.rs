use axum::{extract::State, http::StatusCode, Json};

use super::error_response;
use crate::{
    models::{CommandResponse, GuessRequest, StartMatchRequest},
    state::AppState,
};

/// Current match state
pub async fn get_match(State(state): State<AppState>) -> Json<serde_json::Value> {
    let engine = state.engine.read().await;
    Json(engine.get_state())
}

/// Start a new match and its first round
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `request` - JSON body with both player names
///
/// # Returns
///
/// Emitted notifications and the new match state, or 400 for invalid names
/// or an empty word bank
pub async fn start_match(
    State(state): State<AppState>,
    Json(request): Json<StartMatchRequest>,
) -> Result<Json<CommandResponse>, (StatusCode, String)> {
    let bank = state.word_bank.read().await;
    let mut engine = state.engine.write().await;

    let events = engine
        .start_match(&request.player1, &request.player2, &bank)
        .map_err(error_response)?;

    state.broadcast(&events);

    Ok(Json(CommandResponse {
        events,
        state: engine.get_state(),
    }))
}

/// Start the next round of the current match
///
/// # Returns
///
/// Emitted notifications and match state, 409 if no match is in progress,
/// or 400 if the word bank is empty
pub async fn next_round(
    State(state): State<AppState>,
) -> Result<Json<CommandResponse>, (StatusCode, String)> {
    let bank = state.word_bank.read().await;
    let mut engine = state.engine.write().await;

    let events = engine.next_round(&bank).map_err(error_response)?;

    state.broadcast(&events);

    Ok(Json(CommandResponse {
        events,
        state: engine.get_state(),
    }))
}

/// Guess a letter in the current round
///
/// Guesses that change nothing (repeated letter, no active round) succeed
/// with an empty event list.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `request` - JSON body with the letter
pub async fn guess_letter(
    State(state): State<AppState>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<CommandResponse>, (StatusCode, String)> {
    let letter =
        GuessRequest::validate_letter(&request.letter).map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let mut engine = state.engine.write().await;
    let events = engine.guess(letter);

    if events.is_empty() {
        tracing::debug!("Guess {} changed nothing", letter);
    }

    state.broadcast(&events);

    Ok(Json(CommandResponse {
        events,
        state: engine.get_state(),
    }))
}
