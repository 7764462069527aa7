use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::error_response;
use crate::{
    core::{Notification, PresetDialog},
    models::{AddWordRequest, DeleteWordQuery, EditWordRequest, WordBankResponse, WordChangeResponse},
    state::AppState,
};

/// List the word bank
pub async fn list_words(State(state): State<AppState>) -> Json<WordBankResponse> {
    let bank = state.word_bank.read().await;
    Json(WordBankResponse::from_bank(&bank))
}

/// Add a word to the bank
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `request` - JSON body with the raw word
///
/// # Returns
///
/// 201 with the stored word and updated bank, or 400 on invalid input
pub async fn add_word(
    State(state): State<AppState>,
    Json(request): Json<AddWordRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut bank = state.word_bank.write().await;
    let word = bank.add(&request.word).map_err(error_response)?;

    state.broadcast(&[Notification::WordBankChanged { size: bank.size() }]);

    Ok((
        StatusCode::CREATED,
        Json(WordChangeResponse {
            status: "added".to_string(),
            word: Some(word),
            bank: WordBankResponse::from_bank(&bank),
        }),
    ))
}

/// Replace the word at `index`
///
/// A `null` word means the client's edit prompt was cancelled; nothing
/// changes and the status is "cancelled".
///
/// # Arguments
///
/// * `index` - Position of the word in the bank
/// * `state` - Shared application state
/// * `request` - JSON body with the replacement word
pub async fn edit_word(
    Path(index): Path<usize>,
    State(state): State<AppState>,
    Json(request): Json<EditWordRequest>,
) -> Result<Json<WordChangeResponse>, (StatusCode, String)> {
    let mut bank = state.word_bank.write().await;

    let mut dialog = PresetDialog::responding(request.word);
    let edited = bank
        .edit_with(index, &mut dialog)
        .map_err(error_response)?;

    let (status, word) = if edited {
        state.broadcast(&[Notification::WordBankChanged { size: bank.size() }]);
        ("edited", bank.entries().get(index).cloned())
    } else {
        ("cancelled", None)
    };

    Ok(Json(WordChangeResponse {
        status: status.to_string(),
        word,
        bank: WordBankResponse::from_bank(&bank),
    }))
}

/// Delete the word at `index`
///
/// Requires `?confirm=true`; without it the request is a no-op with status
/// "cancelled".
///
/// # Arguments
///
/// * `index` - Position of the word in the bank
/// * `query` - Confirmation flag
/// * `state` - Shared application state
pub async fn delete_word(
    Path(index): Path<usize>,
    Query(query): Query<DeleteWordQuery>,
    State(state): State<AppState>,
) -> Result<Json<WordChangeResponse>, (StatusCode, String)> {
    let mut bank = state.word_bank.write().await;

    let word = bank.entries().get(index).cloned();
    let mut dialog = PresetDialog::confirmed(query.confirm);
    let deleted = bank
        .delete_with(index, &mut dialog)
        .map_err(error_response)?;

    let (status, word) = if deleted {
        state.broadcast(&[Notification::WordBankChanged { size: bank.size() }]);
        ("deleted", word)
    } else {
        ("cancelled", None)
    };

    Ok(Json(WordChangeResponse {
        status: status.to_string(),
        word,
        bank: WordBankResponse::from_bank(&bank),
    }))
}
