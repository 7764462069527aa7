//! Word bank persistence across restarts
//!
//! Each test opens a file store in a temporary directory, mutates the bank
//! through the API, then reloads from disk the way a restarted server would.

use axum::http::StatusCode;
use axum_test::TestServer;
use hangman_duel::{
    core::{RoundEngine, WordBank, DEFAULT_WORDS},
    routes,
    state::AppState,
    storage::JsonFileStore,
};
use serde_json::{json, Value};
use std::path::Path;
use tempfile::tempdir;

fn load_bank(path: &Path) -> WordBank {
    let store = JsonFileStore::open(path).unwrap();
    WordBank::load(Box::new(store)).unwrap()
}

fn create_test_server(path: &Path) -> TestServer {
    let state = AppState::new(load_bank(path), RoundEngine::with_seed(7));
    TestServer::new(routes::router(state, routes::cors_layer(false, 8000))).unwrap()
}

#[test]
fn test_first_run_writes_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let bank = load_bank(&path);

    assert_eq!(bank.size(), DEFAULT_WORDS.len());
    assert!(path.exists());
    assert_eq!(load_bank(&path).entries(), bank.entries());
}

#[test]
fn test_corrupt_file_replaced_by_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"wordBank": "not a list"}"#).unwrap();

    let bank = load_bank(&path);

    assert_eq!(bank.size(), DEFAULT_WORDS.len());
    assert_eq!(load_bank(&path).size(), DEFAULT_WORDS.len());
}

#[tokio::test]
async fn test_changes_survive_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let server = create_test_server(&path);

        let response = server.post("/api/words").json(&json!({ "word": "gitops" })).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let response = server
            .put("/api/words/0")
            .json(&json!({ "word": "podman" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let response = server
            .delete("/api/words/1")
            .add_query_param("confirm", "true")
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let server = create_test_server(&path);
    let body = server.get("/api/words").await.json::<Value>();
    let words: Vec<String> = serde_json::from_value(body["words"].clone()).unwrap();

    assert_eq!(words.len(), DEFAULT_WORDS.len());
    assert_eq!(words[0], "PODMAN");
    assert_eq!(words[1], DEFAULT_WORDS[2]);
    assert_eq!(words.last().map(String::as_str), Some("GITOPS"));
}

#[tokio::test]
async fn test_emptied_bank_stays_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let server = create_test_server(&path);
        for _ in 0..DEFAULT_WORDS.len() {
            let response = server
                .delete("/api/words/0")
                .add_query_param("confirm", "true")
                .await;
            assert_eq!(response.status_code(), StatusCode::OK);
        }
    }

    let server = create_test_server(&path);
    let body = server.get("/api/words").await.json::<Value>();
    assert_eq!(body["count"], 0);

    let response = server
        .post("/api/match")
        .json(&json!({ "player1": "Ana", "player2": "Bo" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
