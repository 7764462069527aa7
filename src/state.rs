use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{Notification, RoundEngine, WordBank};

/// Shared application state
///
/// Handlers that need both locks take the word bank first, then the engine.
#[derive(Clone)]
pub struct AppState {
    pub word_bank: Arc<RwLock<WordBank>>,
    pub engine: Arc<RwLock<RoundEngine>>,
    /// Broadcast channel for WebSocket notifications
    pub broadcast_tx: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(word_bank: WordBank, engine: RoundEngine) -> Self {
        let (broadcast_tx, _) = broadcast::channel(100);

        Self {
            word_bank: Arc::new(RwLock::new(word_bank)),
            engine: Arc::new(RwLock::new(engine)),
            broadcast_tx,
        }
    }

    /// Send notifications to all connected WebSocket clients
    ///
    /// Errors from having no subscribers are ignored.
    pub fn broadcast(&self, events: &[Notification]) {
        for event in events {
            match serde_json::to_string(event) {
                Ok(msg_text) => {
                    tracing::debug!("📢 Broadcasting {}", event.event_name());
                    let _ = self.broadcast_tx.send(msg_text);
                }
                Err(e) => tracing::warn!("Failed to serialize {}: {}", event.event_name(), e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn test_state() -> AppState {
        let bank = WordBank::load(Box::new(MemoryStore::new())).unwrap();
        AppState::new(bank, RoundEngine::with_seed(1))
    }

    #[tokio::test]
    async fn test_broadcast_reaches_subscribers() {
        let state = test_state();
        let mut rx = state.broadcast_tx.subscribe();

        state.broadcast(&[Notification::WordBankChanged { size: 3 }]);

        let msg = rx.recv().await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&msg).unwrap();
        assert_eq!(value["type"], "word_bank_changed");
        assert_eq!(value["size"], 3);
    }

    #[test]
    fn test_broadcast_without_subscribers() {
        let state = test_state();
        state.broadcast(&[Notification::WordBankChanged { size: 0 }]);
    }
}
