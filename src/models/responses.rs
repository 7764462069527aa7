use serde::{Deserialize, Serialize};

use crate::core::{Notification, WordBank};

/// Word bank listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBankResponse {
    /// Words in display order
    pub words: Vec<String>,
    /// Number of words
    pub count: usize,
}

impl WordBankResponse {
    pub fn from_bank(bank: &WordBank) -> Self {
        Self {
            words: bank.entries().to_vec(),
            count: bank.size(),
        }
    }
}

/// Result of a word bank mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordChangeResponse {
    /// "added", "edited", "deleted" or "cancelled"
    pub status: String,
    /// The word that was added, edited or removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Bank contents after the change
    pub bank: WordBankResponse,
}

/// Result of a match command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Notifications emitted by the command, in order
    pub events: Vec<Notification>,
    /// Match state after the command
    pub state: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_BANK_KEY;
    use crate::storage::MemoryStore;

    #[test]
    fn test_word_bank_response() {
        let store = MemoryStore::with_value(WORD_BANK_KEY, r#"["DOCKER","MERGE"]"#);
        let bank = WordBank::load(Box::new(store)).unwrap();

        let response = WordBankResponse::from_bank(&bank);

        assert_eq!(response.words, ["DOCKER", "MERGE"]);
        assert_eq!(response.count, 2);
    }

    #[test]
    fn test_cancelled_change_omits_word() {
        let response = WordChangeResponse {
            status: "cancelled".to_string(),
            word: None,
            bank: WordBankResponse {
                words: vec![],
                count: 0,
            },
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "cancelled");
        assert!(value.get("word").is_none());
        assert_eq!(value["bank"]["count"], 0);
    }
}
