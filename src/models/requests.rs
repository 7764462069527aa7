use serde::{Deserialize, Serialize};

/// Request to add a word to the bank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddWordRequest {
    /// Raw word input; normalized and validated by the word bank
    pub word: String,
}

/// Request to edit a word in the bank
///
/// `word: null` means the edit prompt was cancelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditWordRequest {
    #[serde(default)]
    pub word: Option<String>,
}

/// Query parameters for deleting a word
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteWordQuery {
    /// Whether the user confirmed the deletion
    #[serde(default)]
    pub confirm: bool,
}

/// Request to start a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartMatchRequest {
    pub player1: String,
    pub player2: String,
}

/// Letter guess from the on-screen or physical keyboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    /// A single letter A-Z (either case)
    pub letter: String,
}

impl GuessRequest {
    /// Validate and clean the guessed letter
    ///
    /// # Arguments
    ///
    /// * `letter` - Raw letter input
    ///
    /// # Returns
    ///
    /// The uppercase letter if valid, error message otherwise
    ///
    /// # Validation Rules
    ///
    /// - Exactly one character after trimming
    /// - Must be an ASCII letter
    pub fn validate_letter(letter: &str) -> Result<char, String> {
        let mut chars = letter.trim().chars();

        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err("Guess must be a single letter".to_string());
        };

        if !c.is_ascii_alphabetic() {
            return Err("Guess must be a letter from A to Z".to_string());
        }

        Ok(c.to_ascii_uppercase())
    }
}
