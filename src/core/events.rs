use serde::{Deserialize, Serialize};

use super::hangman::BodyPart;

/// State change emitted by a core operation for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    MatchStarted {
        match_id: String,
        player1: String,
        player2: String,
    },
    RoundStarted {
        round: u32,
        word_length: usize,
        player: String,
    },
    CorrectGuess {
        letter: char,
        masked_word: String,
    },
    WrongGuess {
        letter: char,
        /// 1-based hangman stage
        stage: usize,
        part: BodyPart,
        lives: usize,
    },
    RoundWon {
        winner: String,
        word: String,
        score: u32,
    },
    RoundLost {
        loser: String,
        word: String,
    },
    WordBankChanged {
        size: usize,
    },
}

impl Notification {
    /// Event name used on the wire
    pub fn event_name(&self) -> &'static str {
        match self {
            Notification::MatchStarted { .. } => "match_started",
            Notification::RoundStarted { .. } => "round_started",
            Notification::CorrectGuess { .. } => "correct_guess",
            Notification::WrongGuess { .. } => "wrong_guess",
            Notification::RoundWon { .. } => "round_won",
            Notification::RoundLost { .. } => "round_lost",
            Notification::WordBankChanged { .. } => "word_bank_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_guess_wire_format() {
        let event = Notification::WrongGuess {
            letter: 'Q',
            stage: 2,
            part: BodyPart::Body,
            lives: 4,
        };

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "wrong_guess");
        assert_eq!(value["letter"], "Q");
        assert_eq!(value["stage"], 2);
        assert_eq!(value["part"], "body");
        assert_eq!(value["lives"], 4);
        assert_eq!(event.event_name(), "wrong_guess");
    }

    #[test]
    fn test_round_won_wire_format() {
        let event = Notification::RoundWon {
            winner: "Ana".to_string(),
            word: "MERGE".to_string(),
            score: 10,
        };

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], event.event_name());
        assert_eq!(value["winner"], "Ana");
        assert_eq!(value["word"], "MERGE");
    }
}
