use serde::{Deserialize, Serialize};

/// Represents one of the two players in a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player's display name
    pub name: String,
    /// Points accumulated over the match
    pub score: u32,
}

impl Player {
    /// Create a new player with a zero score
    ///
    /// # Arguments
    ///
    /// * `name` - The player's display name (already validated)
    pub fn new(name: String) -> Self {
        Self { name, score: 0 }
    }

    /// Convert player to a JSON value for API responses
    ///
    /// # Arguments
    ///
    /// * `is_active` - Whether it is this player's turn
    pub fn to_dict(&self, is_active: bool) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "score": self.score,
            "is_active": is_active,
        })
    }
}

/// Which of the two players is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// The player whose turn comes next
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Position in the players array
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// 1-based player number
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}
