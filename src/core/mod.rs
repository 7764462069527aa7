pub mod constants;
pub mod dialog;
pub mod error;
pub mod events;
pub mod hangman;
pub mod player;
pub mod round_engine;
pub mod word_bank;

pub use constants::*;
pub use dialog::{Dialog, PresetDialog};
pub use error::{GameError, ValidationError};
pub use events::Notification;
pub use hangman::{BodyPart, LivesLevel};
pub use player::{Player, PlayerSlot};
pub use round_engine::{RoundEngine, RoundPhase, RoundState};
pub use word_bank::WordBank;
