pub mod display;
pub mod validation;
pub mod win_conditions;

pub use display::{masked_word, wrong_letters};
pub use validation::{normalize_letter, normalize_word, validate_player_names, validate_word};
pub use win_conditions::{check_out_of_lives, check_word_complete, determine_outcome, RoundOutcome};
