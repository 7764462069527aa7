use serde::{Deserialize, Serialize};

/// Result of evaluating a round after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Won,
    Lost,
    Continue,
}

/// Check if every distinct letter of the word has been guessed
///
/// # Arguments
///
/// * `word` - The round's word
/// * `guessed` - Letters guessed so far
pub fn check_word_complete(word: &str, guessed: &[char]) -> bool {
    word.chars().all(|letter| guessed.contains(&letter))
}

/// Check if the wrong-guess budget is used up
pub fn check_out_of_lives(wrong_guesses: usize, max_wrong: usize) -> bool {
    wrong_guesses >= max_wrong
}

/// Determine the state of a round
///
/// A completed word wins even if the same guess used up the last life.
///
/// # Arguments
///
/// * `word` - The round's word
/// * `guessed` - Letters guessed so far
/// * `wrong_guesses` - Number of wrong guesses so far
/// * `max_wrong` - Wrong guesses allowed
pub fn determine_outcome(
    word: &str,
    guessed: &[char],
    wrong_guesses: usize,
    max_wrong: usize,
) -> RoundOutcome {
    if check_word_complete(word, guessed) {
        return RoundOutcome::Won;
    }

    if check_out_of_lives(wrong_guesses, max_wrong) {
        return RoundOutcome::Lost;
    }

    RoundOutcome::Continue
}
