//! Values derived from round state for the presentation layer.

/// Word with unguessed letters blanked, e.g. `M E R _ E`
pub fn masked_word(word: &str, guessed: &[char]) -> String {
    word.chars()
        .map(|letter| if guessed.contains(&letter) { letter } else { '_' })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters that are not in the word, in guess order
pub fn wrong_letters(word: &str, guessed: &[char]) -> Vec<char> {
    guessed
        .iter()
        .copied()
        .filter(|letter| !word.contains(*letter))
        .collect()
}
