use crate::core::error::ValidationError;

/// Normalize raw word input (trim and uppercase)
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Normalize and validate a candidate word bank entry
///
/// This is the only place word input is checked; both adding and editing
/// go through it. Duplicate detection needs the bank and lives in
/// `WordBank`.
///
/// # Arguments
///
/// * `raw` - Raw user input
///
/// # Returns
///
/// The normalized word if it is non-empty and only contains A-Z
///
/// # Errors
///
/// * `ValidationError::Empty` - nothing left after trimming
/// * `ValidationError::InvalidChars` - digits, punctuation, spaces, accents...
pub fn validate_word(raw: &str) -> Result<String, ValidationError> {
    let word = normalize_word(raw);

    if word.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !is_valid_word(&word) {
        return Err(ValidationError::InvalidChars);
    }

    Ok(word)
}

/// Check that a normalized word matches `^[A-Z]+$`
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase())
}

/// Validate the two player names for a new match
///
/// # Returns
///
/// Both names trimmed
///
/// # Errors
///
/// * `ValidationError::EmptyName` - either name is blank
/// * `ValidationError::DuplicateName` - names are equal ignoring case
pub fn validate_player_names(
    name1: &str,
    name2: &str,
) -> Result<(String, String), ValidationError> {
    let name1 = name1.trim();
    let name2 = name2.trim();

    if name1.is_empty() || name2.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name1.to_lowercase() == name2.to_lowercase() {
        return Err(ValidationError::DuplicateName);
    }

    Ok((name1.to_string(), name2.to_string()))
}

/// Normalize a guessed character to an uppercase A-Z letter
pub fn normalize_letter(letter: char) -> Option<char> {
    let upper = letter.to_ascii_uppercase();
    upper.is_ascii_uppercase().then_some(upper)
}
