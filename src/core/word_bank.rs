use std::fmt;

use super::constants::{DEFAULT_WORDS, WORD_BANK_KEY};
use super::dialog::Dialog;
use super::error::{GameError, Result, ValidationError};
use crate::services::validation::{normalize_word, validate_word};
use crate::storage::{KeyValueStore, StoreError};

/// The user-editable list of guessable words
///
/// Entries are unique, uppercase and A-Z only, kept in insertion order.
/// Every mutation rewrites the whole list to the store before the in-memory
/// list changes, so a failed write leaves the bank untouched.
pub struct WordBank {
    words: Vec<String>,
    store: Box<dyn KeyValueStore>,
}

impl fmt::Debug for WordBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordBank")
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

impl WordBank {
    /// Load the word bank from a store
    ///
    /// Installs and persists the default words when nothing is stored yet
    /// or the stored blob cannot be parsed. Stored entries that are invalid
    /// or duplicated are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub fn load(store: Box<dyn KeyValueStore>) -> Result<Self> {
        let stored = store.get(WORD_BANK_KEY)?;

        let mut bank = Self {
            words: Vec::new(),
            store,
        };

        let parsed = stored.and_then(|blob| match serde_json::from_str::<Vec<String>>(&blob) {
            Ok(words) => Some(words),
            Err(e) => {
                tracing::warn!("Stored word bank is unreadable, restoring defaults: {}", e);
                None
            }
        });

        match parsed {
            Some(raw_words) => {
                let (words, dropped) = sanitize(&raw_words);
                if dropped > 0 {
                    tracing::warn!("Dropped {} invalid or duplicate stored words", dropped);
                }
                if words != raw_words {
                    bank.persist(&words)?;
                }
                bank.words = words;
            }
            None => {
                let words: Vec<String> = DEFAULT_WORDS.iter().map(|w| w.to_string()).collect();
                bank.persist(&words)?;
                bank.words = words;
                tracing::info!("Initialized word bank with {} default words", bank.words.len());
            }
        }

        Ok(bank)
    }

    /// Number of words in the bank
    pub fn size(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in display order
    pub fn entries(&self) -> &[String] {
        &self.words
    }

    /// Check whether a word (in any case) is in the bank
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize_word(word);
        self.words.iter().any(|w| *w == word)
    }

    /// Add a word to the end of the bank
    ///
    /// # Returns
    ///
    /// The normalized word that was stored
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty, non-letter or duplicate input
    pub fn add(&mut self, raw: &str) -> Result<String> {
        let word = self.check_candidate(raw, None)?;

        let mut words = self.words.clone();
        words.push(word.clone());
        self.commit(words)?;

        tracing::info!("Added word {} ({} words)", word, self.size());
        Ok(word)
    }

    /// Replace the word at `index`
    ///
    /// Renaming a word to its current value is allowed.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index` is out of bounds, or a validation
    /// error for empty, non-letter or duplicate input
    pub fn edit(&mut self, index: usize, raw: &str) -> Result<String> {
        self.check_index(index)?;
        let word = self.check_candidate(raw, Some(index))?;

        let mut words = self.words.clone();
        let previous = std::mem::replace(&mut words[index], word.clone());
        self.commit(words)?;

        tracing::info!("Edited word {} -> {}", previous, word);
        Ok(word)
    }

    /// Remove the word at `index`
    ///
    /// # Returns
    ///
    /// The removed word
    ///
    /// # Errors
    ///
    /// Returns an index error if `index` is out of bounds
    pub fn delete(&mut self, index: usize) -> Result<String> {
        self.check_index(index)?;

        let mut words = self.words.clone();
        let removed = words.remove(index);
        self.commit(words)?;

        tracing::info!("Deleted word {} ({} words left)", removed, self.size());
        Ok(removed)
    }

    /// Prompt for a replacement and edit the word at `index`
    ///
    /// # Returns
    ///
    /// `false` if the prompt was cancelled (nothing changes)
    pub fn edit_with(&mut self, index: usize, dialog: &mut dyn Dialog) -> Result<bool> {
        self.check_index(index)?;

        let current = self.words[index].clone();
        match dialog.prompt("Edit word:", &current) {
            Some(input) => {
                self.edit(index, &input)?;
                Ok(true)
            }
            None => {
                tracing::debug!("Edit of {} cancelled", current);
                Ok(false)
            }
        }
    }

    /// Ask for confirmation and delete the word at `index`
    ///
    /// # Returns
    ///
    /// `false` if the deletion was not confirmed (nothing changes)
    pub fn delete_with(&mut self, index: usize, dialog: &mut dyn Dialog) -> Result<bool> {
        self.check_index(index)?;

        let message = format!("Are you sure you want to delete {}?", self.words[index]);
        if !dialog.confirm(&message) {
            tracing::debug!("Deletion of {} not confirmed", self.words[index]);
            return Ok(false);
        }

        self.delete(index)?;
        Ok(true)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.words.len() {
            return Err(GameError::Index {
                index,
                len: self.words.len(),
            });
        }
        Ok(())
    }

    /// Shared validation for add and edit; `exclude` skips the entry being edited
    fn check_candidate(&self, raw: &str, exclude: Option<usize>) -> Result<String> {
        let word = validate_word(raw)?;

        let duplicate = self
            .words
            .iter()
            .enumerate()
            .any(|(i, existing)| Some(i) != exclude && *existing == word);

        if duplicate {
            return Err(ValidationError::Duplicate.into());
        }

        Ok(word)
    }

    fn commit(&mut self, words: Vec<String>) -> Result<()> {
        self.persist(&words)?;
        self.words = words;
        Ok(())
    }

    fn persist(&mut self, words: &[String]) -> Result<()> {
        let blob = serde_json::to_string(words).map_err(StoreError::from)?;
        self.store.set(WORD_BANK_KEY, blob)?;
        Ok(())
    }
}

/// Normalize stored words, dropping invalid entries and later duplicates
fn sanitize(raw_words: &[String]) -> (Vec<String>, usize) {
    let mut words: Vec<String> = Vec::with_capacity(raw_words.len());

    for raw in raw_words {
        match validate_word(raw) {
            Ok(word) if !words.contains(&word) => words.push(word),
            _ => tracing::debug!("Skipping stored word {:?}", raw),
        }
    }

    let dropped = raw_words.len() - words.len();
    (words, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dialog::PresetDialog;
    use crate::storage::MemoryStore;
    use std::sync::{Arc, Mutex};

    /// Store that shares its contents with the test and can be told to fail
    #[derive(Clone, Default)]
    struct SharedStore {
        values: Arc<Mutex<MemoryStore>>,
        fail_writes: Arc<Mutex<bool>>,
    }

    impl SharedStore {
        fn blob(&self) -> Option<String> {
            self.values.lock().unwrap().get(WORD_BANK_KEY).unwrap()
        }

        fn stored_words(&self) -> Vec<String> {
            serde_json::from_str(&self.blob().unwrap()).unwrap()
        }

        fn set_failing(&self, failing: bool) {
            *self.fail_writes.lock().unwrap() = failing;
        }
    }

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
            self.values.lock().unwrap().get(key)
        }

        fn set(&mut self, key: &str, value: String) -> std::result::Result<(), StoreError> {
            if *self.fail_writes.lock().unwrap() {
                return Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )));
            }
            self.values.lock().unwrap().set(key, value)
        }
    }

    fn bank_with(words: &[&str]) -> (WordBank, SharedStore) {
        let store = SharedStore::default();
        let blob = serde_json::to_string(words).unwrap();
        store
            .values
            .lock()
            .unwrap()
            .set(WORD_BANK_KEY, blob)
            .unwrap();
        let bank = WordBank::load(Box::new(store.clone())).unwrap();
        (bank, store)
    }

    #[test]
    fn test_load_installs_defaults() {
        let store = SharedStore::default();
        let bank = WordBank::load(Box::new(store.clone())).unwrap();

        assert_eq!(bank.size(), 20);
        assert_eq!(bank.entries()[0], "DEVOPS");
        assert_eq!(bank.entries()[19], "MERGE");
        assert_eq!(store.stored_words(), bank.entries());
    }

    #[test]
    fn test_load_uses_stored_words() {
        let (bank, _) = bank_with(&["DOCKER", "MERGE"]);
        assert_eq!(bank.entries(), ["DOCKER", "MERGE"]);
    }

    #[test]
    fn test_load_keeps_explicitly_emptied_bank() {
        let (bank, _) = bank_with(&[]);
        assert!(bank.is_empty());
    }

    #[test]
    fn test_load_corrupt_blob_restores_defaults() {
        let store = SharedStore::default();
        store
            .values
            .lock()
            .unwrap()
            .set(WORD_BANK_KEY, "{not json".to_string())
            .unwrap();

        let bank = WordBank::load(Box::new(store.clone())).unwrap();

        assert_eq!(bank.size(), DEFAULT_WORDS.len());
        assert_eq!(store.stored_words().len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn test_load_drops_invalid_and_duplicate_entries() {
        let (bank, store) = bank_with(&["docker", "DOCKER", "K8S", "", "MERGE"]);

        assert_eq!(bank.entries(), ["DOCKER", "MERGE"]);
        assert_eq!(store.stored_words(), ["DOCKER", "MERGE"]);
    }

    #[test]
    fn test_add_word() {
        let (mut bank, store) = bank_with(&["DOCKER"]);

        let word = bank.add("  scrum ").unwrap();

        assert_eq!(word, "SCRUM");
        assert_eq!(bank.size(), 2);
        assert_eq!(bank.entries(), ["DOCKER", "SCRUM"]);
        assert_eq!(store.stored_words(), bank.entries());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (mut bank, store) = bank_with(&["DOCKER"]);
        let before = store.blob();

        let cases = [
            ("", ValidationError::Empty),
            ("   ", ValidationError::Empty),
            ("K8S", ValidationError::InvalidChars),
            ("CI-CD", ValidationError::InvalidChars),
            ("docker", ValidationError::Duplicate),
            ("DOCKER", ValidationError::Duplicate),
        ];

        for (input, expected) in cases {
            let err = bank.add(input).unwrap_err();
            assert_eq!(err.validation(), Some(expected), "input {:?}", input);
        }

        assert_eq!(bank.size(), 1);
        assert_eq!(store.blob(), before);
    }

    #[test]
    fn test_edit_word() {
        let (mut bank, store) = bank_with(&["DOCKER", "MERGE"]);

        bank.edit(1, "rebase").unwrap();

        assert_eq!(bank.entries(), ["DOCKER", "REBASE"]);
        assert_eq!(store.stored_words(), bank.entries());
    }

    #[test]
    fn test_edit_to_own_value_is_allowed() {
        let (mut bank, _) = bank_with(&["DOCKER", "MERGE"]);

        assert_eq!(bank.edit(0, "docker").unwrap(), "DOCKER");
        assert_eq!(bank.entries(), ["DOCKER", "MERGE"]);
    }

    #[test]
    fn test_edit_to_other_existing_word_is_duplicate() {
        let (mut bank, _) = bank_with(&["DOCKER", "MERGE"]);

        let err = bank.edit(0, "merge").unwrap_err();

        assert_eq!(err.validation(), Some(ValidationError::Duplicate));
        assert_eq!(bank.entries(), ["DOCKER", "MERGE"]);
    }

    #[test]
    fn test_edit_out_of_bounds() {
        let (mut bank, _) = bank_with(&["DOCKER"]);

        let err = bank.edit(1, "MERGE").unwrap_err();
        assert!(matches!(err, GameError::Index { index: 1, len: 1 }));
    }

    #[test]
    fn test_delete_word() {
        let (mut bank, store) = bank_with(&["DOCKER", "MERGE", "SCRUM"]);

        let removed = bank.delete(1).unwrap();

        assert_eq!(removed, "MERGE");
        assert_eq!(bank.entries(), ["DOCKER", "SCRUM"]);
        assert_eq!(store.stored_words(), bank.entries());
    }

    #[test]
    fn test_delete_out_of_bounds() {
        let (mut bank, _) = bank_with(&[]);

        let err = bank.delete(0).unwrap_err();
        assert!(matches!(err, GameError::Index { index: 0, len: 0 }));
    }

    #[test]
    fn test_failed_write_leaves_bank_unchanged() {
        let (mut bank, store) = bank_with(&["DOCKER", "MERGE"]);
        store.set_failing(true);

        assert!(matches!(bank.add("SCRUM"), Err(GameError::Storage(_))));
        assert!(matches!(bank.edit(0, "AGILE"), Err(GameError::Storage(_))));
        assert!(matches!(bank.delete(1), Err(GameError::Storage(_))));

        assert_eq!(bank.entries(), ["DOCKER", "MERGE"]);
        assert_eq!(store.stored_words(), ["DOCKER", "MERGE"]);
    }

    #[test]
    fn test_edit_with_cancelled_prompt_is_noop() {
        let (mut bank, _) = bank_with(&["DOCKER"]);
        let mut dialog = PresetDialog::responding(None);

        assert!(!bank.edit_with(0, &mut dialog).unwrap());
        assert_eq!(bank.entries(), ["DOCKER"]);
    }

    #[test]
    fn test_edit_with_response() {
        let (mut bank, _) = bank_with(&["DOCKER"]);
        let mut dialog = PresetDialog::responding(Some("podman".to_string()));

        assert!(bank.edit_with(0, &mut dialog).unwrap());
        assert_eq!(bank.entries(), ["PODMAN"]);
    }

    #[test]
    fn test_delete_with_requires_confirmation() {
        let (mut bank, _) = bank_with(&["DOCKER", "MERGE"]);

        assert!(!bank.delete_with(0, &mut PresetDialog::confirmed(false)).unwrap());
        assert_eq!(bank.size(), 2);

        assert!(bank.delete_with(0, &mut PresetDialog::confirmed(true)).unwrap());
        assert_eq!(bank.entries(), ["MERGE"]);
    }

    #[test]
    fn test_contains_ignores_case() {
        let (bank, _) = bank_with(&["DOCKER"]);
        assert!(bank.contains("docker"));
        assert!(!bank.contains("MERGE"));
    }
}
