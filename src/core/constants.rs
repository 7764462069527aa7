/// Key under which the word bank is persisted
pub const WORD_BANK_KEY: &str = "wordBank";

/// Wrong guesses allowed before a round is lost (one per hangman part)
pub const MAX_WRONG: usize = 6;

/// Points awarded to the player who completes a word
pub const POINTS_PER_WIN: u32 = 10;

/// Seed words installed when no persisted word bank exists
pub const DEFAULT_WORDS: [&str; 20] = [
    "DEVOPS",
    "AGILE",
    "VERSION",
    "BRANCH",
    "GITHUB",
    "CHANGES",
    "FEATURES",
    "HOTFIX",
    "CONTINUOUS",
    "INTEGRATION",
    "DEPLOYMENT",
    "TESTING",
    "COMMIT",
    "SNAPSHOT",
    "CULTURE",
    "PIPELINE",
    "DOCKER",
    "SCRUM",
    "KANBAN",
    "MERGE",
];
