use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::constants::{MAX_WRONG, POINTS_PER_WIN};
use super::error::{GameError, Result, ValidationError};
use super::events::Notification;
use super::hangman::{lives_remaining, revealed_parts, BodyPart, LivesLevel};
use super::player::{Player, PlayerSlot};
use super::word_bank::WordBank;
use crate::services::display::{masked_word, wrong_letters};
use crate::services::validation::{normalize_letter, validate_player_names};
use crate::services::win_conditions::{determine_outcome, RoundOutcome};

/// Where the engine is in the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    Idle,
    InRound,
    Won,
    Lost,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct RoundState {
    number: u32,
    word: String,
    guessed_letters: Vec<char>,
    wrong_guess_count: usize,
    max_wrong: usize,
    active: bool,
    outcome: RoundOutcome,
    /// Player whose turn the round is
    player: PlayerSlot,
    started_at: OffsetDateTime,
    finished_at: Option<OffsetDateTime>,
}

impl RoundState {
    fn new(number: u32, word: String, player: PlayerSlot) -> Self {
        Self {
            number,
            word,
            guessed_letters: Vec::new(),
            wrong_guess_count: 0,
            max_wrong: MAX_WRONG,
            active: true,
            outcome: RoundOutcome::Continue,
            player,
            started_at: OffsetDateTime::now_utc(),
            finished_at: None,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Guessed letters in guess order
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn wrong_guess_count(&self) -> usize {
        self.wrong_guess_count
    }

    pub fn max_wrong(&self) -> usize {
        self.max_wrong
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn player(&self) -> PlayerSlot {
        self.player
    }

    pub fn lives(&self) -> usize {
        lives_remaining(self.max_wrong, self.wrong_guess_count)
    }

    pub fn lives_level(&self) -> LivesLevel {
        LivesLevel::from_lives(self.lives())
    }

    pub fn revealed_parts(&self) -> &'static [BodyPart] {
        revealed_parts(self.wrong_guess_count)
    }

    pub fn masked_word(&self) -> String {
        masked_word(&self.word, &self.guessed_letters)
    }

    pub fn wrong_letters(&self) -> Vec<char> {
        wrong_letters(&self.word, &self.guessed_letters)
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.active = false;
        self.outcome = outcome;
        self.finished_at = Some(OffsetDateTime::now_utc());
    }

    fn to_dict(&self) -> serde_json::Value {
        let mut data = serde_json::json!({
            "number": self.number,
            "masked_word": self.masked_word(),
            "word_length": self.word.len(),
            "guessed_letters": self.guessed_letters,
            "wrong_letters": self.wrong_letters(),
            "wrong_guess_count": self.wrong_guess_count,
            "max_wrong": self.max_wrong,
            "lives": self.lives(),
            "lives_level": self.lives_level(),
            "revealed_parts": self.revealed_parts(),
            "active": self.active,
            "outcome": self.outcome,
            "started_at": self.started_at.unix_timestamp(),
            "finished_at": self.finished_at.map(|t| t.unix_timestamp()),
        });

        // The word is only revealed once the round is over
        if !self.active {
            data["word"] = serde_json::json!(self.word);
        }

        data
    }
}

/// Players, turn and current round of an ongoing match
#[derive(Debug, Clone)]
struct MatchState {
    match_id: String,
    players: [Player; 2],
    current_player: PlayerSlot,
    round: Option<RoundState>,
    rounds_played: u32,
}

impl MatchState {
    fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Close the current round, score it and pass the turn
    fn resolve(&mut self, outcome: RoundOutcome) -> Option<Notification> {
        let round = self.round.as_mut()?;
        round.finish(outcome);

        let word = round.word.clone();
        // Score the player who played the round, never the next one
        let slot = round.player;
        self.current_player = slot.other();

        let player = &mut self.players[slot.index()];
        match outcome {
            RoundOutcome::Won => {
                player.score += POINTS_PER_WIN;
                tracing::info!(
                    "🎉 {} won round {} with {} (score {})",
                    player.name,
                    self.rounds_played,
                    word,
                    player.score
                );
                Some(Notification::RoundWon {
                    winner: player.name.clone(),
                    word,
                    score: player.score,
                })
            }
            RoundOutcome::Lost => {
                tracing::info!(
                    "😢 {} lost round {}, the word was {}",
                    player.name,
                    self.rounds_played,
                    word
                );
                Some(Notification::RoundLost {
                    loser: player.name.clone(),
                    word,
                })
            }
            RoundOutcome::Continue => None,
        }
    }
}

/// Round and turn state machine for a two-player match
///
/// `Idle` until a match starts, then `InRound -> (Won | Lost) -> InRound`
/// for as many rounds as the players want.
#[derive(Debug)]
pub struct RoundEngine {
    rng: StdRng,
    current: Option<MatchState>,
    /// Word of the previous round, never picked twice in a row
    last_word: Option<String>,
}

impl RoundEngine {
    /// Create an engine with an entropy-seeded random source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine with reproducible word selection
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            current: None,
            last_word: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        match self.round() {
            None => RoundPhase::Idle,
            Some(round) if round.active => RoundPhase::InRound,
            Some(round) => match round.outcome {
                RoundOutcome::Won => RoundPhase::Won,
                RoundOutcome::Lost => RoundPhase::Lost,
                RoundOutcome::Continue => RoundPhase::InRound,
            },
        }
    }

    /// The current (or just finished) round
    pub fn round(&self) -> Option<&RoundState> {
        self.current.as_ref().and_then(|game| game.round.as_ref())
    }

    pub fn players(&self) -> Option<&[Player; 2]> {
        self.current.as_ref().map(|game| &game.players)
    }

    pub fn player(&self, slot: PlayerSlot) -> Option<&Player> {
        self.current.as_ref().map(|game| game.player(slot))
    }

    /// Whose turn it is (or will be, between rounds)
    pub fn current_player(&self) -> Option<PlayerSlot> {
        self.current.as_ref().map(|game| game.current_player)
    }

    pub fn match_id(&self) -> Option<&str> {
        self.current.as_ref().map(|game| game.match_id.as_str())
    }

    pub fn last_word(&self) -> Option<&str> {
        self.last_word.as_deref()
    }

    /// Start a new match and its first round
    ///
    /// # Arguments
    ///
    /// * `name1` - Player 1's name, who plays the first round
    /// * `name2` - Player 2's name
    /// * `bank` - Word bank to draw the first word from
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty or matching names, or an empty
    /// bank. Nothing changes on error.
    pub fn start_match(
        &mut self,
        name1: &str,
        name2: &str,
        bank: &WordBank,
    ) -> Result<Vec<Notification>> {
        let (name1, name2) = validate_player_names(name1, name2)?;

        if bank.is_empty() {
            return Err(ValidationError::EmptyBank.into());
        }

        let match_id = Uuid::new_v4().to_string();
        tracing::info!("Starting match {}: {} vs {}", match_id, name1, name2);

        self.current = Some(MatchState {
            match_id: match_id.clone(),
            players: [Player::new(name1.clone()), Player::new(name2.clone())],
            current_player: PlayerSlot::One,
            round: None,
            rounds_played: 0,
        });

        let mut events = vec![Notification::MatchStarted {
            match_id,
            player1: name1,
            player2: name2,
        }];
        events.extend(self.next_round(bank)?);

        Ok(events)
    }

    /// Start the next round with a fresh word
    ///
    /// Scores and the current player are left alone. An unfinished round is
    /// abandoned without scoring.
    ///
    /// # Errors
    ///
    /// * `GameError::MatchNotStarted` - no match in progress
    /// * `ValidationError::EmptyBank` - nothing to pick from
    pub fn next_round(&mut self, bank: &WordBank) -> Result<Vec<Notification>> {
        if self.current.is_none() {
            return Err(GameError::MatchNotStarted);
        }

        let word = self
            .pick_word(bank.entries())
            .ok_or(ValidationError::EmptyBank)?;

        let game = self.current.as_mut().ok_or(GameError::MatchNotStarted)?;
        game.rounds_played += 1;

        let slot = game.current_player;
        let player = game.player(slot).name.clone();
        tracing::info!(
            "Round {} of match {} for {} ({} letters)",
            game.rounds_played,
            game.match_id,
            player,
            word.len()
        );

        let event = Notification::RoundStarted {
            round: game.rounds_played,
            word_length: word.len(),
            player,
        };

        game.round = Some(RoundState::new(game.rounds_played, word.clone(), slot));
        self.last_word = Some(word);

        Ok(vec![event])
    }

    /// Guess a letter in the current round
    ///
    /// Lowercase letters are accepted. Guesses outside an active round,
    /// repeated letters and non-letters change nothing and return no
    /// notifications.
    pub fn guess(&mut self, letter: char) -> Vec<Notification> {
        let mut events = Vec::new();

        let Some(letter) = normalize_letter(letter) else {
            tracing::debug!("Ignoring non-letter guess {:?}", letter);
            return events;
        };

        let Some(game) = self.current.as_mut() else {
            return events;
        };

        let Some(round) = game.round.as_mut() else {
            return events;
        };

        if !round.active || round.guessed_letters.contains(&letter) {
            return events;
        }

        round.guessed_letters.push(letter);

        if round.word.contains(letter) {
            events.push(Notification::CorrectGuess {
                letter,
                masked_word: round.masked_word(),
            });
        } else {
            round.wrong_guess_count += 1;
            let stage = round.wrong_guess_count;
            if let Some(part) = BodyPart::for_stage(stage) {
                events.push(Notification::WrongGuess {
                    letter,
                    stage,
                    part,
                    lives: round.lives(),
                });
            }
        }

        tracing::debug!(
            "Guess {} -> {} ({} wrong)",
            letter,
            round.masked_word(),
            round.wrong_guess_count
        );

        let outcome = determine_outcome(
            &round.word,
            &round.guessed_letters,
            round.wrong_guess_count,
            round.max_wrong,
        );

        if outcome != RoundOutcome::Continue {
            events.extend(game.resolve(outcome));
        }

        events
    }

    /// Get the match state for display
    ///
    /// # Returns
    ///
    /// JSON value with phase, players and the current round. The word is
    /// only included once the round is resolved.
    pub fn get_state(&self) -> serde_json::Value {
        let phase = self.phase();

        let Some(game) = self.current.as_ref() else {
            return serde_json::json!({
                "phase": phase,
                "match_id": null,
                "players": [],
                "current_player": null,
                "round": null,
            });
        };

        let players: Vec<serde_json::Value> = [PlayerSlot::One, PlayerSlot::Two]
            .iter()
            .map(|slot| game.player(*slot).to_dict(*slot == game.current_player))
            .collect();

        serde_json::json!({
            "phase": phase,
            "match_id": game.match_id,
            "players": players,
            "current_player": game.current_player.number(),
            "rounds_played": game.rounds_played,
            "round": game.round.as_ref().map(|round| round.to_dict()),
        })
    }

    /// Pick a random word, avoiding the previous round's word when possible
    fn pick_word(&mut self, entries: &[String]) -> Option<String> {
        let candidates: Vec<&String> = if entries.len() > 1 {
            entries
                .iter()
                .filter(|word| Some(word.as_str()) != self.last_word.as_deref())
                .collect()
        } else {
            entries.iter().collect()
        };

        let word = candidates.choose(&mut self.rng).map(|word| (*word).clone());
        tracing::debug!(
            "Picked {:?} from {} candidates (previous {:?})",
            word,
            candidates.len(),
            self.last_word
        );
        word
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}
