use serde::{Deserialize, Serialize};

/// Parts of the hangman figure, one revealed per wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// Reveal order: stage 1 is the head, stage 6 the right leg
pub const STAGE_ORDER: [BodyPart; 6] = [
    BodyPart::Head,
    BodyPart::Body,
    BodyPart::LeftArm,
    BodyPart::RightArm,
    BodyPart::LeftLeg,
    BodyPart::RightLeg,
];

impl BodyPart {
    /// Part revealed at a 1-based stage index
    pub fn for_stage(stage: usize) -> Option<BodyPart> {
        stage
            .checked_sub(1)
            .and_then(|index| STAGE_ORDER.get(index))
            .copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Body => "body",
            BodyPart::LeftArm => "leftArm",
            BodyPart::RightArm => "rightArm",
            BodyPart::LeftLeg => "leftLeg",
            BodyPart::RightLeg => "rightLeg",
        }
    }
}

/// Parts visible after `wrong_guesses` wrong guesses
pub fn revealed_parts(wrong_guesses: usize) -> &'static [BodyPart] {
    &STAGE_ORDER[..wrong_guesses.min(STAGE_ORDER.len())]
}

/// Remaining lives, clamped to `[0, max_wrong]`
pub fn lives_remaining(max_wrong: usize, wrong_guesses: usize) -> usize {
    let remaining = max_wrong as i64 - wrong_guesses as i64;
    remaining.clamp(0, max_wrong as i64) as usize
}

/// How close the active player is to losing the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LivesLevel {
    Healthy,
    Warning,
    Critical,
}

impl LivesLevel {
    pub fn from_lives(lives: usize) -> Self {
        match lives {
            0..=2 => LivesLevel::Critical,
            3..=4 => LivesLevel::Warning,
            _ => LivesLevel::Healthy,
        }
    }
}
