use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::FreecellGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

// Curated deal numbers, valid only for the legacy shuffle pipeline.
pub const EASY_DEALS: [u32; 16] = [
    25904, 164, 7058, 15196, 27853, 31316, 2, 5, 7, 8, 11, 26, 30, 33, 11987, 15140,
];
pub const HARD_DEALS: [u32; 15] = [
    31465, 169, 4368, 7700, 21278, 31945, 178, 285, 454, 575, 598, 617, 657, 775, 829,
];
pub const IMPOSSIBLE_DEALS: [u32; 8] = [
    11982, 146692, 186216, 455889, 495505, 512118, 517776, 781948,
];

/// Pick a seed for the requested band. Easy and hard draw from the curated
/// pools; medium draws uniformly from the classic 1..=32000 range, redrawing
/// while the seed sits on the impossible-deal denylist.
pub fn random_seed(difficulty: Difficulty) -> u32 {
    let mut rng = rand::thread_rng();
    let seed = match difficulty {
        Difficulty::Easy => EASY_DEALS.choose(&mut rng).copied().unwrap_or(EASY_DEALS[0]),
        Difficulty::Hard => HARD_DEALS.choose(&mut rng).copied().unwrap_or(HARD_DEALS[0]),
        Difficulty::Medium => loop {
            let candidate = rng.gen_range(1..=32000);
            if !IMPOSSIBLE_DEALS.contains(&candidate) {
                break candidate;
            }
            tracing::trace!(candidate, "redrew denylisted seed");
        },
    };
    tracing::debug!(seed, difficulty = difficulty.id(), "picked seed");
    seed
}

pub fn parse_seed_input(input: &str) -> Result<Option<u32>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let normalized = trimmed.replace('_', "");
    normalized
        .parse::<u32>()
        .map(Some)
        .map_err(|_| "Seed must be an unsigned whole number (0 to 4294967295).".to_string())
}

pub fn seed_from_text_or_random(input: &str, difficulty: Difficulty) -> Result<u32, String> {
    Ok(parse_seed_input(input)?.unwrap_or_else(|| random_seed(difficulty)))
}

/// Deal a fresh game for the band, returning the seed alongside the state so
/// the caller can display it or deal the same layout again.
pub fn deal_for_difficulty(difficulty: Difficulty) -> (FreecellGame, u32) {
    let seed = random_seed(difficulty);
    (FreecellGame::new_with_seed(seed), seed)
}
