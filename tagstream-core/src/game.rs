//! The hashtag popularity guessing game.
//!
//! Pure state machine: rounds are drawn here, console I/O lives in the
//! binary. A round is judged under strict comparison, so a tie is never a
//! correct answer and ends the game like a wrong one.

use crate::table::HashtagCount;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;

/// Which of the two presented tags the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    First,
    Second,
}

/// Parse console input into a [`Choice`]. Anything but `1` or `2` is
/// rejected and the caller re-prompts the same round.
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim() {
        "1" => Some(Choice::First),
        "2" => Some(Choice::Second),
        _ => None,
    }
}

/// Outcome of judging one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// The chosen tag's count was not strictly higher. Carries both entries
    /// so the caller can show the actual counts.
    Incorrect {
        chosen: HashtagCount,
        other: HashtagCount,
    },
}

/// Two distinct tags presented to the player.
#[derive(Debug, Clone)]
pub struct Round {
    pub first: HashtagCount,
    pub second: HashtagCount,
}

impl Round {
    /// Correct iff the chosen tag's count is strictly greater.
    pub fn judge(&self, choice: Choice) -> Verdict {
        let (chosen, other) = match choice {
            Choice::First => (&self.first, &self.second),
            Choice::Second => (&self.second, &self.first),
        };
        if chosen.count > other.count {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                chosen: chosen.clone(),
                other: other.clone(),
            }
        }
    }
}

/// Running game state over a ranked table.
pub struct Game {
    pool: Vec<HashtagCount>,
    used: HashSet<String>,
    score: u32,
}

impl Game {
    pub fn new(ranked: Vec<HashtagCount>) -> Self {
        Self {
            pool: ranked,
            used: HashSet::new(),
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn record_correct(&mut self) {
        self.score += 1;
    }

    /// Tags not yet presented in any round.
    pub fn remaining(&self) -> usize {
        self.pool
            .iter()
            .filter(|h| !self.used.contains(&h.tag))
            .count()
    }

    /// Draw the next round: two distinct unused tags, uniformly at random.
    /// Returns `None` once fewer than two unused tags remain.
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Round> {
        let unused: Vec<&HashtagCount> = self
            .pool
            .iter()
            .filter(|h| !self.used.contains(&h.tag))
            .collect();
        if unused.len() < 2 {
            return None;
        }

        let picks = index::sample(rng, unused.len(), 2);
        let first = unused[picks.index(0)].clone();
        let second = unused[picks.index(1)].clone();
        self.used.insert(first.tag.clone());
        self.used.insert(second.tag.clone());
        Some(Round { first, second })
    }
}
