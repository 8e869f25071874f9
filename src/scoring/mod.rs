//! Enumeration of football scoring-play combinations.
//!
//! Given a final score, this module produces every combination of scoring
//! plays that could have led to it. The play model is the simplified NFL
//! one: a touchdown with a two-point conversion (8), a touchdown with an
//! extra point (7), a touchdown alone (6), a field goal (3) and a safety
//! (2).
//!
//! Enumeration is lazy: [`enumerate`] returns an iterator that walks the
//! bounded lattice of play counts and yields each valid [`Combination`]
//! as it is found.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five scoring plays recognized by the combination model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
    /// Touchdown followed by a two-point conversion.
    TouchdownTwoPoint,
    /// Touchdown followed by an extra-point kick.
    TouchdownOnePoint,
    /// Touchdown with no conversion.
    Touchdown,
    /// Three-point field goal.
    FieldGoal,
    /// Safety.
    Safety,
}

impl PlayType {
    /// All play types, from highest point value to lowest.
    pub const ALL: [PlayType; 5] = [
        PlayType::TouchdownTwoPoint,
        PlayType::TouchdownOnePoint,
        PlayType::Touchdown,
        PlayType::FieldGoal,
        PlayType::Safety,
    ];

    /// Point value of one play of this type.
    pub fn points(self) -> u32 {
        match self {
            PlayType::TouchdownTwoPoint => 8,
            PlayType::TouchdownOnePoint => 7,
            PlayType::Touchdown => 6,
            PlayType::FieldGoal => 3,
            PlayType::Safety => 2,
        }
    }
}

/// One way of reaching a score: a count per play type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub td_two_pt: u32,
    pub td_one_pt: u32,
    pub td_plain: u32,
    pub field_goals: u32,
    pub safeties: u32,
}

impl Combination {
    /// Count of plays of the given type in this combination.
    pub fn count(&self, play: PlayType) -> u32 {
        match play {
            PlayType::TouchdownTwoPoint => self.td_two_pt,
            PlayType::TouchdownOnePoint => self.td_one_pt,
            PlayType::Touchdown => self.td_plain,
            PlayType::FieldGoal => self.field_goals,
            PlayType::Safety => self.safeties,
        }
    }

    /// Total points scored by this combination.
    pub fn total(&self) -> u32 {
        PlayType::ALL
            .iter()
            .map(|&play| play.points() * self.count(play))
            .sum()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} TD + 2pt, {} TD + FG, {} TD, {} 3pt FG, {} Safety",
            self.td_two_pt, self.td_one_pt, self.td_plain, self.field_goals, self.safeties
        )
    }
}

/// Lazy iterator over every combination summing to a target score.
///
/// Walks four bounded counters (two-point touchdowns, one-point touchdowns,
/// plain touchdowns, field goals) in outer-to-inner order; the safety count
/// is derived from whatever remains, so no fifth counter is needed. A
/// position yields a combination exactly when the remainder is even.
pub struct Combinations {
    score: u32,
    td_two_pt: u32,
    td_one_pt: u32,
    td_plain: u32,
    field_goals: u32,
    exhausted: bool,
}

/// Enumerate all scoring-play combinations for `score`.
///
/// Every tuple of non-negative counts whose weighted sum equals the score
/// is produced exactly once, in ascending order of the outer counters.
/// A score of zero has no scoring plays behind it and yields nothing.
pub fn enumerate(score: u32) -> Combinations {
    Combinations {
        score,
        td_two_pt: 0,
        td_one_pt: 0,
        td_plain: 0,
        field_goals: 0,
        exhausted: score == 0,
    }
}

impl Combinations {
    /// Points already committed by the four explicit counters.
    fn partial(&self) -> u32 {
        self.td_two_pt * 8 + self.td_one_pt * 7 + self.td_plain * 6 + self.field_goals * 3
    }

    /// Step to the next counter position, carrying outward whenever the
    /// partial sum would exceed the score. Returns false once the outermost
    /// counter runs past its bound.
    fn advance(&mut self) -> bool {
        self.field_goals += 1;
        if self.partial() <= self.score {
            return true;
        }
        self.field_goals = 0;
        self.td_plain += 1;
        if self.partial() <= self.score {
            return true;
        }
        self.td_plain = 0;
        self.td_one_pt += 1;
        if self.partial() <= self.score {
            return true;
        }
        self.td_one_pt = 0;
        self.td_two_pt += 1;
        self.td_two_pt * 8 <= self.score
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        while !self.exhausted {
            // Invariant: partial() <= score at every visited position.
            let remaining = self.score - self.partial();
            let found = (remaining % 2 == 0).then(|| Combination {
                td_two_pt: self.td_two_pt,
                td_one_pt: self.td_one_pt,
                td_plain: self.td_plain,
                field_goals: self.field_goals,
                safeties: remaining / 2,
            });
            if !self.advance() {
                self.exhausted = true;
            }
            if found.is_some() {
                return found;
            }
        }
        None
    }
}

/// Full enumeration result for one score, ready for an output writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u32,
    pub combinations: Vec<Combination>,
    pub generated_at: DateTime<Utc>,
}

impl ScoreReport {
    pub fn build(score: u32) -> Self {
        Self {
            score,
            combinations: enumerate(score).collect(),
            generated_at: Utc::now(),
        }
    }
}
