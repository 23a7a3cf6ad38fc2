use crate::club::team::Team;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

/// A match that passed every precondition and is ready to be played.
#[derive(Debug)]
pub struct Fixture<'a> {
    pub week: u8,
    pub team: &'a Team,
    pub opponent: &'a Team,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub week: u8,
    pub opponent: String,
    pub score: u32,
    pub opponent_score: u32,
}

impl MatchResult {
    pub fn new(week: u8, opponent: String, score: u32, opponent_score: u32) -> Self {
        MatchResult {
            week,
            opponent,
            score,
            opponent_score,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        if self.score > self.opponent_score {
            MatchOutcome::Win
        } else if self.score < self.opponent_score {
            MatchOutcome::Loss
        } else {
            MatchOutcome::Draw
        }
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "week {}: {} - {} vs {} ({:?})",
            self.week,
            self.score,
            self.opponent_score,
            self.opponent,
            self.outcome()
        )
    }
}

/// Win/draw/loss totals over a set of results.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SeasonRecord {
    pub wins: u8,
    pub draws: u8,
    pub losses: u8,
}

impl SeasonRecord {
    pub fn from_results(results: &[MatchResult]) -> Self {
        results
            .iter()
            .fold(SeasonRecord::default(), |mut record, result| {
                match result.outcome() {
                    MatchOutcome::Win => record.wins += 1,
                    MatchOutcome::Draw => record.draws += 1,
                    MatchOutcome::Loss => record.losses += 1,
                }
                record
            })
    }
}
