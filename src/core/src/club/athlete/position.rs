use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const POSITIONS_COUNT: usize = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AthletePosition {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl AthletePosition {
    /// All positions in lineup order, PG first.
    pub const ALL: [AthletePosition; POSITIONS_COUNT] = [
        AthletePosition::PointGuard,
        AthletePosition::ShootingGuard,
        AthletePosition::SmallForward,
        AthletePosition::PowerForward,
        AthletePosition::Center,
    ];

    pub fn from_index(index: usize) -> Option<AthletePosition> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            AthletePosition::PointGuard => 0,
            AthletePosition::ShootingGuard => 1,
            AthletePosition::SmallForward => 2,
            AthletePosition::PowerForward => 3,
            AthletePosition::Center => 4,
        }
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            AthletePosition::PointGuard => "PG",
            AthletePosition::ShootingGuard => "SG",
            AthletePosition::SmallForward => "SF",
            AthletePosition::PowerForward => "PF",
            AthletePosition::Center => "C",
        }
    }
}

impl Display for AthletePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}
