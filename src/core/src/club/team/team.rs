use crate::club::athlete::{Athlete, AthletePosition, Rating, POSITIONS_COUNT};
use crate::club::item::Item;
use crate::club::team::builder::TeamBuilder;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Maximum number of athletes on a roster, one per position.
pub const ROSTER_SIZE: usize = POSITIONS_COUNT;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("position {position} is already taken by {occupant}")]
    PositionOccupied {
        position: AthletePosition,
        occupant: String,
    },

    #[error("roster already has {0} players")]
    RosterFull(usize),

    #[error("no player at position {0}")]
    PositionEmpty(AthletePosition),
}

/// A club roster keyed by position. Unfilled positions are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    name: String,
    players: BTreeMap<AthletePosition, Athlete>,
}

impl Team {
    pub fn new(name: String) -> Self {
        Team {
            name,
            players: BTreeMap::new(),
        }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds the athlete at its own position. Rejected without any change when
    /// that position is already filled.
    pub fn add_player(&mut self, athlete: Athlete) -> Result<(), TeamError> {
        if let Some(occupant) = self.players.get(&athlete.position()) {
            warn!(
                "team {}: {} rejected, {} already plays {}",
                self.name,
                athlete.name(),
                occupant.name(),
                athlete.position()
            );

            return Err(TeamError::PositionOccupied {
                position: athlete.position(),
                occupant: occupant.name().to_string(),
            });
        }

        if self.players.len() >= ROSTER_SIZE {
            return Err(TeamError::RosterFull(self.players.len()));
        }

        debug!("team {}: added {} at {}", self.name, athlete.name(), athlete.position());

        self.players.insert(athlete.position(), athlete);

        Ok(())
    }

    /// Removes the athlete if it currently holds its position. Removing an
    /// athlete that is not on the roster changes nothing.
    pub fn remove_player(&mut self, athlete: &Athlete) -> Option<Athlete> {
        let position = athlete.position();

        match self.players.get(&position) {
            Some(current) if current.id() == athlete.id() => {
                debug!("team {}: removed {} from {}", self.name, athlete.name(), position);
                self.players.remove(&position)
            }
            _ => None,
        }
    }

    pub fn can_play(&self) -> bool {
        AthletePosition::ALL
            .iter()
            .all(|position| self.players.contains_key(position))
    }

    pub fn missing_positions(&self) -> Vec<AthletePosition> {
        AthletePosition::ALL
            .iter()
            .filter(|position| !self.players.contains_key(position))
            .copied()
            .collect()
    }

    pub fn players_map(&self) -> &BTreeMap<AthletePosition, Athlete> {
        &self.players
    }

    pub fn players(&self) -> Vec<&Athlete> {
        self.players.values().collect()
    }

    pub fn player(&self, position: AthletePosition) -> Option<&Athlete> {
        self.players.get(&position)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Uses `item` on the athlete at `position`. Fails if the position is
    /// empty.
    pub fn apply_item(&mut self, position: AthletePosition, item: Item) -> Result<u16, TeamError> {
        match self.players.get_mut(&position) {
            Some(athlete) => Ok(item.apply(athlete)),
            None => Err(TeamError::PositionEmpty(position)),
        }
    }

    /// Sum of the ratings of everyone on the roster.
    pub fn rating<R: Rating + ?Sized>(&self, rating: &R) -> u32 {
        self.players
            .values()
            .map(|athlete| athlete.rating(rating) as u32)
            .sum()
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}/{}]", self.name, self.players.len(), ROSTER_SIZE)
    }
}
