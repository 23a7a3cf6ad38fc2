use crate::club::athlete::builder::AthleteBuilder;
use crate::club::athlete::{AthletePosition, AthleteStats, Rating, StatType};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::sync::atomic::{AtomicU32, Ordering};

static ATHLETE_ID_SEQUENCE: AtomicU32 = AtomicU32::new(1);

pub(crate) fn next_athlete_id() -> u32 {
    ATHLETE_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst)
}

/// A basketball player.
///
/// Identity, name and position are fixed at creation. Stats only move through
/// [`crate::Item::apply`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Athlete {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) position: AthletePosition,
    pub(crate) stats: AthleteStats,
}

impl Athlete {
    pub fn builder() -> AthleteBuilder {
        AthleteBuilder::new()
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> AthletePosition {
        self.position
    }

    pub fn stats(&self) -> &AthleteStats {
        &self.stats
    }

    pub fn stat(&self, stat: StatType) -> u16 {
        self.stats.get(stat)
    }

    pub fn rating<R: Rating + ?Sized>(&self, rating: &R) -> u16 {
        rating.rate(&self.stats)
    }

    pub(crate) fn increase_stat(&mut self, stat: StatType, amount: u16) -> u16 {
        self.stats.increase(stat, amount)
    }
}

impl Display for Athlete {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.position)?;

        for stat in StatType::ALL {
            write!(f, " {}:{}", stat.get_short_name(), self.stats.get(stat))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeanRating;

    fn athlete() -> Athlete {
        Athlete::builder()
            .name(String::from("Droopy"))
            .position(AthletePosition::SmallForward)
            .stats(AthleteStats::new(64, 62, 66, 68))
            .build()
            .unwrap()
    }

    #[test]
    fn test_stat_lookup() {
        let athlete = athlete();

        assert_eq!(athlete.stat(StatType::Offence), 64);
        assert_eq!(athlete.stat(StatType::Agility), 68);
    }

    #[test]
    fn test_rating_uses_given_formula() {
        let athlete = athlete();

        assert_eq!(athlete.rating(&MeanRating), 65);
        assert_eq!(athlete.rating(&|s: &AthleteStats| s.defence), 62);
    }

    #[test]
    fn test_display() {
        assert_eq!(athlete().to_string(), "Droopy (SF) O:64 D:62 S:66 A:68");
    }
}
