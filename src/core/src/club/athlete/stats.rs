use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const STAT_TYPES_COUNT: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Offence,
    Defence,
    Stamina,
    Agility,
}

impl StatType {
    pub const ALL: [StatType; STAT_TYPES_COUNT] = [
        StatType::Offence,
        StatType::Defence,
        StatType::Stamina,
        StatType::Agility,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            StatType::Offence => "O",
            StatType::Defence => "D",
            StatType::Stamina => "S",
            StatType::Agility => "A",
        }
    }
}

impl Display for StatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            StatType::Offence => "Offence",
            StatType::Defence => "Defence",
            StatType::Stamina => "Stamina",
            StatType::Agility => "Agility",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteStats {
    pub offence: u16,
    pub defence: u16,
    pub stamina: u16,
    pub agility: u16,
}

impl AthleteStats {
    pub fn new(offence: u16, defence: u16, stamina: u16, agility: u16) -> Self {
        AthleteStats {
            offence,
            defence,
            stamina,
            agility,
        }
    }

    pub fn get(&self, stat: StatType) -> u16 {
        match stat {
            StatType::Offence => self.offence,
            StatType::Defence => self.defence,
            StatType::Stamina => self.stamina,
            StatType::Agility => self.agility,
        }
    }

    /// Raises a single stat, returning the new value. Saturates at `u16::MAX`.
    pub fn increase(&mut self, stat: StatType, amount: u16) -> u16 {
        let value = match stat {
            StatType::Offence => &mut self.offence,
            StatType::Defence => &mut self.defence,
            StatType::Stamina => &mut self.stamina,
            StatType::Agility => &mut self.agility,
        };

        *value = value.saturating_add(amount);
        *value
    }

    pub fn total(&self) -> u32 {
        self.offence as u32 + self.defence as u32 + self.stamina as u32 + self.agility as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_reads_matching_field() {
        let stats = AthleteStats::new(61, 62, 63, 64);

        assert_eq!(stats.get(StatType::Offence), 61);
        assert_eq!(stats.get(StatType::Defence), 62);
        assert_eq!(stats.get(StatType::Stamina), 63);
        assert_eq!(stats.get(StatType::Agility), 64);
    }

    #[test]
    fn test_increase_touches_only_target_stat() {
        let mut stats = AthleteStats::new(60, 60, 60, 60);

        let value = stats.increase(StatType::Stamina, 7);

        assert_eq!(value, 67);
        assert_eq!(stats, AthleteStats::new(60, 60, 67, 60));
    }

    #[test]
    fn test_increase_saturates() {
        let mut stats = AthleteStats::new(u16::MAX - 1, 0, 0, 0);
        assert_eq!(stats.increase(StatType::Offence, 5), u16::MAX);
    }

    #[test]
    fn test_total() {
        assert_eq!(AthleteStats::new(60, 65, 69, 66).total(), 260);
    }
}
