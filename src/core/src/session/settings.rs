use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const MIN_SEASON_WEEKS: u8 = 5;
pub const MAX_SEASON_WEEKS: u8 = 30;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    /// Stat scaling applied to opposing teams.
    pub fn opponent_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Hard => 1.1,
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty: {}", s)),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub team_name: String,
    pub difficulty: Difficulty,
    pub season_weeks: u8,
}

impl SessionSettings {
    pub fn new(team_name: String, difficulty: Difficulty, season_weeks: u8) -> Self {
        SessionSettings {
            team_name,
            difficulty,
            season_weeks,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.team_name.trim().is_empty() {
            return Err(String::from("team name must not be blank"));
        }

        if !(MIN_SEASON_WEEKS..=MAX_SEASON_WEEKS).contains(&self.season_weeks) {
            return Err(format!(
                "season length must be between {} and {} weeks, got {}",
                MIN_SEASON_WEEKS, MAX_SEASON_WEEKS, self.season_weeks
            ));
        }

        Ok(())
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            team_name: String::from("Hoopers"),
            difficulty: Difficulty::Easy,
            season_weeks: MAX_SEASON_WEEKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_blank_team_name() {
        let settings = SessionSettings::new(String::from("  "), Difficulty::Easy, 10);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_season_length_bounds() {
        let name = || String::from("Hoopers");

        assert!(SessionSettings::new(name(), Difficulty::Hard, 4).validate().is_err());
        assert!(SessionSettings::new(name(), Difficulty::Hard, 5).validate().is_ok());
        assert!(SessionSettings::new(name(), Difficulty::Hard, 30).validate().is_ok());
        assert!(SessionSettings::new(name(), Difficulty::Hard, 31).validate().is_err());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_hard_strengthens_opponents() {
        assert!(Difficulty::Hard.opponent_multiplier() > Difficulty::Easy.opponent_multiplier());
    }
}
