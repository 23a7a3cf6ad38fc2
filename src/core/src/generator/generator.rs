use crate::club::athlete::{Athlete, AthletePosition, AthleteStats, StatType, POSITIONS_COUNT, STAT_TYPES_COUNT};
use crate::club::item::Item;
use crate::club::team::Team;
use crate::generator::pools::{NameDraw, NamePool, NamePools};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

const STAT_MIN: u16 = 60;
const STAT_MAX: u16 = 70;
const ITEM_INCREASE_MAX: u16 = 10;

pub const WEEKLY_ATHLETES_COUNT: usize = 3;
pub const WEEKLY_ITEMS_COUNT: usize = 3;
pub const OPPONENT_TEAMS_COUNT: usize = 3;
pub const STARTER_ATHLETES_COUNT: usize = POSITIONS_COUNT + 1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("invalid position index: {0}")]
    InvalidPosition(usize),

    #[error("{0} name pool is exhausted")]
    PoolExhausted(NamePool),

    #[error("random range upper bound must be positive")]
    EmptyRange,

    #[error("invalid generated content: {0}")]
    InvalidContent(String),

    #[error("multiplier must be positive and finite, got {0}")]
    InvalidMultiplier(f32),
}

/// Both multipliers must be positive and finite. [`Generator`] refuses a
/// config that is not.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Scales every stat roll and item increase.
    pub multiplier: f32,
    /// Extra scaling on top of `multiplier` for opposing teams.
    pub opponent_multiplier: f32,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        check_multiplier(self.multiplier)?;
        check_multiplier(self.opponent_multiplier)
    }
}

fn check_multiplier(multiplier: f32) -> Result<(), GeneratorError> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(GeneratorError::InvalidMultiplier(multiplier))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            multiplier: 1.0,
            opponent_multiplier: 1.0,
        }
    }
}

/// Random content factory for athletes, items and opposing teams.
///
/// Each public `generate_*` call is a single batch: names are drawn from a
/// fresh copy of the pools and never repeat inside that batch.
pub struct Generator {
    pools: NamePools,
    config: GeneratorConfig,
    rng: StdRng,
}

impl Generator {
    pub fn new(pools: NamePools, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;

        Ok(Generator {
            pools,
            config,
            rng: StdRng::from_os_rng(),
        })
    }

    pub fn with_seed(pools: NamePools, config: GeneratorConfig, seed: u64) -> Result<Self, GeneratorError> {
        config.validate()?;

        Ok(Generator {
            pools,
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn set_opponent_multiplier(&mut self, multiplier: f32) -> Result<(), GeneratorError> {
        check_multiplier(multiplier)?;
        self.config.opponent_multiplier = multiplier;

        Ok(())
    }

    pub fn generate_position(&self, index: usize) -> Result<AthletePosition, GeneratorError> {
        AthletePosition::from_index(index).ok_or(GeneratorError::InvalidPosition(index))
    }

    pub fn generate_athlete(&mut self, position_index: usize) -> Result<Athlete, GeneratorError> {
        let mut draw = NameDraw::new(&self.pools);
        self.roll_athlete(&mut draw, position_index, self.config.multiplier)
    }

    /// Market athletes: positions are random and may repeat.
    pub fn generate_weekly_athletes(&mut self) -> Result<Vec<Athlete>, GeneratorError> {
        let mut draw = NameDraw::new(&self.pools);
        let mut athletes = Vec::with_capacity(WEEKLY_ATHLETES_COUNT);

        while athletes.len() < WEEKLY_ATHLETES_COUNT {
            let position_index = self.rng.random_range(0..POSITIONS_COUNT);
            athletes.push(self.roll_athlete(&mut draw, position_index, self.config.multiplier)?);
        }

        debug!("generated {} weekly athletes", athletes.len());

        Ok(athletes)
    }

    pub fn generate_weekly_items(&mut self) -> Result<Vec<Item>, GeneratorError> {
        let mut draw = NameDraw::new(&self.pools);
        let mut items = Vec::with_capacity(WEEKLY_ITEMS_COUNT);

        while items.len() < WEEKLY_ITEMS_COUNT {
            let name = draw
                .take(&mut self.rng, NamePool::Item)
                .ok_or(GeneratorError::PoolExhausted(NamePool::Item))?;

            let stat = StatType::ALL[self.rng.random_range(0..STAT_TYPES_COUNT)];
            let increase = Self::scale(self.rng.random_range(0..ITEM_INCREASE_MAX), self.config.multiplier);

            items.push(Item::new(name, stat, increase));
        }

        debug!("generated {} weekly items", items.len());

        Ok(items)
    }

    /// Opposing teams, each with one athlete per position in lineup order.
    pub fn generate_teams(&mut self) -> Result<Vec<Team>, GeneratorError> {
        let mut draw = NameDraw::new(&self.pools);
        let mut teams = Vec::with_capacity(OPPONENT_TEAMS_COUNT);
        let multiplier = self.config.multiplier * self.config.opponent_multiplier;

        while teams.len() < OPPONENT_TEAMS_COUNT {
            let name = draw
                .take(&mut self.rng, NamePool::Team)
                .ok_or(GeneratorError::PoolExhausted(NamePool::Team))?;

            let players = (0..POSITIONS_COUNT)
                .map(|position_index| self.roll_athlete(&mut draw, position_index, multiplier))
                .collect::<Result<Vec<Athlete>, GeneratorError>>()?;

            let team = Team::builder()
                .name(name)
                .players(players)
                .build()
                .map_err(GeneratorError::InvalidContent)?;

            teams.push(team);
        }

        debug!("generated {} opposing teams", teams.len());

        Ok(teams)
    }

    /// Candidates for the initial roster: one per position plus one extra at a
    /// random position, so the player chooses five out of six.
    pub fn generate_starter_athletes(&mut self) -> Result<Vec<Athlete>, GeneratorError> {
        let mut draw = NameDraw::new(&self.pools);
        let mut athletes = Vec::with_capacity(STARTER_ATHLETES_COUNT);

        for position_index in 0..POSITIONS_COUNT {
            athletes.push(self.roll_athlete(&mut draw, position_index, self.config.multiplier)?);
        }

        let extra_index = self.rng.random_range(0..POSITIONS_COUNT);
        athletes.push(self.roll_athlete(&mut draw, extra_index, self.config.multiplier)?);

        debug!("generated {} starter athletes", athletes.len());

        Ok(athletes)
    }

    pub fn get_random_number(&mut self, upper: usize) -> Result<usize, GeneratorError> {
        if upper == 0 {
            return Err(GeneratorError::EmptyRange);
        }

        Ok(self.rng.random_range(0..upper))
    }

    fn roll_athlete(
        &mut self,
        draw: &mut NameDraw,
        position_index: usize,
        multiplier: f32,
    ) -> Result<Athlete, GeneratorError> {
        let position = self.generate_position(position_index)?;

        let name = draw
            .take(&mut self.rng, NamePool::Athlete)
            .ok_or(GeneratorError::PoolExhausted(NamePool::Athlete))?;

        let stats = AthleteStats {
            offence: self.roll_stat(multiplier),
            defence: self.roll_stat(multiplier),
            stamina: self.roll_stat(multiplier),
            agility: self.roll_stat(multiplier),
        };

        Athlete::builder()
            .name(name)
            .position(position)
            .stats(stats)
            .build()
            .map_err(GeneratorError::InvalidContent)
    }

    fn roll_stat(&mut self, multiplier: f32) -> u16 {
        let value = self.rng.random_range(STAT_MIN..STAT_MAX);
        Self::scale(value, multiplier)
    }

    fn scale(value: u16, multiplier: f32) -> u16 {
        (value as f32 * multiplier) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pools() -> NamePools {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<String>>();

        NamePools::new(
            names(&[
                "Michael", "Jordan", "Steph", "Kush", "Droopy", "Hoi Fung", "Ray", "Zaza",
                "Archibold", "Freddie", "Wij", "Richard", "Kang", "Zheng", "Rundle", "Tim",
                "Sum", "Ting", "Wong", "Jake", "Tuffy", "Stevo",
            ]),
            names(&["Apple", "Blue Pot", "Sushi", "Katsu Chicken Sandwich", "Protein Shake", "Trenbolone Acetate"]),
            names(&["Celtics", "Nets", "Knicks", "76ers", "Raptors", "Bulls"]),
        )
    }

    fn generator() -> Generator {
        Generator::with_seed(pools(), GeneratorConfig::default(), 42).unwrap()
    }

    #[test]
    fn test_generate_position_mapping() {
        let generator = generator();

        assert_eq!(generator.generate_position(0), Ok(AthletePosition::PointGuard));
        assert_eq!(generator.generate_position(4), Ok(AthletePosition::Center));
    }

    #[test]
    fn test_generate_position_out_of_range() {
        assert_eq!(generator().generate_position(5), Err(GeneratorError::InvalidPosition(5)));
    }

    #[test]
    fn test_generate_athlete_invalid_index() {
        assert_eq!(
            generator().generate_athlete(7).unwrap_err(),
            GeneratorError::InvalidPosition(7)
        );
    }

    #[test]
    fn test_generate_athlete_stats_in_range() {
        let mut generator = generator();

        for index in 0..POSITIONS_COUNT {
            let athlete = generator.generate_athlete(index).unwrap();

            assert_eq!(athlete.position().index(), index);
            for stat in StatType::ALL {
                assert!((60..70).contains(&athlete.stat(stat)));
            }
        }
    }

    #[test]
    fn test_multiplier_scales_stats() {
        let config = GeneratorConfig {
            multiplier: 2.0,
            opponent_multiplier: 1.0,
        };
        let mut generator = Generator::with_seed(pools(), config, 1).unwrap();

        let athlete = generator.generate_athlete(2).unwrap();

        for stat in StatType::ALL {
            assert!((120..140).contains(&athlete.stat(stat)));
            assert_eq!(athlete.stat(stat) % 2, 0);
        }
    }

    #[test]
    fn test_weekly_athletes() {
        let mut generator = generator();

        for _ in 0..20 {
            let athletes = generator.generate_weekly_athletes().unwrap();
            assert_eq!(athletes.len(), WEEKLY_ATHLETES_COUNT);

            let names: HashSet<&str> = athletes.iter().map(|a| a.name()).collect();
            assert_eq!(names.len(), WEEKLY_ATHLETES_COUNT);
        }
    }

    #[test]
    fn test_weekly_athlete_positions_are_random() {
        let mut generator = generator();
        let mut seen = HashSet::new();
        let mut repeated = false;

        for _ in 0..50 {
            let positions: Vec<AthletePosition> = generator
                .generate_weekly_athletes()
                .unwrap()
                .iter()
                .map(|a| a.position())
                .collect();

            let distinct: HashSet<&AthletePosition> = positions.iter().collect();
            repeated |= distinct.len() < positions.len();

            seen.extend(positions);
        }

        assert_eq!(seen.len(), POSITIONS_COUNT);
        assert!(repeated);
    }

    #[test]
    fn test_weekly_items() {
        let mut generator = generator();

        for _ in 0..20 {
            let items = generator.generate_weekly_items().unwrap();
            assert_eq!(items.len(), WEEKLY_ITEMS_COUNT);

            let names: HashSet<&str> = items.iter().map(|i| i.name()).collect();
            assert_eq!(names.len(), WEEKLY_ITEMS_COUNT);

            for item in &items {
                assert!(item.increase() < 10);
                assert_eq!(item.price().amount, item.increase() as u32 * 100);
            }
        }
    }

    #[test]
    fn test_weekly_item_stats_vary() {
        let mut generator = generator();

        let stats: HashSet<StatType> = (0..50)
            .flat_map(|_| generator.generate_weekly_items().unwrap())
            .map(|item| item.stat())
            .collect();

        assert_eq!(stats.len(), STAT_TYPES_COUNT);
    }

    #[test]
    fn test_invalid_multiplier_is_rejected() {
        for multiplier in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = GeneratorConfig {
                multiplier,
                opponent_multiplier: 1.0,
            };

            assert!(matches!(
                Generator::with_seed(pools(), config, 1),
                Err(GeneratorError::InvalidMultiplier(_))
            ));
        }

        let mut generator = generator();
        assert!(generator.set_opponent_multiplier(-1.1).is_err());
        assert_eq!(generator.set_opponent_multiplier(1.1), Ok(()));
    }

    #[test]
    fn test_teams_have_full_distinct_rosters() {
        let mut generator = generator();
        let teams = generator.generate_teams().unwrap();

        assert_eq!(teams.len(), OPPONENT_TEAMS_COUNT);

        let team_names: HashSet<&str> = teams.iter().map(|t| t.name()).collect();
        assert_eq!(team_names.len(), OPPONENT_TEAMS_COUNT);

        // 15 athletes out of a 22-name pool, none repeated
        let athlete_names: HashSet<&str> = teams
            .iter()
            .flat_map(|t| t.players())
            .map(|a| a.name())
            .collect();
        assert_eq!(athlete_names.len(), OPPONENT_TEAMS_COUNT * POSITIONS_COUNT);

        for team in &teams {
            assert!(team.can_play());
            for position in AthletePosition::ALL {
                assert_eq!(team.player(position).map(|a| a.position()), Some(position));
            }
        }
    }

    #[test]
    fn test_opponent_multiplier_only_affects_teams() {
        let config = GeneratorConfig {
            multiplier: 1.0,
            opponent_multiplier: 2.0,
        };
        let mut generator = Generator::with_seed(pools(), config, 3).unwrap();

        let teams = generator.generate_teams().unwrap();
        for athlete in teams.iter().flat_map(|t| t.players()) {
            assert!(athlete.stat(StatType::Offence) >= 120);
        }

        let athlete = generator.generate_athlete(0).unwrap();
        assert!(athlete.stat(StatType::Offence) < 70);
    }

    #[test]
    fn test_starter_athletes_cover_every_position() {
        let mut generator = generator();
        let starters = generator.generate_starter_athletes().unwrap();

        assert_eq!(starters.len(), STARTER_ATHLETES_COUNT);

        let positions: HashSet<AthletePosition> = starters.iter().map(|a| a.position()).collect();
        assert_eq!(positions.len(), POSITIONS_COUNT);
    }

    #[test]
    fn test_exhausted_pool_is_reported() {
        let small = NamePools::new(
            vec!["Ray".into(), "Tim".into()],
            vec!["Apple".into()],
            vec!["Heat".into()],
        );
        let mut generator = Generator::with_seed(small, GeneratorConfig::default(), 9).unwrap();

        assert_eq!(
            generator.generate_weekly_athletes().unwrap_err(),
            GeneratorError::PoolExhausted(NamePool::Athlete)
        );
        assert_eq!(
            generator.generate_weekly_items().unwrap_err(),
            GeneratorError::PoolExhausted(NamePool::Item)
        );
        assert_eq!(
            generator.generate_teams().unwrap_err(),
            GeneratorError::PoolExhausted(NamePool::Athlete)
        );
    }

    #[test]
    fn test_random_number() {
        let mut generator = generator();

        assert_eq!(generator.get_random_number(0), Err(GeneratorError::EmptyRange));
        for _ in 0..50 {
            assert!(generator.get_random_number(4).unwrap() < 4);
        }
        assert_eq!(generator.get_random_number(1), Ok(0));
    }
}
