pub mod club;
pub mod generator;
pub mod market;
pub mod session;
pub mod shared;

pub use club::{
    // Athlete exports
    Athlete, AthleteBuilder, AthletePosition, AthleteStats, StatType,
    Rating, MeanRating,
    POSITIONS_COUNT, STAT_TYPES_COUNT,
    // Item exports
    Item, ITEM_UNIT_PRICE,
    // Team exports
    Team, TeamBuilder, TeamError, ROSTER_SIZE,
};

pub use generator::{
    Generator, GeneratorConfig, GeneratorError, NamePool, NamePools,
    OPPONENT_TEAMS_COUNT, STARTER_ATHLETES_COUNT, WEEKLY_ATHLETES_COUNT, WEEKLY_ITEMS_COUNT,
};

pub use market::{Market, MarketError};

pub use session::{
    Difficulty, Fixture, MatchOutcome, MatchResult, SeasonRecord, Session, SessionError,
    SessionSettings, WeekState, MAX_SEASON_WEEKS, MIN_SEASON_WEEKS,
};
