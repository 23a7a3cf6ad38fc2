pub mod athlete;
pub mod item;
pub mod team;

// Athlete exports
pub use athlete::{
    Athlete, AthleteBuilder, AthletePosition, AthleteStats, StatType,
    Rating, MeanRating,
    POSITIONS_COUNT, STAT_TYPES_COUNT,
};

// Item exports
pub use item::{Item, ITEM_UNIT_PRICE};

// Team exports
pub use team::{Team, TeamBuilder, TeamError, ROSTER_SIZE};
