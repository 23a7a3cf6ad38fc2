use crate::club::athlete::{Athlete, AthletePosition, Rating};
use crate::club::item::Item;
use crate::club::team::{Team, TeamError};
use crate::generator::{Generator, GeneratorError};
use crate::market::Market;
use crate::session::{Fixture, MatchResult, SeasonRecord, SessionSettings};
use log::{debug, info, warn};
use thiserror::Error;

/// Upper bound (exclusive) of the random bonus each side gets on match day.
const MATCH_ROLL_MAX: usize = 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WeekState {
    WeekStart,
    PoolsGenerated,
    PlayerPurchases,
    SeasonOver,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("roster is incomplete: {missing} position(s) unfilled")]
    RosterIncomplete { missing: usize },

    #[error("no opponent selected")]
    OpponentNotSelected,

    #[error("no {pool} at index {index}")]
    InvalidIndex { pool: &'static str, index: usize },

    #[error("week {0} has not started")]
    WeekNotStarted(u8),

    #[error("week {0} is already in progress")]
    WeekInProgress(u8),

    #[error("match for week {0} was already played")]
    MatchAlreadyPlayed(u8),

    #[error("season is over")]
    SeasonOver,

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Game context for one player's season: the club roster, the market, this
/// week's opponents and the results so far.
pub struct Session {
    settings: SessionSettings,
    generator: Generator,
    team: Team,
    market: Market,
    weekly_teams: Vec<Team>,
    opponent: Option<usize>,
    week: u8,
    state: WeekState,
    match_played: bool,
    results: Vec<MatchResult>,
}

impl Session {
    pub fn new(settings: SessionSettings, mut generator: Generator) -> Result<Self, SessionError> {
        settings.validate().map_err(SessionError::InvalidSettings)?;

        generator.set_opponent_multiplier(settings.difficulty.opponent_multiplier())?;

        let mut market = Market::new();
        market.set_starter_athletes(&mut generator)?;

        let team = Team::new(settings.team_name.trim().to_string());

        info!(
            "session created: team {}, {} difficulty, {} weeks",
            team.name(),
            settings.difficulty,
            settings.season_weeks
        );

        Ok(Session {
            settings,
            generator,
            team,
            market,
            weekly_teams: Vec::new(),
            opponent: None,
            week: 1,
            state: WeekState::WeekStart,
            match_played: false,
            results: Vec::new(),
        })
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn weekly_teams(&self) -> &[Team] {
        &self.weekly_teams
    }

    pub fn selected_opponent(&self) -> Option<&Team> {
        self.opponent.and_then(|index| self.weekly_teams.get(index))
    }

    pub fn week(&self) -> u8 {
        self.week
    }

    pub fn state(&self) -> WeekState {
        self.state
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn record(&self) -> SeasonRecord {
        SeasonRecord::from_results(&self.results)
    }

    /// Moves a starter candidate onto the roster.
    pub fn select_starter(&mut self, index: usize) -> Result<(), SessionError> {
        let athlete = self
            .market
            .starter_athletes()
            .get(index)
            .cloned()
            .ok_or(SessionError::InvalidIndex { pool: "starter", index })?;

        self.team.add_player(athlete)?;

        Ok(())
    }

    /// Takes a starter candidate back off the roster and returns it to its
    /// slot in the starter pool. Does nothing if that candidate was never
    /// selected.
    pub fn deselect_starter(&mut self, index: usize) -> Result<Option<Athlete>, SessionError> {
        let athlete = self
            .market
            .starter_athletes()
            .get(index)
            .ok_or(SessionError::InvalidIndex { pool: "starter", index })?;

        let removed = self.team.remove_player(athlete);

        if let Some(athlete) = &removed {
            self.market.update_starter(athlete);
        }

        Ok(removed)
    }

    /// Uses `item` on the rostered athlete at `position`. A starter keeps the
    /// same stats on the roster and in the starter pool.
    pub fn apply_item(&mut self, position: AthletePosition, item: Item) -> Result<u16, SessionError> {
        let value = self.team.apply_item(position, item)?;

        if let Some(athlete) = self.team.player(position) {
            self.market.update_starter(athlete);
        }

        Ok(value)
    }

    /// Refreshes the market pools and this week's opponents.
    pub fn start_week(&mut self) -> Result<(), SessionError> {
        match self.state {
            WeekState::WeekStart => {}
            WeekState::SeasonOver => return Err(SessionError::SeasonOver),
            _ => return Err(SessionError::WeekInProgress(self.week)),
        }

        self.market.set_purchasable_athletes(&mut self.generator)?;
        self.market.set_purchasable_items(&mut self.generator)?;
        self.weekly_teams = self.generator.generate_teams()?;

        self.opponent = None;
        self.match_played = false;
        self.state = WeekState::PoolsGenerated;

        info!(
            "week {} started, opponents: {}",
            self.week,
            self.weekly_teams
                .iter()
                .map(|t| t.name())
                .collect::<Vec<&str>>()
                .join(", ")
        );

        Ok(())
    }

    /// Logs the market athlete at `index` as bought this week and hands back
    /// a copy. The market pool itself is left untouched.
    pub fn record_athlete_purchase(&mut self, index: usize) -> Result<Athlete, SessionError> {
        self.ensure_week_open()?;

        let athlete = self
            .market
            .purchasable_athletes()
            .get(index)
            .cloned()
            .ok_or(SessionError::InvalidIndex { pool: "market athlete", index })?;

        self.market.add_weekly_purchased_athlete(athlete.clone());
        self.state = WeekState::PlayerPurchases;

        debug!("week {}: purchased athlete {}", self.week, athlete);

        Ok(athlete)
    }

    pub fn record_item_purchase(&mut self, index: usize) -> Result<Item, SessionError> {
        self.ensure_week_open()?;

        let item = self
            .market
            .purchasable_items()
            .get(index)
            .cloned()
            .ok_or(SessionError::InvalidIndex { pool: "market item", index })?;

        self.market.add_weekly_purchased_item(item.clone());
        self.state = WeekState::PlayerPurchases;

        debug!("week {}: purchased item {}", self.week, item);

        Ok(item)
    }

    pub fn select_opponent(&mut self, index: usize) -> Result<&Team, SessionError> {
        self.ensure_week_open()?;

        if index >= self.weekly_teams.len() {
            return Err(SessionError::InvalidIndex { pool: "opponent", index });
        }

        self.opponent = Some(index);

        Ok(&self.weekly_teams[index])
    }

    /// Checks everything a match needs: a running week, a full roster and a
    /// chosen opponent.
    pub fn start_match(&self) -> Result<Fixture<'_>, SessionError> {
        self.ensure_week_open()?;

        if self.match_played {
            return Err(SessionError::MatchAlreadyPlayed(self.week));
        }

        if !self.team.can_play() {
            let missing = self.team.missing_positions().len();
            warn!("week {}: cannot play, {} position(s) unfilled", self.week, missing);

            return Err(SessionError::RosterIncomplete { missing });
        }

        let opponent = self.selected_opponent().ok_or(SessionError::OpponentNotSelected)?;

        Ok(Fixture {
            week: self.week,
            team: &self.team,
            opponent,
        })
    }

    /// Plays this week's match as a static stat roll: team rating plus a
    /// bounded random bonus per side.
    pub fn play_match<R: Rating + ?Sized>(&mut self, rating: &R) -> Result<MatchResult, SessionError> {
        let (team_rating, opponent_rating, opponent_name) = {
            let fixture = self.start_match()?;
            (
                fixture.team.rating(rating),
                fixture.opponent.rating(rating),
                fixture.opponent.name().to_string(),
            )
        };

        let score = team_rating + self.generator.get_random_number(MATCH_ROLL_MAX)? as u32;
        let opponent_score = opponent_rating + self.generator.get_random_number(MATCH_ROLL_MAX)? as u32;

        let result = MatchResult::new(self.week, opponent_name, score, opponent_score);

        info!("{} {}", self.team.name(), result);

        self.results.push(result.clone());
        self.match_played = true;

        Ok(result)
    }

    /// Closes the week: clears purchases and the opponent choice, then moves
    /// to the next week or ends the season. Skipping the match is allowed and
    /// leaves no result for that week.
    pub fn end_week(&mut self) -> Result<WeekState, SessionError> {
        match self.state {
            WeekState::SeasonOver => return Err(SessionError::SeasonOver),
            WeekState::WeekStart => return Err(SessionError::WeekNotStarted(self.week)),
            _ => {}
        }

        self.market.clear_weekly_purchases();
        self.weekly_teams.clear();
        self.opponent = None;

        if self.week >= self.settings.season_weeks {
            self.state = WeekState::SeasonOver;

            let record = self.record();
            info!(
                "season over for {}: {}W {}D {}L",
                self.team.name(),
                record.wins,
                record.draws,
                record.losses
            );
        } else {
            self.week += 1;
            self.state = WeekState::WeekStart;
        }

        Ok(self.state)
    }

    fn ensure_week_open(&self) -> Result<(), SessionError> {
        match self.state {
            WeekState::PoolsGenerated | WeekState::PlayerPurchases => Ok(()),
            WeekState::WeekStart => Err(SessionError::WeekNotStarted(self.week)),
            WeekState::SeasonOver => Err(SessionError::SeasonOver),
        }
    }
}
