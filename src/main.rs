use std::env;
use color_eyre::eyre::eyre;
use env_logger::Env;
use hoops_core::{AthletePosition, Difficulty, MeanRating, Rating, Session, SessionSettings, WeekState};
use hoops_database::{DatabaseGenerator, DatabaseLoader};
use log::{info, warn};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let settings = read_settings()?;
    let seed = env::var("SEED").ok().map(|s| s.parse::<u64>()).transpose()?;

    let database = DatabaseLoader::load()?;

    info!("database loaded");

    let mut session = DatabaseGenerator::generate(&database, settings, seed)?;

    pick_starters(&mut session)?;

    while session.state() != WeekState::SeasonOver {
        play_week(&mut session, &MeanRating)?;
    }

    let record = session.record();

    info!(
        "{} finished the season {}W {}D {}L",
        session.team().name(),
        record.wins,
        record.draws,
        record.losses
    );

    Ok(())
}

fn read_settings() -> color_eyre::Result<SessionSettings> {
    let defaults = SessionSettings::default();

    let team_name = env::var("TEAM_NAME").unwrap_or(defaults.team_name);

    let difficulty = match env::var("DIFFICULTY") {
        Ok(value) => value.parse::<Difficulty>().map_err(|e| eyre!(e))?,
        Err(_) => defaults.difficulty,
    };

    let season_weeks = match env::var("SEASON_WEEKS") {
        Ok(value) => value.parse::<u8>()?,
        Err(_) => defaults.season_weeks,
    };

    Ok(SessionSettings::new(team_name, difficulty, season_weeks))
}

/// Takes the first candidate for every position; the spare is left out.
fn pick_starters(session: &mut Session) -> color_eyre::Result<()> {
    for index in 0..session.market().starter_athletes().len() {
        if session.team().can_play() {
            break;
        }

        if let Err(e) = session.select_starter(index) {
            warn!("starter {} skipped: {}", index, e);
        }
    }

    if !session.team().can_play() {
        return Err(eyre!("could not fill the roster from the starter candidates"));
    }

    Ok(())
}

fn play_week<R: Rating>(session: &mut Session, rating: &R) -> color_eyre::Result<()> {
    session.start_week()?;

    use_best_item(session)?;

    let weakest = session
        .weekly_teams()
        .iter()
        .enumerate()
        .min_by_key(|(_, team)| team.rating(rating))
        .map(|(index, _)| index)
        .ok_or_else(|| eyre!("no opponents generated for week {}", session.week()))?;

    let week = session.week();
    let opponent = session.select_opponent(weakest)?.to_string();
    info!("week {}: playing {}", week, opponent);

    session.play_match(rating)?;
    session.end_week()?;

    Ok(())
}

/// Buys the strongest item of the week and gives it to whoever is weakest in
/// that stat.
fn use_best_item(session: &mut Session) -> color_eyre::Result<()> {
    let best = session
        .market()
        .purchasable_items()
        .iter()
        .enumerate()
        .max_by_key(|(_, item)| item.increase())
        .filter(|(_, item)| item.increase() > 0)
        .map(|(index, _)| index);

    let Some(index) = best else {
        return Ok(());
    };

    let item = session.record_item_purchase(index)?;

    let target = session
        .team()
        .players()
        .into_iter()
        .min_by_key(|athlete| athlete.stat(item.stat()))
        .map(|athlete| athlete.position())
        .unwrap_or(AthletePosition::PointGuard);

    let name = item.name().to_string();
    let value = session.apply_item(target, item)?;

    info!("week {}: {} used on {}, now {}", session.week(), name, target, value);

    Ok(())
}
