use crate::club::athlete::Athlete;
use crate::club::team::Team;

#[derive(Default)]
pub struct TeamBuilder {
    name: Option<String>,
    players: Option<Vec<Athlete>>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn players(mut self, players: Vec<Athlete>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let mut team = Team::new(self.name.ok_or("name is required")?);

        for athlete in self.players.unwrap_or_default() {
            team.add_player(athlete).map_err(|e| e.to_string())?;
        }

        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::athlete::{AthletePosition, AthleteStats};

    fn athlete(position: AthletePosition) -> Athlete {
        Athlete::builder()
            .name(String::from("Freddie"))
            .position(position)
            .stats(AthleteStats::new(60, 60, 60, 60))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_full_roster() {
        let team = TeamBuilder::new()
            .name(String::from("Celtics"))
            .players(AthletePosition::ALL.iter().map(|p| athlete(*p)).collect())
            .build()
            .unwrap();

        assert!(team.can_play());
    }

    #[test]
    fn test_build_rejects_duplicate_positions() {
        let result = TeamBuilder::new()
            .name(String::from("Nets"))
            .players(vec![athlete(AthletePosition::Center), athlete(AthletePosition::Center)])
            .build();

        assert_eq!(result.unwrap_err(), "position C is already taken by Freddie");
    }

    #[test]
    fn test_build_requires_name() {
        assert_eq!(TeamBuilder::new().build().unwrap_err(), "name is required");
    }
}
