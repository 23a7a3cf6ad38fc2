use crate::club::athlete::{next_athlete_id, Athlete, AthletePosition, AthleteStats};

// Builder for Athlete
#[derive(Default)]
pub struct AthleteBuilder {
    name: Option<String>,
    position: Option<AthletePosition>,
    stats: Option<AthleteStats>,
}

impl AthleteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn position(mut self, position: AthletePosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn stats(mut self, stats: AthleteStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn build(self) -> Result<Athlete, String> {
        let name = self.name.ok_or("name is required")?;

        if name.trim().is_empty() {
            return Err(String::from("name must not be blank"));
        }

        Ok(Athlete {
            id: next_athlete_id(),
            name,
            position: self.position.ok_or("position is required")?,
            stats: self.stats.ok_or("stats is required")?,
        })
    }
}
