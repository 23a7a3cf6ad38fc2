use rand::Rng;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NamePool {
    Athlete,
    Item,
    Team,
}

impl Display for NamePool {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            NamePool::Athlete => "athlete",
            NamePool::Item => "item",
            NamePool::Team => "team",
        };

        write!(f, "{}", name)
    }
}

/// Source names for generated content.
#[derive(Debug, Clone, Default)]
pub struct NamePools {
    pub athlete_names: Vec<String>,
    pub item_names: Vec<String>,
    pub team_names: Vec<String>,
}

impl NamePools {
    pub fn new(athlete_names: Vec<String>, item_names: Vec<String>, team_names: Vec<String>) -> Self {
        NamePools {
            athlete_names,
            item_names,
            team_names,
        }
    }

    pub fn empty() -> Self {
        NamePools::default()
    }

    pub fn len(&self, pool: NamePool) -> usize {
        match pool {
            NamePool::Athlete => self.athlete_names.len(),
            NamePool::Item => self.item_names.len(),
            NamePool::Team => self.team_names.len(),
        }
    }
}

/// Working copy of the pools for one generation batch. Every name drawn is
/// removed, so a batch never hands out the same name twice.
pub(crate) struct NameDraw {
    pools: NamePools,
}

impl NameDraw {
    pub fn new(pools: &NamePools) -> Self {
        NameDraw {
            pools: pools.clone(),
        }
    }

    pub fn take<R: Rng + ?Sized>(&mut self, rng: &mut R, pool: NamePool) -> Option<String> {
        let names = match pool {
            NamePool::Athlete => &mut self.pools.athlete_names,
            NamePool::Item => &mut self.pools.item_names,
            NamePool::Team => &mut self.pools.team_names,
        };

        if names.is_empty() {
            return None;
        }

        let index = rng.random_range(0..names.len());

        Some(names.remove(index))
    }

    pub fn remaining(&self, pool: NamePool) -> usize {
        self.pools.len(pool)
    }
}
