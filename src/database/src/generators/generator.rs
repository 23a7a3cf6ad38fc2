use crate::loaders::DatabaseEntity;
use hoops_core::{Generator, GeneratorConfig, NamePools, Session, SessionError, SessionSettings};
use log::info;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a new session from the loaded name data. A `seed` makes every
    /// roll of the session reproducible.
    pub fn generate(
        data: &DatabaseEntity,
        settings: SessionSettings,
        seed: Option<u64>,
    ) -> Result<Session, SessionError> {
        let pools = Self::generate_pools(data);
        let config = GeneratorConfig::default();

        let generator = match seed {
            Some(seed) => {
                info!("using seed {}", seed);
                Generator::with_seed(pools, config, seed)?
            }
            None => Generator::new(pools, config)?,
        };

        Session::new(settings, generator)
    }

    fn generate_pools(data: &DatabaseEntity) -> NamePools {
        NamePools::new(
            data.names.athletes.clone(),
            data.names.items.clone(),
            data.names.teams.clone(),
        )
    }
}
