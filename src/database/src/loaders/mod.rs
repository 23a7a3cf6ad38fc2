mod names;

pub use names::*;

use log::debug;

pub struct DatabaseEntity {
    pub names: NamesEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        let names = NamesLoader::load()?;

        debug!(
            "names loaded: {} athletes, {} items, {} teams",
            names.athletes.len(),
            names.items.len(),
            names.teams.len()
        );

        Ok(DatabaseEntity { names })
    }
}
