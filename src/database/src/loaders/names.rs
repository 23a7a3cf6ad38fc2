use serde::Deserialize;

const STATIC_NAMES_JSON: &str = include_str!("../data/names.json");

#[derive(Deserialize)]
pub struct NamesEntity {
    pub athletes: Vec<String>,
    pub items: Vec<String>,
    pub teams: Vec<String>,
}

pub struct NamesLoader;

impl NamesLoader {
    pub fn load() -> Result<NamesEntity, serde_json::Error> {
        serde_json::from_str(STATIC_NAMES_JSON)
    }
}
