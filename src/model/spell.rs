use serde::{Deserialize, Serialize};

use super::{ids::SpellId, image::Image};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonerSpell {
    pub id: SpellId,
    pub name: String,
    pub description: String,
    /// Game mode names the spell can be taken in, e.g. `CLASSIC`.
    pub modes: Vec<String>,
    pub image: Image,
}

impl SummonerSpell {
    pub fn supports_mode(&self, mode: &str) -> bool {
        self.modes.iter().any(|m| m == mode)
    }
}
