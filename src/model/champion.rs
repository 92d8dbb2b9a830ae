use serde::{Deserialize, Serialize};

use super::{ids::ChampionId, image::Image};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    pub id: ChampionId,
    pub key: String,
    pub name: String,
    pub image: Image,
}
