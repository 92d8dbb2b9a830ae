use std::fmt::Display;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::image::Image;

const LANE_IMAGE_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/13.1.1/img/map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LaneId {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub id: LaneId,
    pub name: String,
    pub image: Image,
}

static LANES: Lazy<Vec<Lane>> = Lazy::new(|| {
    [
        (LaneId::Top, "Top", 11),
        (LaneId::Jungle, "Jungle", 12),
        (LaneId::Middle, "Mid", 13),
        (LaneId::Bottom, "Bot (ADC)", 14),
        (LaneId::Utility, "Support", 15),
    ]
    .into_iter()
    .map(|(id, name, map)| Lane {
        id,
        name: name.to_string(),
        image: Image {
            full: format!("{}/map{}.png", LANE_IMAGE_BASE, map),
            group: "map".to_string(),
            sprite: format!("map{}.png", map),
            h: 100,
            w: 100,
            x: 0,
            y: 0,
        },
    })
    .collect()
});

/// The five lanes in draft order. Fixed, never fetched.
pub fn all_lanes() -> &'static [Lane] {
    &LANES
}

impl LaneId {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaneId::Top => "TOP",
            LaneId::Jungle => "JUNGLE",
            LaneId::Middle => "MIDDLE",
            LaneId::Bottom => "BOTTOM",
            LaneId::Utility => "UTILITY",
        }
    }
}

impl Display for LaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
