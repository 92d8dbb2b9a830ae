use serde::{Deserialize, Serialize};

/// Sprite descriptor shipped with every Data Dragon entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub full: String,
    pub group: String,
    pub sprite: String,
    pub h: u32,
    pub w: u32,
    pub x: u32,
    pub y: u32,
}
